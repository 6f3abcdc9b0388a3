pub mod branding;
pub mod catalog;
pub mod clients;
pub mod notes;
pub mod part_types;
pub mod parts;
pub mod seed;
pub mod stock_movements;
pub mod suppliers;
pub mod vehicles;
pub mod work_orders;
