pub mod app_setting;
pub mod car_make;
pub mod car_model;
pub mod car_note;
pub mod client;
pub mod part;
pub mod part_type;
pub mod stock_movement;
pub mod supplier;
pub mod turbo_note;
pub mod turbo_part;
pub mod vehicle;
pub mod work_order;
pub mod work_process;
