use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_inventory_tables::Migration),
            Box::new(m20240101_000002_create_clients_vehicles_tables::Migration),
            Box::new(m20240101_000003_create_work_orders_table::Migration),
            Box::new(m20240101_000004_create_catalog_tables::Migration),
            Box::new(m20240101_000005_create_car_reference_tables::Migration),
            Box::new(m20240101_000006_create_notes_tables::Migration),
            Box::new(m20240101_000007_create_app_settings_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_inventory_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_inventory_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PartTypes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PartTypes::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PartTypes::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(PartTypes::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Suppliers::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Parts::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Parts::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Parts::Name).string().not_null())
                        .col(
                            ColumnDef::new(Parts::Code)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Parts::PartTypeId).uuid().not_null())
                        .col(ColumnDef::new(Parts::SupplierId).uuid().not_null())
                        .col(
                            ColumnDef::new(Parts::Notes)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Parts::StockQuantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Parts::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Parts::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_parts_part_type_id")
                        .table(Parts::Table)
                        .col(Parts::PartTypeId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_parts_supplier_id")
                        .table(Parts::Table)
                        .col(Parts::SupplierId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(StockMovements::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StockMovements::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StockMovements::PartId).uuid().not_null())
                        .col(
                            ColumnDef::new(StockMovements::MovementType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StockMovements::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(StockMovements::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stock_movements_part_id")
                        .table(StockMovements::Table)
                        .col(StockMovements::PartId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(StockMovements::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Parts::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PartTypes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PartTypes {
        Table,
        Id,
        Name,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Suppliers {
        Table,
        Id,
        Name,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum Parts {
        Table,
        Id,
        Name,
        Code,
        PartTypeId,
        SupplierId,
        Notes,
        StockQuantity,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum StockMovements {
        Table,
        Id,
        PartId,
        MovementType,
        Quantity,
        CreatedAt,
    }
}

mod m20240101_000002_create_clients_vehicles_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_clients_vehicles_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Clients::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Clients::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Clients::Name).string().not_null())
                        .col(
                            ColumnDef::new(Clients::Phone)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Clients::Email)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Clients::Address)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Clients::CompanyName)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Clients::TaxNumber)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Clients::Notes)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Clients::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Clients::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_clients_name")
                        .table(Clients::Table)
                        .col(Clients::Name)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Vehicles::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Vehicles::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Vehicles::ClientId).uuid().not_null())
                        .col(
                            ColumnDef::new(Vehicles::Make)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Vehicles::Model)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Vehicles::Year).integer().null())
                        .col(
                            ColumnDef::new(Vehicles::LicensePlate)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Vehicles::Vin)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(Vehicles::EngineCode)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Vehicles::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_vehicles_client_id")
                        .table(Vehicles::Table)
                        .col(Vehicles::ClientId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Vehicles::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Clients::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Clients {
        Table,
        Id,
        Name,
        Phone,
        Email,
        Address,
        CompanyName,
        TaxNumber,
        Notes,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Vehicles {
        Table,
        Id,
        ClientId,
        Make,
        Model,
        Year,
        LicensePlate,
        Vin,
        EngineCode,
        CreatedAt,
    }
}

mod m20240101_000003_create_work_orders_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_work_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(WorkOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkOrders::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::WorkNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(WorkOrders::ClientId).uuid().not_null())
                        .col(ColumnDef::new(WorkOrders::VehicleId).uuid().null())
                        .col(ColumnDef::new(WorkOrders::TurboCode).string().not_null())
                        .col(ColumnDef::new(WorkOrders::ReceivedDate).date().not_null())
                        .col(
                            ColumnDef::new(WorkOrders::CarMake)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::CarModel)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(WorkOrders::CarYear).integer().null())
                        .col(
                            ColumnDef::new(WorkOrders::LicensePlate)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::EngineCode)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::GeneralNotes)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(WorkOrders::Parts).json().not_null())
                        .col(ColumnDef::new(WorkOrders::Processes).json().not_null())
                        .col(
                            ColumnDef::new(WorkOrders::StatusPassed)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::StatusRefused)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::CleaningPrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::ReconditioningPrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::TurboPrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(WorkOrders::Status).string().not_null())
                        .col(
                            ColumnDef::new(WorkOrders::QuoteSent)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::QuoteAccepted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::EstimatedCompletion)
                                .date()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::Finalized)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(WorkOrders::ClientNotified)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(WorkOrders::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(WorkOrders::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_work_orders_client_id")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::ClientId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_work_orders_status")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_work_orders_created_at")
                        .table(WorkOrders::Table)
                        .col(WorkOrders::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WorkOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum WorkOrders {
        Table,
        Id,
        WorkNumber,
        ClientId,
        VehicleId,
        TurboCode,
        ReceivedDate,
        CarMake,
        CarModel,
        CarYear,
        LicensePlate,
        EngineCode,
        GeneralNotes,
        Parts,
        Processes,
        StatusPassed,
        StatusRefused,
        CleaningPrice,
        ReconditioningPrice,
        TurboPrice,
        Status,
        QuoteSent,
        QuoteAccepted,
        EstimatedCompletion,
        Finalized,
        ClientNotified,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000004_create_catalog_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TurboParts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TurboParts::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TurboParts::Category).string().not_null())
                        .col(ColumnDef::new(TurboParts::PartCode).string().not_null())
                        .col(
                            ColumnDef::new(TurboParts::Supplier)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(TurboParts::Price)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(TurboParts::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(TurboParts::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_turbo_parts_category")
                        .table(TurboParts::Table)
                        .col(TurboParts::Category)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(WorkProcesses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(WorkProcesses::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(WorkProcesses::Name).string().not_null())
                        .col(
                            ColumnDef::new(WorkProcesses::Category)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(
                            ColumnDef::new(WorkProcesses::EstimatedTime)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(WorkProcesses::BasePrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(WorkProcesses::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(WorkProcesses::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(WorkProcesses::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(TurboParts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TurboParts {
        Table,
        Id,
        Category,
        PartCode,
        Supplier,
        Price,
        Active,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum WorkProcesses {
        Table,
        Id,
        Name,
        Category,
        EstimatedTime,
        BasePrice,
        Active,
        CreatedAt,
    }
}

mod m20240101_000005_create_car_reference_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_car_reference_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(CarMakes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(CarMakes::Id).uuid().primary_key().not_null())
                        .col(
                            ColumnDef::new(CarMakes::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(CarMakes::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CarModels::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CarModels::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(CarModels::MakeId).uuid().not_null())
                        .col(ColumnDef::new(CarModels::Name).string().not_null())
                        .col(ColumnDef::new(CarModels::EngineCodes).json().not_null())
                        .col(ColumnDef::new(CarModels::CommonTurbos).json().not_null())
                        .col(ColumnDef::new(CarModels::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_car_models_make_id")
                        .table(CarModels::Table)
                        .col(CarModels::MakeId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CarModels::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CarMakes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum CarMakes {
        Table,
        Id,
        Name,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum CarModels {
        Table,
        Id,
        MakeId,
        Name,
        EngineCodes,
        CommonTurbos,
        CreatedAt,
    }
}

mod m20240101_000006_create_notes_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_notes_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(TurboNotes::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TurboNotes::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(TurboNotes::TurboCode).string().not_null())
                        .col(ColumnDef::new(TurboNotes::NoteType).string().not_null())
                        .col(ColumnDef::new(TurboNotes::Title).string().not_null())
                        .col(
                            ColumnDef::new(TurboNotes::Description)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(TurboNotes::CreatedBy).string().not_null())
                        .col(
                            ColumnDef::new(TurboNotes::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(TurboNotes::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_turbo_notes_turbo_code")
                        .table(TurboNotes::Table)
                        .col(TurboNotes::TurboCode)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CarNotes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(CarNotes::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(CarNotes::CarMake).string().not_null())
                        .col(ColumnDef::new(CarNotes::CarModel).string().not_null())
                        .col(
                            ColumnDef::new(CarNotes::EngineCode)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(CarNotes::NoteType).string().not_null())
                        .col(ColumnDef::new(CarNotes::Title).string().not_null())
                        .col(
                            ColumnDef::new(CarNotes::Description)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(CarNotes::CreatedBy).string().not_null())
                        .col(
                            ColumnDef::new(CarNotes::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(CarNotes::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_car_notes_make_model")
                        .table(CarNotes::Table)
                        .col(CarNotes::CarMake)
                        .col(CarNotes::CarModel)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CarNotes::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(TurboNotes::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum TurboNotes {
        Table,
        Id,
        TurboCode,
        NoteType,
        Title,
        Description,
        CreatedBy,
        Active,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum CarNotes {
        Table,
        Id,
        CarMake,
        CarModel,
        EngineCode,
        NoteType,
        Title,
        Description,
        CreatedBy,
        Active,
        CreatedAt,
    }
}

mod m20240101_000007_create_app_settings_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_app_settings_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AppSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AppSettings::Key)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(AppSettings::Value).json().not_null())
                        .col(
                            ColumnDef::new(AppSettings::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AppSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum AppSettings {
        Table,
        Key,
        Value,
        UpdatedAt,
    }
}
