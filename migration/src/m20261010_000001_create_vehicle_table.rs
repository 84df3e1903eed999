use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string(Vehicle::Model))
                    .col(string_uniq(Vehicle::LicensePlate))
                    .col(
                        integer(Vehicle::MaxCapacityKg)
                            .check(Expr::col(Vehicle::MaxCapacityKg).gt(0)),
                    )
                    .col(
                        integer(Vehicle::OdometerKm)
                            .default(0)
                            .check(Expr::col(Vehicle::OdometerKm).gte(0)),
                    )
                    .col(double(Vehicle::AcquisitionCost))
                    .col(string(Vehicle::Status).default("Available"))
                    .to_owned(),
            )
            .await?;

        // Dispatch filters on availability
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_status")
                    .table(Vehicle::Table)
                    .col(Vehicle::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_vehicle_status")
                    .table(Vehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    LicensePlate,
    MaxCapacityKg,
    OdometerKm,
    AcquisitionCost,
    Status,
}
