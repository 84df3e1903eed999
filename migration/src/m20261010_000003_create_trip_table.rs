use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261010_000001_create_vehicle_table::Vehicle, m20261010_000002_create_driver_table::Driver,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(integer(Trip::VehicleId))
                    .col(integer(Trip::DriverId))
                    .col(string_len(Trip::Origin, 255))
                    .col(string_len(Trip::Destination, 255))
                    .col(integer(Trip::CargoWeight).check(Expr::col(Trip::CargoWeight).gt(0)))
                    .col(double_null(Trip::DistanceKm))
                    .col(double_null(Trip::Revenue))
                    .col(string(Trip::Status).default("Draft"))
                    .col(timestamp_with_time_zone_null(Trip::StartTime))
                    .col(timestamp_with_time_zone_null(Trip::EndTime))
                    // Trips are never deleted, so resource rows cannot cascade away
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_vehicle_id")
                            .from(Trip::Table, Trip::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_driver_id")
                            .from(Trip::Table, Trip::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_trip_vehicle_id", Trip::VehicleId),
            ("idx_trip_driver_id", Trip::DriverId),
            ("idx_trip_status", Trip::Status),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Trip::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in ["idx_trip_status", "idx_trip_driver_id", "idx_trip_vehicle_id"] {
            manager
                .drop_index(Index::drop().name(name).table(Trip::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    Id,
    VehicleId,
    DriverId,
    Origin,
    Destination,
    CargoWeight,
    DistanceKm,
    Revenue,
    Status,
    StartTime,
    EndTime,
}
