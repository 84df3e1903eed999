use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string(Driver::Name))
                    .col(string_uniq(Driver::LicenseNumber))
                    .col(date(Driver::LicenseExpiry))
                    .col(double_null(Driver::SafetyScore).default(100.0))
                    .col(string(Driver::Status).default("Off Duty"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_driver_status")
                    .table(Driver::Table)
                    .col(Driver::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_driver_license_expiry")
                    .table(Driver::Table)
                    .col(Driver::LicenseExpiry)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_driver_license_expiry")
                    .table(Driver::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_driver_status")
                    .table(Driver::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    Name,
    LicenseNumber,
    LicenseExpiry,
    SafetyScore,
    Status,
}
