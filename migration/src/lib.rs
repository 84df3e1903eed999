pub use sea_orm_migration::prelude::*;

mod m20261010_000001_create_vehicle_table;
mod m20261010_000002_create_driver_table;
mod m20261010_000003_create_trip_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261010_000001_create_vehicle_table::Migration),
            Box::new(m20261010_000002_create_driver_table::Migration),
            Box::new(m20261010_000003_create_trip_table::Migration),
        ]
    }
}
