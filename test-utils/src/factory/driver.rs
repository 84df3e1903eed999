//! Driver factory for creating test driver entities.

use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::DriverStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test drivers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::driver::DriverFactory;
///
/// let driver = DriverFactory::new(&db)
///     .license_expiry(yesterday)
///     .build()
///     .await?;
/// ```
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    license_number: String,
    license_expiry: NaiveDate,
    safety_score: Option<f64>,
    status: DriverStatus,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Driver {id}"`
    /// - license_number: `"LIC-{id}"`
    /// - license_expiry: one year from today
    /// - status: `On Duty`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Driver {}", id),
            license_number: format!("LIC-{}", id),
            license_expiry: (Utc::now() + Duration::days(365)).date_naive(),
            safety_score: Some(100.0),
            status: DriverStatus::OnDuty,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn license_expiry(mut self, license_expiry: NaiveDate) -> Self {
        self.license_expiry = license_expiry;
        self
    }

    pub fn status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the driver entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::driver::Model)` - Created driver entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            license_number: ActiveValue::Set(self.license_number),
            license_expiry: ActiveValue::Set(self.license_expiry),
            safety_score: ActiveValue::Set(self.safety_score),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `On Duty` driver with a valid license.
///
/// Shorthand for `DriverFactory::new(db).build().await`.
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).build().await
}
