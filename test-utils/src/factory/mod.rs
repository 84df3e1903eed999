//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let vehicle = factory::create_vehicle(&db).await?;
//! let driver = factory::create_driver(&db).await?;
//!
//! // Create a dispatched trip along with its resources
//! let (vehicle, driver, trip) = factory::helpers::create_dispatched_trip(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::VehicleStatus;
//! use test_utils::factory;
//!
//! let vehicle = factory::vehicle::VehicleFactory::new(&db)
//!     .max_capacity_kg(10_000)
//!     .status(VehicleStatus::InShop)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `vehicle` - Create vehicle entities
//! - `driver` - Create driver entities
//! - `trip` - Create trip entities referencing existing resources
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod driver;
pub mod helpers;
pub mod trip;
pub mod vehicle;

pub use driver::create_driver;
pub use trip::create_trip;
pub use vehicle::create_vehicle;
