//! FleetFlow Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the dispatch
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, plus factories for the vehicle, driver and trip tables.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn dispatches_trip() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_dispatch_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let vehicle = factory::create_vehicle(db).await?;
//!     let driver = factory::create_driver(db).await?;
//!     // Perform dispatch operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
