//! Server-side API backend and dispatch logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. Its one
//! piece of real business logic is the trip dispatch orchestrator, which allocates a vehicle
//! and a driver to a trip and walks the trip through its lifecycle while keeping resource
//! availability consistent under concurrent requests.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - The dispatch orchestrator and its transaction handling
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities, usable inside a transaction
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Clock** (`clock`) - Injectable time source for timestamps and license checks
//! - **State** (`state`) - Shared application state (DB pool, clock)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the body and converts the DTO to params
//! 3. **Service** opens a transaction, locks resource rows, validates and mutates
//! 4. **Data** issues the locked reads and writes against the transaction
//! 5. **Service** commits (or rolls back) and returns a domain model
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod clock;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
