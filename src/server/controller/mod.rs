//! HTTP request handlers.
//!
//! Controllers extract and validate request data, convert DTOs to params, call the
//! service layer and convert the returned domain models back to DTOs.

pub mod health;
pub mod trip;
