//! Wire-level data transfer objects.
//!
//! These types define the JSON shapes accepted and returned by the HTTP API. They are
//! converted to and from server domain models at the controller boundary.

pub mod api;
pub mod trip;
