//! Database repository layer for the dispatch entities.
//!
//! Repositories wrap SeaORM entity queries for vehicles, drivers and trips. They are
//! generic over [`ConnectionTrait`](sea_orm::ConnectionTrait) so the same repository can
//! run against the connection pool for reads or against an open
//! [`DatabaseTransaction`](sea_orm::DatabaseTransaction) for the orchestrator's locked
//! read-modify-write sequences.

pub mod driver;
pub mod trip;
pub mod vehicle;

#[cfg(test)]
mod test;
