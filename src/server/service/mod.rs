//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They:
//!
//! - **Enforce Business Rules**: eligibility checks and the trip lifecycle
//! - **Own Transactions**: every mutating operation is one transaction with row locks
//! - **Speak Domain Models**: controllers hand in params and receive domain models back

pub mod trip;
