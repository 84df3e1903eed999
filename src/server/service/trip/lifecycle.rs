//! Trip lifecycle state machine.
//!
//! The full transition table lives in [`allowed_targets`]; every other function here is
//! derived from it.

use entity::sea_orm_active_enums::TripStatus;

use crate::server::error::dispatch::DispatchError;

/// Legal successor states of `from`.
///
/// | From | Allowed To |
/// |---|---|
/// | Draft | Dispatched, Cancelled |
/// | Dispatched | InTransit, Completed, Cancelled |
/// | InTransit | OutForDelivery, Completed, Cancelled |
/// | OutForDelivery | Delivered, Completed, Cancelled |
/// | Delivered | Completed |
/// | Completed | |
/// | Cancelled | |
pub fn allowed_targets(from: TripStatus) -> &'static [TripStatus] {
    match from {
        TripStatus::Draft => &[TripStatus::Dispatched, TripStatus::Cancelled],
        TripStatus::Dispatched => &[
            TripStatus::InTransit,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ],
        TripStatus::InTransit => &[
            TripStatus::OutForDelivery,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ],
        TripStatus::OutForDelivery => &[
            TripStatus::Delivered,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ],
        TripStatus::Delivered => &[TripStatus::Completed],
        TripStatus::Completed | TripStatus::Cancelled => &[],
    }
}

pub fn can_transition(from: TripStatus, to: TripStatus) -> bool {
    allowed_targets(from).contains(&to)
}

/// A status with no legal successors.
pub fn is_terminal(status: TripStatus) -> bool {
    allowed_targets(status).is_empty()
}

/// Whether entering `status` returns the trip's vehicle and driver to service.
///
/// `Delivered` keeps both reserved until the trip is signed off as `Completed`.
pub fn releases_resources(status: TripStatus) -> bool {
    is_terminal(status)
}

/// Rejects any transition not in the table.
///
/// # Returns
/// - `Ok(())`: `to` is a legal successor of `from`
/// - `Err(DispatchError::InvalidTransition)`: Otherwise, naming both states
pub fn ensure_transition(
    trip_id: i32,
    from: TripStatus,
    to: TripStatus,
) -> Result<(), DispatchError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(DispatchError::InvalidTransition { trip_id, from, to })
    }
}
