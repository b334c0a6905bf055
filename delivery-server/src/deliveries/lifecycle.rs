//! Delivery lifecycle rules
//!
//! The status state machine:
//!
//! ```text
//! pending ──► processing ──► delivered
//! ```
//!
//! Status only moves forward. Logs may be appended while a delivery is
//! still `pending`; once another workflow picks it up (`processing`)
//! its history is frozen until it resolves, and a `delivered` record is
//! closed for good.

use shared::models::DeliveryStatus;

/// Rejection message when the delivery is mid-workflow
pub const REJECT_PROCESSING: &str = "Cannot add log to a delivery that is still processing";

/// Rejection message when the record is closed
pub const REJECT_DELIVERED: &str = "Cannot add log to a delivery that has already been delivered";

/// Whether a new log may be appended given the current status. Pure.
pub fn can_append_log(status: DeliveryStatus) -> bool {
    matches!(status, DeliveryStatus::Pending)
}

/// The reason a log append is rejected, distinguishing the two
/// ineligible states; `None` when the append is allowed.
pub fn append_rejection(status: DeliveryStatus) -> Option<&'static str> {
    match status {
        DeliveryStatus::Pending => None,
        DeliveryStatus::Processing => Some(REJECT_PROCESSING),
        DeliveryStatus::Delivered => Some(REJECT_DELIVERED),
    }
}

/// Valid forward transitions. Regressions, skips and self-loops are all
/// rejected.
pub fn can_transition(from: DeliveryStatus, to: DeliveryStatus) -> bool {
    matches!(
        (from, to),
        (DeliveryStatus::Pending, DeliveryStatus::Processing)
            | (DeliveryStatus::Processing, DeliveryStatus::Delivered)
    )
}
