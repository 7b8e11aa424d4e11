//! Error type for the fallible reservation API.

use thiserror::Error;

/// Failure to make room in a [`Set`](crate::Set).
///
/// Every other set operation is total; only [`Set::try_reserve`](crate::Set::try_reserve)
/// reports errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// The requested capacity needs more buckets than `usize` can count.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator refused the bucket array.
    #[error("allocation of {buckets} buckets failed")]
    AllocError {
        /// Bucket count that was requested.
        buckets: usize,
    },
}
