//! Rejection of candidate positions that overlap already-placed disks.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use traits::OverlapOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialOverlapOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelOverlapOps;

/// The overlap filter used by [`Cone`](crate::cone::Cone) for the active feature set.
#[cfg(not(feature = "parallel"))]
pub type DefaultOverlapOps = SerialOverlapOps;

/// The overlap filter used by [`Cone`](crate::cone::Cone) for the active feature set.
#[cfg(feature = "parallel")]
pub type DefaultOverlapOps = ParallelOverlapOps;
