//! Construction and stacking errors

use crate::disk::DiskId;
use crate::float_types::Real;
use crate::geometry::Side;

/// All the possible failures of building or advancing a [`Cone`](crate::cone::Cone).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConeError {
    /// (InvalidAngle) The sector angle is not in the open interval (0, 360) degrees
    #[error("(InvalidAngle) sector angle must lie strictly between 0 and 360 degrees, got {0}")]
    InvalidAngle(Real),
    /// (InvalidRadius) The disk radius is not a positive finite number
    #[error("(InvalidRadius) disk radius must be positive and finite, got {0}")]
    InvalidRadius(Real),
    /// (InvalidHeight) The seed height fraction is outside [0, 1]
    #[error("(InvalidHeight) seed height must lie in [0, 1], got {0}")]
    InvalidHeight(Real),
    /// (InvalidVertex) The vertex position has a NaN or infinite coordinate
    #[error("(InvalidVertex) the vertex position must be finite")]
    InvalidVertex,
    /// (NoCandidate) Every candidate position was rejected; the packing has stalled
    #[error("(NoCandidate) packing stalled at iteration {iteration}: no valid child position")]
    NoCandidate { iteration: usize },
    /// (NoTouchingParent) No frontier disk touches the new disk on one side
    #[error("(NoTouchingParent) no frontier disk touches disk {child} on its {side} side")]
    NoTouchingParent { child: DiskId, side: Side },
    /// (ParentNotFound) An attributed parent is missing from the frontier
    #[error("(ParentNotFound) parent disk {id} is not on the frontier")]
    ParentNotFound { id: DiskId },
}
