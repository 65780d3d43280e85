//! Scalar type selection and the crate-wide tolerance.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance shared by the overlap, tangency and off-cone tests.
/// Defaults to `1e-3` for both precisions, but can be overridden:
///  1) **Build-time**: set env var `CONESTACK_TOLERANCE` (e.g. `CONESTACK_TOLERANCE=1e-4 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before building a cone
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

/// Default tolerance. Large enough to absorb the roundoff accumulated by
/// repeated rotations about the vertex.
pub const DEFAULT_TOLERANCE: Real = 1e-3;

/// Returns the current tolerance.
/// If not set yet, it tries `CONESTACK_TOLERANCE` (parsed as the active `Real`) and
/// falls back to [`DEFAULT_TOLERANCE`].
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("CONESTACK_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        DEFAULT_TOLERANCE
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `conestack::float_types::set_tolerance(1e-4);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

/// A full turn, in degrees. Sector angles are always expressed in degrees.
pub const FULL_TURN_DEGREES: Real = 360.0;
