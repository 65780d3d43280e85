//! Stacking equal **disks on a cone** one at a time, always in the lowest free
//! position, and reading the **parastichy** counts off the growing frontier.
//!
//! The cone is unrolled into a planar sector with its vertex at the origin.
//! Its two straight edges are identified by a rotation of `angle` degrees, so
//! every computation that crosses the seam works on rotated copies.
//!
//! ```
//! use conestack::{Cone, ConeConfig};
//!
//! let mut cone = Cone::new(ConeConfig::new(90.0, 0.1, 0.9)).unwrap();
//! cone.run(50).unwrap();
//! let counts = cone.history().latest().unwrap();
//! assert!(counts.total() + 1 >= cone.front().len());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render a cone and its parastichy history as SVG
//! - **cli**: the `conestack` batch binary
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for the overlap filter

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod candidates;
pub mod cone;
pub mod disk;
pub mod errors;
pub mod float_types;
pub mod front;
pub mod geometry;
pub mod overlap;
pub mod parastichy;
pub mod registry;
pub mod sector;

#[cfg(feature = "svg-io")]
pub mod render;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use cone::{Cone, ConeConfig, OverlapScan};
pub use disk::{Disk, DiskId, ParentRef, Parents};
pub use errors::ConeError;
pub use front::Front;
pub use geometry::Side;
pub use parastichy::{ParastichyCounts, ParastichyHistory, Segment, SegmentDirection};
pub use sector::Sector;

#[cfg(feature = "svg-io")]
pub use render::SvgRenderer;
