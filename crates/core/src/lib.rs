//! Pure torus math - rotation, revolution, projection, and luminance.
//!
//! This crate has no I/O and no terminal knowledge, which keeps the
//! sampling pipeline deterministic and unit-testable: identical inputs
//! always produce identical samples.
//!
//! One frame's pipeline:
//!
//! 1. [`Orientation::new`] precomputes the frame's rotation trigonometry.
//! 2. [`TubeRing::new`] fixes a point on the tube cross-section for each θ.
//! 3. [`revolve`] sweeps that point around the revolution axis for each φ,
//!    yielding world coordinates and a luminance term.
//! 4. [`projection_scale`] and [`project`] map world x/y through the
//!    perspective factor 1/z onto the character grid.
//!
//! # Example
//!
//! ```
//! use tui_torus_core::{revolve, Orientation, TubeRing};
//! use tui_torus_types::Rotation;
//!
//! let orientation = Orientation::new(Rotation::default());
//! let ring = TubeRing::new(0.0);
//! let point = revolve(&orientation, &ring, 0.0);
//! assert!(point.z > 0.0);
//! ```

pub mod projection;
pub mod surface;

pub use tui_torus_types as types;

pub use projection::{project, projection_scale};
pub use surface::{revolve, Orientation, SurfacePoint, TubeRing};
