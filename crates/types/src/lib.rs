//! Shared constants and plain data types for the torus renderer.
//!
//! Everything here is pure data: the torus geometry, the sampling steps,
//! the luminance ramp, and the [`Rotation`] state advanced by the driver
//! loop. The crate has no dependencies, so the math core and the terminal
//! layer can both build on it.
//!
//! # Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TUBE_RADIUS` | 1.0 | Radius of the revolved circle (tube thickness) |
//! | `RING_RADIUS` | 2.0 | Radius from the torus center to the tube center |
//! | `VIEWER_DISTANCE` | 5.0 | Depth offset to the projection plane |
//! | `THETA_SPACING` | 0.03 | Sampling step around the tube |
//! | `PHI_SPACING` | 0.01 | Sampling step around the revolution axis |
//!
//! `VIEWER_DISTANCE` must stay greater than `RING_RADIUS + 2 * TUBE_RADIUS`
//! so every surface point keeps a positive depth.
//!
//! # Examples
//!
//! ```
//! use tui_torus_types::{luma_char, Rotation, A_STEP, B_STEP};
//!
//! let mut rotation = Rotation::default();
//! rotation.step();
//! assert_eq!(rotation, Rotation::new(A_STEP, B_STEP));
//!
//! // The brightest facets map to the last ramp entry.
//! assert_eq!(luma_char(1.4), '@');
//! ```

/// Radius of the revolved circle, i.e. the thickness of the torus tube.
pub const TUBE_RADIUS: f64 = 1.0;

/// Radius from the torus center to the middle of the tube.
pub const RING_RADIUS: f64 = 2.0;

/// Depth offset from the torus center to the plane of projection.
pub const VIEWER_DISTANCE: f64 = 5.0;

/// Sampling step along the tube cross-section angle θ.
pub const THETA_SPACING: f64 = 0.03;

/// Sampling step along the revolution angle φ.
pub const PHI_SPACING: f64 = 0.01;

/// Per-frame increment of the rotation angle `a`.
pub const A_STEP: f64 = 0.04;

/// Per-frame increment of the rotation angle `b`.
pub const B_STEP: f64 = 0.02;

/// Fixed delay between frames in milliseconds.
pub const FRAME_DELAY_MS: u64 = 10;

/// Display characters ordered dimmest to brightest.
pub const LUMA_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Maps a luminance value to an index into [`LUMA_RAMP`].
///
/// The raw index is `trunc(l * 8)`. With the fixed light direction the
/// luminance never reaches √2, but the clamp keeps the mapping total if the
/// geometry constants change. Callers cull `l <= 0` before mapping.
pub fn luma_index(l: f64) -> usize {
    ((l * 8.0) as usize).min(LUMA_RAMP.len() - 1)
}

/// Maps a luminance value to its display character.
pub fn luma_char(l: f64) -> char {
    LUMA_RAMP[luma_index(l)]
}

/// Rotation state of the torus: two free-axis angles in radians.
///
/// The driver loop owns one `Rotation` and advances it once per frame. The
/// angles grow without bound and wrap naturally through the trigonometric
/// functions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Rotation around the horizontal axis.
    pub a: f64,
    /// Rotation around the depth axis.
    pub b: f64,
}

impl Rotation {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Advance both angles by their per-frame deltas.
    pub fn step(&mut self) {
        self.a += A_STEP;
        self.b += B_STEP;
    }
}
