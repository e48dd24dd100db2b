//! TorusView: rasterizes the rotating torus into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::f64::consts::TAU;

use tui_torus_core::{project, projection_scale, revolve, Orientation, TubeRing};
use tui_torus_types::{luma_char, Rotation, PHI_SPACING, THETA_SPACING};

use crate::fb::{DepthBuffer, FrameBuffer, Viewport};

/// Rasterizer for the torus surface.
///
/// The sampling steps default to the shared constants; tests can coarsen
/// them to keep full sweeps cheap.
#[derive(Debug, Clone, Copy)]
pub struct TorusView {
    theta_spacing: f64,
    phi_spacing: f64,
}

impl Default for TorusView {
    fn default() -> Self {
        Self {
            theta_spacing: THETA_SPACING,
            phi_spacing: PHI_SPACING,
        }
    }
}

impl TorusView {
    pub fn new(theta_spacing: f64, phi_spacing: f64) -> Self {
        Self {
            theta_spacing,
            phi_spacing,
        }
    }

    /// Render one frame at the given rotation into a fresh framebuffer.
    ///
    /// The frame and depth buffers are sized to the viewport on every call
    /// and share its dimensions exactly. Samples facing away from the light
    /// or projecting outside the grid are skipped; overlapping samples are
    /// resolved by the inverse-depth test, nearest winning.
    pub fn render(&self, rotation: Rotation, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport);
        let mut depth = DepthBuffer::new(viewport);

        let orientation = Orientation::new(rotation);
        let k1 = projection_scale(viewport.width);

        let mut theta = 0.0;
        while theta < TAU {
            let ring = TubeRing::new(theta);

            let mut phi = 0.0;
            while phi < TAU {
                let point = revolve(&orientation, &ring, phi);
                let ooz = 1.0 / point.z;
                let (xp, yp) = project(viewport.width, viewport.height, k1, ooz, point.x, point.y);

                if point.luminance > 0.0 && depth.record(xp, yp, ooz) {
                    // record() already bounds-checked (xp, yp)
                    fb.set(xp as u16, yp as u16, luma_char(point.luminance));
                }

                phi += self.phi_spacing;
            }
            theta += self.theta_spacing;
        }

        fb
    }
}
