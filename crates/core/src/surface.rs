//! Torus surface sampling: revolving the tube cross-section through the
//! frame's rotation.

use tui_torus_types::{Rotation, RING_RADIUS, TUBE_RADIUS, VIEWER_DISTANCE};

/// Per-frame trigonometry of the two free-axis rotation angles.
///
/// Computed once per frame and shared across every surface sample.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub cos_a: f64,
    pub sin_a: f64,
    pub cos_b: f64,
    pub sin_b: f64,
}

impl Orientation {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            cos_a: rotation.a.cos(),
            sin_a: rotation.a.sin(),
            cos_b: rotation.b.cos(),
            sin_b: rotation.b.sin(),
        }
    }
}

/// A point on the tube cross-section before revolution, together with its
/// angle's trigonometry. Computed once per θ and shared across the φ sweep.
#[derive(Debug, Clone, Copy)]
pub struct TubeRing {
    pub cos_theta: f64,
    pub sin_theta: f64,
    /// Distance of the cross-section point from the revolution axis.
    pub circle_x: f64,
    /// Height of the cross-section point above the ring plane.
    pub circle_y: f64,
}

impl TubeRing {
    pub fn new(theta: f64) -> Self {
        let cos_theta = theta.cos();
        let sin_theta = theta.sin();
        Self {
            cos_theta,
            sin_theta,
            circle_x: RING_RADIUS + TUBE_RADIUS * cos_theta,
            circle_y: TUBE_RADIUS * sin_theta,
        }
    }
}

/// One revolved surface sample in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
    /// Depth from the viewer. Always positive: `VIEWER_DISTANCE` exceeds
    /// the torus's maximum depth displacement.
    pub z: f64,
    /// Projection of the surface normal onto the fixed light direction,
    /// within [-√2, √2]. Non-positive values face away from the light.
    pub luminance: f64,
}

/// Revolve the cross-section point by `phi` and apply the frame rotation.
pub fn revolve(orientation: &Orientation, ring: &TubeRing, phi: f64) -> SurfacePoint {
    let cos_phi = phi.cos();
    let sin_phi = phi.sin();

    let Orientation {
        cos_a,
        sin_a,
        cos_b,
        sin_b,
    } = *orientation;
    let TubeRing {
        cos_theta,
        sin_theta,
        circle_x,
        circle_y,
    } = *ring;

    let x = circle_x * (cos_b * cos_phi + sin_a * sin_b * sin_phi) - circle_y * cos_a * sin_b;
    let y = circle_x * (sin_b * cos_phi - sin_a * cos_b * sin_phi) + circle_y * cos_a * cos_b;
    let z = VIEWER_DISTANCE + cos_a * circle_x * sin_phi + circle_y * sin_a;

    let luminance = cos_phi * cos_theta * sin_b - cos_a * cos_theta * sin_phi - sin_a * sin_theta
        + cos_b * (cos_a * sin_theta - cos_theta * sin_a * sin_phi);

    SurfacePoint { x, y, z, luminance }
}
