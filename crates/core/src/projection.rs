//! Perspective projection onto the terminal character grid.

use tui_torus_types::{RING_RADIUS, TUBE_RADIUS, VIEWER_DISTANCE};

/// Scale factor from world units to screen columns (one per frame).
///
/// Chosen so the projected torus spans roughly 3/4 of the screen width
/// whatever the terminal size.
pub fn projection_scale(width: u16) -> f64 {
    f64::from(width) * VIEWER_DISTANCE * 3.0 / (8.0 * (TUBE_RADIUS + RING_RADIUS))
}

/// Project a world point to grid coordinates.
///
/// `ooz` is the perspective factor 1/z. The fractional screen offset is
/// truncated toward zero, and y is negated because rows grow downward
/// while world y grows upward. Results may fall outside the grid; the
/// caller bounds-checks before writing.
pub fn project(width: u16, height: u16, k1: f64, ooz: f64, x: f64, y: f64) -> (i32, i32) {
    let xp = i32::from(width) / 2 + (k1 * ooz * x) as i32;
    let yp = i32::from(height) / 2 - (k1 * ooz * y) as i32;
    (xp, yp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_grows_with_width() {
        // width * 5 * 3 / (8 * 3) reduces to width * 5 / 8.
        assert_eq!(projection_scale(80), 50.0);
        assert_eq!(projection_scale(160), 100.0);
    }

    #[test]
    fn test_project_truncates_toward_zero() {
        let (xp, yp) = project(80, 24, 1.0, 1.0, 3.9, -3.9);
        assert_eq!(xp, 40 + 3);
        assert_eq!(yp, 12 + 3);
    }

    #[test]
    fn test_project_centers_the_origin() {
        assert_eq!(project(80, 24, 50.0, 0.2, 0.0, 0.0), (40, 12));
    }
}
