//! Behavioral tests for the frame renderer.

use tui_torus::term::{TorusView, Viewport};
use tui_torus::types::{Rotation, LUMA_RAMP};

#[test]
fn test_identical_inputs_render_identical_frames() {
    let view = TorusView::default();
    let rotation = Rotation::new(1.3, 0.6);
    let first = view.render(rotation, Viewport::new(60, 30));
    let second = view.render(rotation, Viewport::new(60, 30));
    assert_eq!(first, second);
}

#[test]
fn test_buffer_dimensions_match_viewport() {
    let fb = TorusView::default().render(Rotation::default(), Viewport::new(31, 17));
    assert_eq!(fb.width(), 31);
    assert_eq!(fb.height(), 17);
    assert_eq!(fb.cells().len(), 31 * 17);
}

#[test]
fn test_tiny_viewport_renders_without_fault() {
    // Nearly every projected sample lands outside a 2x2 grid; those must be
    // discarded silently, and whatever does land stays a palette character.
    let fb = TorusView::default().render(Rotation::default(), Viewport::new(2, 2));
    for &ch in fb.cells() {
        assert!(ch == ' ' || LUMA_RAMP.contains(&ch));
    }
}

#[test]
fn test_centered_silhouette_at_rest() {
    let fb = TorusView::default().render(Rotation::default(), Viewport::new(40, 40));

    // The corners sit outside the projected silhouette.
    for (x, y) in [(0, 0), (39, 0), (0, 39), (39, 39)] {
        assert_eq!(fb.get(x, y), Some(' '), "corner ({x}, {y}) not blank");
    }

    // The ring passes through the center region.
    let mut lit = 0;
    for y in 10..30 {
        for x in 10..30 {
            let ch = fb.get(x, y).unwrap();
            if ch != ' ' {
                assert!(LUMA_RAMP.contains(&ch), "unexpected cell {ch:?}");
                lit += 1;
            }
        }
    }
    assert!(lit > 0, "expected lit cells in the center region");
}

#[test]
fn test_lit_cells_use_ramp_characters_only() {
    let fb = TorusView::default().render(Rotation::new(2.4, 7.7), Viewport::new(80, 24));
    let lit = fb
        .cells()
        .iter()
        .filter(|&&ch| ch != ' ')
        .inspect(|&&ch| assert!(LUMA_RAMP.contains(&ch)))
        .count();
    assert!(lit > 0);
}

#[test]
fn test_rotation_changes_the_frame() {
    let view = TorusView::default();
    let viewport = Viewport::new(60, 30);
    let at_rest = view.render(Rotation::default(), viewport);
    let rotated = view.render(Rotation::new(1.0, 0.5), viewport);
    assert_ne!(at_rest, rotated);
}

#[test]
fn test_coarse_sampling_still_hits_the_grid() {
    // A coarse view keeps sweeps cheap in tests while exercising the same
    // pipeline.
    let view = TorusView::new(0.3, 0.1);
    let fb = view.render(Rotation::default(), Viewport::new(40, 20));
    assert!(fb.cells().iter().any(|&ch| ch != ' '));
}
