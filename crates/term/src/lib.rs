//! Terminal layer: framebuffer, rasterizing view, presenter, and the
//! driver loop.
//!
//! The view renders into a plain character framebuffer with no I/O, so it
//! stays unit-testable; the presenter, size provider, and shutdown flag own
//! all the process-boundary pieces (stdout, `stty`, signals).
//!
//! Goals:
//! - Keep the sampling pipeline in `core` deterministic and testable
//! - Make every process boundary an injectable seam
//! - One fresh framebuffer per frame, sized to the live terminal

pub mod animation;
pub mod fb;
pub mod presenter;
pub mod shutdown;
pub mod size;
pub mod torus_view;

pub use tui_torus_core as core;
pub use tui_torus_types as types;

pub use animation::Animation;
pub use fb::{DepthBuffer, FrameBuffer, Viewport};
pub use presenter::FramePresenter;
pub use shutdown::{install_signal_handlers, process_shutdown_flag, ShutdownFlag};
pub use size::{FixedSize, SizeProvider, SttySize};
pub use torus_view::TorusView;
