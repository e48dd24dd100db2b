//! Terminal torus runner (default binary).
//!
//! Draws a rotating torus in place using ASCII luminance characters until
//! SIGINT or SIGTERM arrives; the frame in flight finishes before exit.

use anyhow::Result;

use tui_torus::term::{
    install_signal_handlers, process_shutdown_flag, Animation, FramePresenter, SttySize, TorusView,
};
use tui_torus::types::Rotation;

fn main() -> Result<()> {
    install_signal_handlers()?;

    let mut animation = Animation::new(TorusView::default(), FramePresenter::stdout(), SttySize);
    let mut rotation = Rotation::default();
    animation.run(&mut rotation, process_shutdown_flag())
}
