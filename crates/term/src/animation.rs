//! Driver loop: query size, render, present, sleep, repeat.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use tui_torus_types::{Rotation, FRAME_DELAY_MS};

use crate::presenter::FramePresenter;
use crate::shutdown::ShutdownFlag;
use crate::size::SizeProvider;
use crate::torus_view::TorusView;

/// Owns one animation session: the rasterizing view, the presenter, and
/// the terminal size source.
pub struct Animation<S: SizeProvider, W: Write> {
    view: TorusView,
    presenter: FramePresenter<W>,
    sizes: S,
    frame_delay: Duration,
}

impl<S: SizeProvider, W: Write> Animation<S, W> {
    pub fn new(view: TorusView, presenter: FramePresenter<W>, sizes: S) -> Self {
        Self {
            view,
            presenter,
            sizes,
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
        }
    }

    /// Override the inter-frame delay (tests use zero).
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn presenter(&self) -> &FramePresenter<W> {
        &self.presenter
    }

    /// Run until shutdown is requested or the size query fails.
    ///
    /// The terminal size is requeried every frame, never cached, so a
    /// resize takes effect on the next render. The shutdown flag is
    /// observed after presenting: a frame in progress when the request
    /// arrives still completes, and the loop exits without starting
    /// another.
    pub fn run(&mut self, rotation: &mut Rotation, shutdown: ShutdownFlag) -> Result<()> {
        loop {
            let viewport = self.sizes.size()?;
            let fb = self.view.render(*rotation, viewport);
            self.presenter.present(&fb)?;

            if shutdown.requested() {
                return Ok(());
            }

            rotation.step();
            thread::sleep(self.frame_delay);
        }
    }
}
