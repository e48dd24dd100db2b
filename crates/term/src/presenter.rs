//! FramePresenter: flushes a completed framebuffer to the terminal.
//!
//! Each frame is the cursor-home escape followed by one line per buffer
//! row, so consecutive frames overwrite each other in place instead of
//! scrolling.

use std::io::{self, Write};

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Cursor-to-home escape emitted before every frame.
const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Writes completed frames to an output stream.
///
/// Rows are emitted in column order with blanks preserved; nothing else is
/// written. The line assembly buffer is reused across frames.
pub struct FramePresenter<W: Write> {
    out: W,
    line: String,
}

impl FramePresenter<io::Stdout> {
    /// Presenter bound to the process stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FramePresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            line: String::new(),
        }
    }

    /// Emit one frame, replacing the previous frame in place.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.write_all(CURSOR_HOME)?;
        for row in fb.rows() {
            self.line.clear();
            self.line.extend(row);
            self.line.push('\n');
            self.out.write_all(self.line.as_bytes())?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// The underlying stream, for tests that capture output.
    pub fn writer(&self) -> &W {
        &self.out
    }
}
