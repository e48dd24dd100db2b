//! Terminal size discovery.
//!
//! The driver loop requeries the size every frame so resizes take effect
//! immediately. Failures are fatal: the loop propagates them instead of
//! substituting a default size.

use std::process::{Command, Stdio};

use anyhow::{bail, ensure, Context, Result};

use crate::fb::Viewport;

/// Source of the current terminal dimensions.
pub trait SizeProvider {
    fn size(&self) -> Result<Viewport>;
}

/// Queries the controlling terminal by running `stty size`.
///
/// `stty` reports `rows cols` on stdout; stdin is inherited so the query
/// reaches the real terminal.
pub struct SttySize;

impl SizeProvider for SttySize {
    fn size(&self) -> Result<Viewport> {
        let output = Command::new("stty")
            .arg("size")
            .stdin(Stdio::inherit())
            .output()
            .context("failed to run `stty size`")?;
        if !output.status.success() {
            bail!("`stty size` exited with {}", output.status);
        }
        let text = std::str::from_utf8(&output.stdout)
            .context("`stty size` produced non-UTF-8 output")?;
        parse_stty_size(text)
    }
}

/// Parses `stty size` output: exactly two positive integers, `rows cols`.
fn parse_stty_size(text: &str) -> Result<Viewport> {
    let mut tokens = text.split_whitespace();
    let rows = tokens.next().context("missing rows in `stty size` output")?;
    let cols = tokens
        .next()
        .context("missing columns in `stty size` output")?;
    ensure!(
        tokens.next().is_none(),
        "unexpected trailing tokens in `stty size` output: {text:?}"
    );

    let height: u16 = rows
        .parse()
        .with_context(|| format!("invalid row count {rows:?}"))?;
    let width: u16 = cols
        .parse()
        .with_context(|| format!("invalid column count {cols:?}"))?;
    ensure!(width > 0 && height > 0, "terminal reported a zero dimension");

    Ok(Viewport::new(width, height))
}

/// Fixed-size provider for tests and headless runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedSize {
    viewport: Viewport,
}

impl FixedSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
        }
    }
}

impl SizeProvider for FixedSize {
    fn size(&self) -> Result<Viewport> {
        Ok(self.viewport)
    }
}
