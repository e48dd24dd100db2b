//! Shutdown signaling.
//!
//! One atomic flag is the only state shared with signal context. The
//! handler stores `true` and nothing else; the driver loop polls the flag
//! once per frame, so delivery is observed at the next frame boundary and
//! the in-progress frame always completes.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};

static PROCESS_SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Cancellation flag observed by the driver loop.
///
/// Writes are monotonic (false to true) and reads are relaxed: a
/// one-frame-late observation is within contract.
#[derive(Debug, Clone, Copy)]
pub struct ShutdownFlag {
    inner: &'static AtomicBool,
}

impl ShutdownFlag {
    pub const fn new(inner: &'static AtomicBool) -> Self {
        Self { inner }
    }

    /// Request shutdown. Idempotent.
    pub fn request(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    /// Whether shutdown has been requested.
    pub fn requested(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// The flag flipped by the process signal handlers.
pub fn process_shutdown_flag() -> ShutdownFlag {
    ShutdownFlag::new(&PROCESS_SHUTDOWN)
}

extern "C" fn on_shutdown_signal(_signum: nix::libc::c_int) {
    // Signal context: a single atomic store and nothing else.
    PROCESS_SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Route SIGINT and SIGTERM to the process shutdown flag.
pub fn install_signal_handlers() -> Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_shutdown_signal),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for sig in [Signal::SIGINT, Signal::SIGTERM] {
        // Safety: the handler touches nothing but a static atomic.
        unsafe { signal::sigaction(sig, &action) }
            .with_context(|| format!("failed to install handler for {sig:?}"))?;
    }
    Ok(())
}
