//! Process-wide runtime initialization
//!
//! Global platform setup (log subscriber and anything else that must be
//! registered exactly once per process) is modeled as an explicit,
//! idempotent entry point. Call it from every executable path; only the
//! first call has an effect, and it is never re-invoked per session.

use std::sync::Once;

static INIT: Once = Once::new();

/// Perform one-time process-wide setup
///
/// Idempotent: safe to call from the binary and from every test.
pub fn ensure_initialized() {
    INIT.call_once(|| {
        // try_init so an embedding application that already installed a
        // subscriber is left alone
        let _ = tracing_subscriber::fmt().try_init();
        tracing::debug!("Process-wide runtime initialized");
    });
}
