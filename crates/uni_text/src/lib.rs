//! Owned-buffer Unicode conversions and UTF-8 validation reports.
//!
//! Wraps `uni_core` for callers that want a `Vec` back instead of managing
//! destination buffers: every conversion sizes its output with the matching
//! length estimator and then converts into it. Conversions and repairs emit
//! `tracing` events; call [`init_tracing`] to see them.

use std::sync::Once;

mod report;
mod transcode;

pub use report::{sanitize, scan_invalid, InvalidKind, InvalidSequence, Sanitized};
pub use transcode::{
    utf16_from_str_bytes, utf16_from_utf32_units, utf32_from_str_bytes, utf8_from_utf16_units,
    utf8_from_utf16_units_with, utf8_from_utf32_units, TranscodeOptions,
};
pub use uni_core::{Encoding, Terminator, TranscodeError};

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or unparsable, or when the process
/// already has a global subscriber. Repeated calls are no-ops. Conversions
/// log at `trace` and repairs or overflows at `debug`, so
/// `RUST_LOG=uni_text=debug` shows only the interesting events.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
