//! Allocating conversions.
//!
//! Each function asks the estimator for the exact output size, allocates it,
//! and runs the bounded converter. The converter cannot overflow a buffer
//! its own estimator sized, but the `Result` is still propagated rather
//! than assumed away.

use uni_core::{Terminator, TranscodeError};

/// Options for conversions that produce UTF-8.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// Whether the output carries a trailing `0x00`.
    ///
    /// With [`Terminator::IfRoom`] one extra byte is allocated and the
    /// terminator lands inside the returned `Vec`.
    pub terminator: Terminator,
}

impl TranscodeOptions {
    /// Options for NUL-terminated output.
    pub fn nul_terminated() -> Self {
        TranscodeOptions {
            terminator: Terminator::IfRoom,
        }
    }
}

/// Decode UTF-8 bytes into UTF-16 units.
#[tracing::instrument(level = "trace", skip_all, fields(bytes = source.len()))]
pub fn utf16_from_str_bytes(source: &[u8]) -> Result<Vec<u16>, TranscodeError> {
    let mut dest = vec![0u16; uni_core::utf16_length(source)];
    let written = uni_core::utf16_from_utf8(source, &mut dest).inspect_err(log_overflow)?;
    dest.truncate(written);
    tracing::trace!(units = written, "decoded to UTF-16");
    Ok(dest)
}

/// Decode UTF-8 bytes into UTF-32 units.
#[tracing::instrument(level = "trace", skip_all, fields(bytes = source.len()))]
pub fn utf32_from_str_bytes(source: &[u8]) -> Result<Vec<u32>, TranscodeError> {
    let mut dest = vec![0u32; uni_core::utf32_length(source)];
    let written = uni_core::utf32_from_utf8(source, &mut dest).inspect_err(log_overflow)?;
    dest.truncate(written);
    tracing::trace!(units = written, "decoded to UTF-32");
    Ok(dest)
}

/// Encode UTF-16 units as UTF-8, stopping at the first zero unit.
pub fn utf8_from_utf16_units(source: &[u16]) -> Result<Vec<u8>, TranscodeError> {
    utf8_from_utf16_units_with(source, &TranscodeOptions::default())
}

/// Encode UTF-16 units as UTF-8 with explicit options.
#[tracing::instrument(level = "trace", skip_all, fields(units = source.len()))]
pub fn utf8_from_utf16_units_with(
    source: &[u16],
    options: &TranscodeOptions,
) -> Result<Vec<u8>, TranscodeError> {
    let len = uni_core::utf8_length(source);
    let capacity = match options.terminator {
        Terminator::Never => len,
        Terminator::IfRoom => len + 1,
    };
    let mut dest = vec![0u8; capacity];
    let written = uni_core::utf8_from_utf16(source, &mut dest, options.terminator)
        .inspect_err(log_overflow)?;
    let kept = if options.terminator == Terminator::IfRoom {
        written + 1
    } else {
        written
    };
    dest.truncate(kept);
    tracing::trace!(bytes = written, "encoded to UTF-8");
    Ok(dest)
}

/// Encode UTF-32 code points as UTF-8.
///
/// Each unit is encoded independently, so a zero unit is kept as `0x00`.
pub fn utf8_from_utf32_units(source: &[u32]) -> Vec<u8> {
    let len = source
        .iter()
        .map(|&cp| uni_core::utf8_length_of_code_point(cp))
        .sum();
    let mut dest = Vec::with_capacity(len);
    let mut buf = [0u8; 5];
    for &cp in source {
        let n = uni_core::utf8_from_utf32_char(cp, &mut buf);
        dest.extend_from_slice(&buf[..n]);
    }
    dest
}

/// Encode UTF-32 code points as UTF-16, splitting supplementary values
/// into surrogate pairs.
pub fn utf16_from_utf32_units(source: &[u32]) -> Vec<u16> {
    let mut dest = Vec::with_capacity(source.len());
    let mut buf = [0u16; 2];
    for &cp in source {
        let n = uni_core::utf16_from_utf32_char(cp, &mut buf);
        dest.extend_from_slice(&buf[..n]);
    }
    dest
}

fn log_overflow(err: &TranscodeError) {
    let TranscodeError::OutOfBounds {
        target, capacity, ..
    } = *err;
    tracing::debug!(
        %err,
        capacity_bytes = capacity * target.unit_size(),
        "destination sized by estimator overflowed"
    );
}
