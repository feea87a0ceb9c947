//! Human-readable size literals.
//!
//! Body limits arrive as strings like "100kb" or "2mb" (the form the
//! environment interface uses); plain byte counts are accepted too.

use thiserror::Error;

/// Error for unparseable size literals.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid size literal '{0}'")]
pub struct SizeError(pub String);

/// Parse a size literal into a byte count.
///
/// Accepts an optional `b`, `kb`, `mb`, or `gb` suffix (case-insensitive)
/// and an integer magnitude. Zero is rejected; a zero admission limit
/// would refuse every request.
pub fn parse_size(literal: &str) -> Result<usize, SizeError> {
    let trimmed = literal.trim().to_ascii_lowercase();
    let err = || SizeError(literal.to_string());

    let (digits, multiplier) = if let Some(rest) = trimmed.strip_suffix("kb") {
        (rest, 1024usize)
    } else if let Some(rest) = trimmed.strip_suffix("mb") {
        (rest, 1024 * 1024)
    } else if let Some(rest) = trimmed.strip_suffix("gb") {
        (rest, 1024 * 1024 * 1024)
    } else if let Some(rest) = trimmed.strip_suffix('b') {
        (rest, 1usize)
    } else {
        (trimmed.as_str(), 1usize)
    };

    let magnitude: usize = digits.trim().parse().map_err(|_| err())?;
    let bytes = magnitude.checked_mul(multiplier).ok_or_else(err)?;
    if bytes == 0 {
        return Err(err());
    }
    Ok(bytes)
}
