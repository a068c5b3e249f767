//! Validation of user-supplied candidate integers.

use crate::error::{Error, Result};

/// Parses one line of user input as a non-negative integer.
///
/// Surrounding whitespace is ignored. Non-integer or negative text is
/// rejected, not fatal: callers report the error and carry on.
pub fn parse_candidate(line: &str) -> Result<i64> {
    let trimmed = line.trim();

    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidInput(trimmed.to_string()))?;

    if value < 0 {
        return Err(Error::InvalidInput(trimmed.to_string()));
    }

    Ok(value)
}
