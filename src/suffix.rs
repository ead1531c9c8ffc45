//! Binary byte-size suffix codec.
//!
//! Converts between raw byte counts and the 1024-based shorthand used in
//! runtime memory flags ("512M", "2G"). Formatting picks the largest suffix
//! that divides the value evenly, so every output parses back to the exact
//! input.

use crate::error::{Error, Result};

/// Recognized suffixes, smallest to largest. Z and Y would exceed u64.
const SUFFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

const SUFFIX_BASE: u64 = 1024;
const SUFFIX_SHIFT: u64 = 10;

/// Formats a byte count using the largest suffix that divides it evenly.
///
/// Falls through to the next-smaller suffix whenever the division leaves a
/// remainder, and to the plain decimal string when not even `K` divides
/// evenly. Exactly one output per input.
pub fn format_bytes(size: u64) -> String {
    for i in (0..SUFFIXES.len()).rev() {
        let divisor = SUFFIX_BASE << (i as u64 * SUFFIX_SHIFT);

        if size % divisor == 0 {
            return format!("{}{}", size / divisor, SUFFIXES[i]);
        }
    }

    size.to_string()
}

/// Parses a byte count in plain decimal or suffixed notation.
///
/// A trailing digit means the whole string is a decimal byte count. Otherwise
/// the trailing character must be one of the recognized suffix letters,
/// case-insensitive, and the remaining prefix is the decimal multiplier.
pub fn parse_bytes(input: &str) -> Result<u64> {
    let Some((offset, suffix)) = input.char_indices().last() else {
        return Err(Error::InvalidNumber(input.to_string()));
    };

    if suffix.is_numeric() {
        return input
            .parse()
            .map_err(|_| Error::InvalidNumber(input.to_string()));
    }
    if !suffix.is_alphabetic() {
        return Err(Error::InvalidSuffix(suffix));
    }

    let suffix = suffix.to_ascii_uppercase();

    let number: u64 = input[..offset]
        .parse()
        .map_err(|_| Error::InvalidNumber(input.to_string()))?;

    for (i, candidate) in SUFFIXES.iter().enumerate() {
        if *candidate == suffix {
            let multiplier = SUFFIX_BASE << (i as u64 * SUFFIX_SHIFT);
            return Ok(number * multiplier);
        }
    }

    Err(Error::InvalidSuffix(suffix))
}
