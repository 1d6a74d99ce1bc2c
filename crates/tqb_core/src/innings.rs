//! Innings notation and exact outs arithmetic.
//!
//! Softball games can end mid-inning, so "7.2" does not mean seven and a
//! fifth innings: it means seven complete innings plus two outs. All
//! accumulation happens in whole outs and only the final ratio step (or a
//! display) turns outs back into innings.

use thiserror::Error;

/// Outs in one complete inning.
pub const OUTS_PER_INNING: u32 = 3;

/// Why an innings value was rejected by [`parse_outs`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InningsError {
    #[error("innings value is empty")]
    Empty,
    #[error("'{0}' is not a number of innings")]
    NotANumber(String),
    #[error("'{0}' has an invalid outs digit (use X, X.1 or X.2)")]
    InvalidOuts(String),
    #[error("'{0}' is too large")]
    Overflow(String),
}

/// Parse decimal innings notation into outs.
///
/// Accepts `digits` optionally followed by `.0`, `.1` or `.2`.
pub fn parse_outs(text: &str) -> Result<u32, InningsError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InningsError::Empty);
    }

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InningsError::NotANumber(text.to_string()));
    }

    let extra_outs = match fraction {
        None => 0,
        Some("0") => 0,
        Some("1") => 1,
        Some("2") => 2,
        Some(f) if f.bytes().all(|b| b.is_ascii_digit()) && !f.is_empty() => {
            return Err(InningsError::InvalidOuts(text.to_string()));
        }
        Some(_) => return Err(InningsError::NotANumber(text.to_string())),
    };

    whole
        .parse::<u32>()
        .ok()
        .and_then(|w| w.checked_mul(OUTS_PER_INNING))
        .and_then(|outs| outs.checked_add(extra_outs))
        .ok_or_else(|| InningsError::Overflow(text.to_string()))
}

/// Outs for an innings value, with anything malformed counted as zero.
///
/// Data entry validates the notation before games reach the engine; this
/// keeps the ranking total for whatever slips through.
pub fn innings_to_outs(text: &str) -> u32 {
    parse_outs(text).unwrap_or(0)
}

/// Display value for an outs count (23 outs -> 7.2). Never feed it back
/// into arithmetic.
pub fn outs_to_innings(outs: u32) -> f64 {
    let whole = outs / OUTS_PER_INNING;
    let remainder = outs % OUTS_PER_INNING;
    whole as f64 + remainder as f64 * 0.1
}

/// Exact text form of an outs count: `"7.2"`, or `"21"` for whole innings.
pub fn format_innings(outs: u32) -> String {
    let whole = outs / OUTS_PER_INNING;
    match outs % OUTS_PER_INNING {
        0 => whole.to_string(),
        extra => format!("{}.{}", whole, extra),
    }
}

pub fn is_valid_innings(text: &str) -> bool {
    parse_outs(text).is_ok()
}

#[cfg(test)]
#[path = "innings_tests.rs"]
mod innings_tests;
