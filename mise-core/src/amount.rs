//! Amount boundary conversion.
//!
//! Amounts arrive as numbers from storage and as text from forms and imports.
//! Everything that feeds the scaler goes through [`parse_amount`] or
//! [`AmountInput::to_f64`] so that bad input fails here instead of turning
//! into a silent zero further down.

use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// Unicode vulgar fractions understood by the parser and emitted by
/// `format_amount`, as (numerator, denominator, glyph).
pub(crate) const VULGAR_FRACTIONS: [(u8, u8, char); 9] = [
    (1, 8, '⅛'),
    (1, 4, '¼'),
    (1, 3, '⅓'),
    (3, 8, '⅜'),
    (1, 2, '½'),
    (5, 8, '⅝'),
    (2, 3, '⅔'),
    (3, 4, '¾'),
    (7, 8, '⅞'),
];

/// An amount as supplied by a caller: either already numeric or free text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Convert to a finite decimal, or explain why that is impossible.
    pub fn to_f64(&self) -> Result<f64, AmountError> {
        match self {
            AmountInput::Number(n) if n.is_finite() => Ok(*n),
            AmountInput::Number(n) => Err(AmountError::NotFinite(*n)),
            AmountInput::Text(s) => parse_amount(s),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

/// Parse an amount string into a finite decimal value.
///
/// Handles:
/// - Integers: "8" → 8.0
/// - Decimals: "2.5" → 2.5
/// - Fractions: "1/2" → 0.5
/// - Mixed numbers: "1 1/2" → 1.5
/// - Unicode fractions: "½" → 0.5, "1½" and "1 ½" → 1.5
pub fn parse_amount(amount: &str) -> Result<f64, AmountError> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err(AmountError::Empty);
    }

    let not_numeric = || AmountError::NotNumeric(amount.to_string());

    let value = if let Some(value) = parse_with_vulgar_fraction(amount) {
        value
    } else {
        let parts: Vec<&str> = amount.split_whitespace().collect();
        match parts.as_slice() {
            [whole, frac] => {
                let whole: f64 = whole.parse().map_err(|_| not_numeric())?;
                whole + parse_fraction(frac).ok_or_else(not_numeric)?
            }
            [single] if single.contains('/') => parse_fraction(single).ok_or_else(not_numeric)?,
            [single] => single.parse().map_err(|_| not_numeric())?,
            _ => return Err(not_numeric()),
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmountError::NotFinite(value))
    }
}

/// Parse a fraction string like "1/2" or "3/4".
fn parse_fraction(s: &str) -> Option<f64> {
    let (num, denom) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let denom: f64 = denom.trim().parse().ok()?;
    if denom == 0.0 {
        return None;
    }
    Some(num / denom)
}

/// Parse "½", "1½" or "1 ½". Returns None when the text does not end in a
/// known glyph or the whole-number prefix is not an integer.
fn parse_with_vulgar_fraction(s: &str) -> Option<f64> {
    let last = s.chars().last()?;
    let (num, denom, _) = VULGAR_FRACTIONS.iter().find(|(_, _, g)| *g == last)?;
    let frac = f64::from(*num) / f64::from(*denom);

    let prefix = s[..s.len() - last.len_utf8()].trim();
    if prefix.is_empty() {
        return Some(frac);
    }
    let whole: u64 = prefix.parse().ok()?;
    Some(whole as f64 + frac)
}
