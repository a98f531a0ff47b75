use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when console text is not a usable amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("not a number")]
    Invalid { input: String },

    #[error("value cannot be negative")]
    Negative,

    #[error("value must be positive")]
    Zero,
}

/// Normalizes input for decimal parsing: trims whitespace and accepts a comma
/// as the decimal separator.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', ".")
}

/// Parses a string into a [`Decimal`].
///
/// Both `.` and `,` are accepted as the decimal separator, and exponent
/// notation (`1e6`) is accepted. Empty input is not a number.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Invalid {
            input: s.to_string(),
        });
    }

    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|e| {
            tracing::debug!(input = %s, "invalid decimal: {}", e);
            ParseAmountError::Invalid {
                input: s.to_string(),
            }
        })
}

/// Parses a strictly positive amount.
pub fn parse_positive_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let value = parse_decimal(s)?;
    if value < Decimal::ZERO {
        Err(ParseAmountError::Negative)
    } else if value == Decimal::ZERO {
        Err(ParseAmountError::Zero)
    } else {
        Ok(value)
    }
}

/// Interprets a yes/no answer by its first character.
///
/// `н` and `т` are the `y` and `n` keys on a Russian keyboard layout, so an
/// answer typed with the wrong layout active is still understood.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    let first = s.trim().chars().next()?.to_lowercase().next()?;
    match first {
        'y' | 'н' => Some(true),
        'n' | 'т' => Some(false),
        _ => None,
    }
}
