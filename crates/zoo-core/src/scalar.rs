//! Exact rational scalars used for spins, charges and mass dimensions.
//!
//! Every quantity that feeds a validation decision is an exact rational;
//! floats never enter a decision path.

use num_rational::Ratio;

use crate::errors::{ErrorInfo, ZooError};

/// Exact rational scalar.
pub type Rational = Ratio<i64>;

fn bad_rational(raw: &str, reason: &str) -> ZooError {
    ZooError::Input(
        ErrorInfo::new("bad-rational", format!("cannot parse {raw:?} as a rational"))
            .with_context("reason", reason),
    )
}

/// Parses an exact rational from a string such as `"2"`, `"-1"` or `"1/2"`.
///
/// Whitespace around the value and around the slash is tolerated. A zero
/// denominator or any non-integer piece is an input error; there is no
/// silent fallback.
pub fn rational_from_str(raw: &str) -> Result<Rational, ZooError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(bad_rational(raw, "empty string"));
    }
    match trimmed.split_once('/') {
        None => {
            let numer: i64 = trimmed
                .parse()
                .map_err(|_| bad_rational(raw, "not an integer"))?;
            Ok(Rational::from_integer(numer))
        }
        Some((num, den)) => {
            let numer: i64 = num
                .trim()
                .parse()
                .map_err(|_| bad_rational(raw, "bad numerator"))?;
            let denom: i64 = den
                .trim()
                .parse()
                .map_err(|_| bad_rational(raw, "bad denominator"))?;
            if denom == 0 {
                return Err(bad_rational(raw, "zero denominator"));
            }
            Ok(Rational::new(numer, denom))
        }
    }
}
