//! Renormalizability classification by total mass dimension.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zoo_core::Rational;
use zoo_model::Field;

/// Renormalizability class of an interaction term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Renormalizability {
    /// Total mass dimension strictly below four.
    SuperRenorm,
    /// Total mass dimension exactly four.
    Renorm,
    /// Total mass dimension strictly above four.
    NonRenorm,
}

/// Classifies an interaction by the exact sum of its fields' mass
/// dimensions. Pure: field order never changes the result.
pub fn validate_mass_dim(fields: &[Field], name: &str) -> Renormalizability {
    debug!(
        interaction = name,
        terms = fields.len(),
        "validating mass dimension"
    );
    let total: Rational = fields.iter().map(Field::mass_dim).sum();
    let four = Rational::from_integer(4);
    if total < four {
        Renormalizability::SuperRenorm
    } else if total == four {
        Renormalizability::Renorm
    } else {
        Renormalizability::NonRenorm
    }
}
