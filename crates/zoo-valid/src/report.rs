//! Aggregate validation report for a single interaction.

use serde::Serialize;
use zoo_core::ZooError;
use zoo_model::Field;

use crate::gauge::is_gauge_invariant;
use crate::renorm::{validate_mass_dim, Renormalizability};

/// Outcome of running both validations over one interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvarianceReport {
    /// Name of the interaction under validation.
    pub interaction: String,
    /// Number of participating fields.
    pub n_terms: usize,
    /// Whether every shared symmetry admitted a singlet.
    pub gauge_invariant: bool,
    /// First failing symmetry, present only when not invariant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failing_symmetry: Option<String>,
    /// Renormalizability class from the mass-dimension sum.
    pub renormalizability: Renormalizability,
}

/// Runs the gauge-invariance check and the mass-dimension classifier over
/// one interaction and bundles the outcome.
pub fn check_interaction(fields: &[Field], name: &str) -> Result<InvarianceReport, ZooError> {
    let (gauge_invariant, failing) = is_gauge_invariant(fields, name)?;
    let renormalizability = validate_mass_dim(fields, name);
    Ok(InvarianceReport {
        interaction: name.to_string(),
        n_terms: fields.len(),
        gauge_invariant,
        failing_symmetry: (!gauge_invariant).then_some(failing),
        renormalizability,
    })
}
