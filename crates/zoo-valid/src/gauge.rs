//! Gauge invariance of interaction terms.
//!
//! An interaction is invariant under a group when the product of the
//! participating representations contains the trivial representation. For
//! the Lie families that means an irrep component of dimension one; for the
//! discrete and phase families it means the accumulated charge class is the
//! group identity. The two tests look different but answer the same
//! question, keyed on the branch the adapter returns.

use std::collections::BTreeSet;

use tracing::debug;
use zoo_algebra::{decompose, Decomposition, Group, RepValue};
use zoo_core::{ErrorInfo, ZooError};
use zoo_model::Field;

fn contains_singlet(decomposition: &Decomposition) -> bool {
    match decomposition {
        Decomposition::Lie(components) => components.iter().any(|c| c.dim == 1),
        Decomposition::Charge(components) => components.iter().any(|c| c.is_identity),
    }
}

/// Checks whether the product of raw representation values is invariant
/// under the chosen group.
///
/// `terms` must be homogeneous: all weight vectors or all charges.
pub fn is_gauge_invariant_repr(terms: &[RepValue], group: &Group) -> Result<bool, ZooError> {
    let decomposition = decompose(terms, group)?;
    Ok(contains_singlet(&decomposition))
}

/// Checks a set of interacting fields for invariance under every symmetry
/// any of them transforms under.
///
/// Symmetries are visited in alphabetical order so the first reported
/// failure is reproducible; the check stops at that failure. Returns
/// `(true, "")` when every symmetry passes, else `(false, name)` with the
/// first failing symmetry name.
pub fn is_gauge_invariant(fields: &[Field], name: &str) -> Result<(bool, String), ZooError> {
    let symmetries: BTreeSet<&str> = fields
        .iter()
        .flat_map(|field| field.representations().keys().map(String::as_str))
        .collect();
    debug!(
        interaction = name,
        terms = fields.len(),
        gauges = symmetries.len(),
        "validating gauge invariance"
    );

    for symmetry in symmetries {
        let mut terms: Vec<RepValue> = Vec::new();
        let mut groups: Vec<Group> = Vec::new();
        for field in fields {
            if let Some(representation) = field.representation(symmetry) {
                terms.push(representation.value().clone());
                groups.push(representation.group());
            }
        }
        let Some(&group) = groups.first() else {
            continue;
        };
        if groups.iter().any(|other| *other != group) {
            return Err(ZooError::Config(
                ErrorInfo::new(
                    "mismatched-group",
                    "representations under matching symmetry names must share a group",
                )
                .with_context("symmetry", symmetry)
                .with_context("interaction", name),
            ));
        }
        if !is_gauge_invariant_repr(&terms, &group)? {
            return Ok((false, symmetry.to_string()));
        }
    }
    Ok((true, String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn su3_quark_gluon_antiquark_is_invariant() {
        let su3 = Group::SU(3);
        let terms = vec![
            RepValue::Weight(vec![1, 0]),
            RepValue::Weight(vec![1, 1]),
            RepValue::Weight(vec![0, 1]),
        ];
        assert!(is_gauge_invariant_repr(&terms, &su3).unwrap());
    }

    #[test]
    fn su3_two_quarks_and_antiquark_is_not() {
        let su3 = Group::SU(3);
        let terms = vec![
            RepValue::Weight(vec![1, 0]),
            RepValue::Weight(vec![1, 0]),
            RepValue::Weight(vec![0, 1]),
        ];
        assert!(!is_gauge_invariant_repr(&terms, &su3).unwrap());
    }
}
