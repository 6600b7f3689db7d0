//! The uniform representation-product entry point.
//!
//! Lie families delegate to the tensor backend; abelian and cyclic families
//! add charges (mod the order for cyclic groups). The two branches return
//! different component shapes because discrete groups have no irrep
//! dimension; the invariance rule downstream keys on the matching branch.

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use zoo_core::{ErrorInfo, Rational, ZooError};
use zoo_lie::{tensor_decompose, IrrepComponent};

use crate::group::Group;
use crate::rep::{check_rep_kind, RepValue};

/// One summed-charge class produced by an abelian or cyclic product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeComponent {
    /// The accumulated charge (reduced mod the order for cyclic groups).
    pub charge: Rational,
    /// Whether the class is the group identity, i.e. the trivial
    /// representation.
    pub is_identity: bool,
}

/// Result of a representation product under one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decomposition {
    /// Irreducible components of a Lie-family tensor product.
    Lie(Vec<IrrepComponent>),
    /// Charge classes of an abelian or cyclic product.
    Charge(Vec<ChargeComponent>),
}

fn input_error(code: &str, message: impl Into<String>) -> ZooError {
    ZooError::Input(ErrorInfo::new(code, message))
}

fn gather_weights(terms: &[RepValue], group: &Group) -> Result<Vec<Vec<i64>>, ZooError> {
    let mut weights = Vec::with_capacity(terms.len());
    for term in terms {
        match term {
            RepValue::Weight(labels) => weights.push(labels.clone()),
            RepValue::Charge(_) => {
                return Err(input_error(
                    "mixed-rep-kinds",
                    format!("all terms under {group} must be weight vectors"),
                ))
            }
        }
    }
    Ok(weights)
}

fn gather_charges(terms: &[RepValue], group: &Group) -> Result<Vec<Rational>, ZooError> {
    let mut charges = Vec::with_capacity(terms.len());
    for term in terms {
        match term {
            RepValue::Charge(charge) => charges.push(*charge),
            RepValue::Weight(_) => {
                return Err(input_error(
                    "mixed-rep-kinds",
                    format!("all terms under {group} must be scalar charges"),
                ))
            }
        }
    }
    Ok(charges)
}

/// Decomposes the product of `terms` under `group`.
///
/// Terms must be homogeneous in kind; an empty product is an input error.
pub fn decompose(terms: &[RepValue], group: &Group) -> Result<Decomposition, ZooError> {
    group.validate()?;
    if terms.is_empty() {
        return Err(input_error(
            "empty-product",
            format!("representation product under {group} has no terms"),
        ));
    }
    let first_kind = terms[0].kind();
    if let Some(other) = terms.iter().find(|term| term.kind() != first_kind) {
        return Err(input_error(
            "mixed-rep-kinds",
            format!("terms mix {first_kind} and {} values", other.kind()),
        ));
    }
    check_rep_kind(group, &terms[0])?;

    match group {
        Group::SU(_) | Group::SO(_) | Group::Sp(_) | Group::E(_) => {
            let weights = gather_weights(terms, group)?;
            let algebra = group.lie_algebra()?;
            Ok(Decomposition::Lie(tensor_decompose(&algebra, &weights)?))
        }
        Group::U1 => {
            let total: Rational = gather_charges(terms, group)?.into_iter().sum();
            Ok(Decomposition::Charge(vec![ChargeComponent {
                charge: total,
                is_identity: total.is_zero(),
            }]))
        }
        Group::Z(order) => {
            let charges = gather_charges(terms, group)?;
            let mut total: i64 = 0;
            for charge in &charges {
                if !charge.is_integer() {
                    return Err(ZooError::Config(
                        ErrorInfo::new(
                            "bad-cyclic-charge",
                            format!("charge {charge} is not an integer class of {group}"),
                        )
                        .with_context("group", group.to_string()),
                    ));
                }
                total += charge.to_integer();
            }
            let reduced = total.rem_euclid(i64::from(*order));
            Ok(Decomposition::Charge(vec![ChargeComponent {
                charge: Rational::from_integer(reduced),
                is_identity: reduced == 0,
            }]))
        }
    }
}
