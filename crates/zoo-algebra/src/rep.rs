//! Representation values and their resolution against a group.

use serde::{Deserialize, Serialize};
use zoo_core::{rational_from_str, ErrorInfo, Rational, ZooError};
use zoo_lie::irrep_by_name;

use crate::group::Group;

/// How a field transforms under one group: a highest weight for the Lie
/// families, a scalar charge for the abelian and cyclic families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepValue {
    /// Dynkin labels of a dominant highest weight.
    Weight(Vec<i64>),
    /// Exact scalar charge.
    Charge(Rational),
}

impl RepValue {
    /// Short kind tag used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RepValue::Weight(_) => "weight",
            RepValue::Charge(_) => "charge",
        }
    }
}

/// A raw, unresolved representation as it appears in a configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawRep {
    /// Explicit Dynkin labels.
    Labels(Vec<i64>),
    /// A charge spelled as an exact rational, e.g. `"-1"` or `"1/2"`.
    Charge(String),
    /// A symbolic irrep name resolved through the backend, e.g. `"3*"`.
    Named(String),
}

fn kind_error(group: &Group, message: impl Into<String>) -> ZooError {
    ZooError::Config(
        ErrorInfo::new("rep-kind-mismatch", message).with_context("group", group.to_string()),
    )
}

/// Checks that a resolved value has the shape its group calls for: weight
/// vectors under the Lie families, scalar charges under the abelian ones.
pub fn check_rep_kind(group: &Group, value: &RepValue) -> Result<(), ZooError> {
    match (group.is_lie(), value) {
        (true, RepValue::Weight(_)) | (false, RepValue::Charge(_)) => Ok(()),
        (true, RepValue::Charge(_)) => Err(kind_error(
            group,
            format!("{group} takes a weight vector, not a scalar charge"),
        )),
        (false, RepValue::Weight(_)) => Err(kind_error(
            group,
            format!("{group} takes a scalar charge, not a weight vector"),
        )),
    }
}

fn cyclic_charge(group: &Group, charge: &Rational) -> Result<(), ZooError> {
    if let Group::Z(order) = group {
        if !charge.is_integer() {
            return Err(ZooError::Config(
                ErrorInfo::new(
                    "bad-cyclic-charge",
                    format!("charge {charge} is not an integer class of Z({order})"),
                )
                .with_context("group", group.to_string()),
            ));
        }
    }
    Ok(())
}

/// Resolves a raw representation into a fully specified [`RepValue`].
///
/// This is a pure function: it never patches the input record, and an
/// unknown irrep name surfaces as a configuration error rather than a
/// silent default.
pub fn resolve_rep(group: &Group, raw: &RawRep) -> Result<RepValue, ZooError> {
    group.validate()?;
    let value = match raw {
        RawRep::Labels(labels) => {
            let algebra = group.lie_algebra()?;
            algebra.check_dominant(labels)?;
            RepValue::Weight(labels.clone())
        }
        RawRep::Charge(spelling) => {
            let charge = rational_from_str(spelling)?;
            RepValue::Charge(charge)
        }
        RawRep::Named(name) => {
            let algebra = group.lie_algebra()?;
            RepValue::Weight(irrep_by_name(&algebra, name)?)
        }
    };
    check_rep_kind(group, &value)?;
    if let RepValue::Charge(charge) = &value {
        cyclic_charge(group, charge)?;
    }
    Ok(value)
}
