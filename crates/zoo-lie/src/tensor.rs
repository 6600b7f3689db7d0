//! Tensor-product decomposition by iterated character subtraction.
//!
//! The product of weight systems is convolved into a single multiset; the
//! highest remaining dominant weight must head an irreducible component, so
//! its full weight system is stripped until nothing is left. This handles
//! n-ary products in one pass and reports exact multiplicities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zoo_core::{ErrorInfo, ZooError};

use crate::algebra::Algebra;
use crate::weights::{add, irrep_dim, weight_system};

/// One irreducible component of a tensor-product decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrepComponent {
    /// Dynkin labels of the component's highest weight.
    pub highest_weight: Vec<i64>,
    /// Dimension of the component irrep.
    pub dim: u128,
    /// How many times the component occurs in the product.
    pub multiplicity: u64,
}

fn internal(code: &str, message: impl Into<String>) -> ZooError {
    ZooError::Algebra(ErrorInfo::new(code, message))
}

fn convolve(
    acc: &BTreeMap<Vec<i64>, u128>,
    system: &[(Vec<i64>, u64)],
) -> BTreeMap<Vec<i64>, u128> {
    let mut merged: BTreeMap<Vec<i64>, u128> = BTreeMap::new();
    for (left, left_mult) in acc {
        for (right, right_mult) in system {
            *merged.entry(add(left, right)).or_insert(0) += left_mult * (*right_mult as u128);
        }
    }
    merged
}

/// Picks the remaining dominant weight closest to `top`; it is necessarily
/// the highest weight of a surviving component.
fn pick_component(
    algebra: &Algebra,
    acc: &BTreeMap<Vec<i64>, u128>,
    top: &[i64],
) -> Result<Vec<i64>, ZooError> {
    let mut best: Option<(i64, Vec<i64>)> = None;
    for weight in acc.keys() {
        if weight.iter().any(|&label| label < 0) {
            continue;
        }
        let level = algebra.level_below(top, weight)?;
        let candidate = (level, weight.clone());
        if best.as_ref().map_or(true, |current| candidate < *current) {
            best = Some(candidate);
        }
    }
    best.map(|(_, weight)| weight).ok_or_else(|| {
        internal(
            "non-dominant-residue",
            "weight multiset has no dominant member left; decomposition cannot proceed",
        )
    })
}

/// Decomposes the tensor product of the given dominant highest weights into
/// irreducible components, sorted by `(dim, highest_weight)`.
pub fn tensor_decompose(
    algebra: &Algebra,
    factors: &[Vec<i64>],
) -> Result<Vec<IrrepComponent>, ZooError> {
    if factors.is_empty() {
        return Err(ZooError::Input(ErrorInfo::new(
            "empty-product",
            "tensor product needs at least one factor",
        )));
    }
    for factor in factors {
        algebra.check_dominant(factor)?;
    }

    let top = factors
        .iter()
        .fold(vec![0i64; algebra.rank()], |acc, factor| add(&acc, factor));

    let first = weight_system(algebra, &factors[0])?;
    let mut acc: BTreeMap<Vec<i64>, u128> = first
        .into_iter()
        .map(|(weight, mult)| (weight, mult as u128))
        .collect();
    for factor in &factors[1..] {
        let system = weight_system(algebra, factor)?;
        acc = convolve(&acc, &system);
    }

    let mut components = Vec::new();
    while !acc.is_empty() {
        let highest = pick_component(algebra, &acc, &top)?;
        let mult = acc[&highest];
        for (weight, weight_mult) in weight_system(algebra, &highest)? {
            let slot = acc.get_mut(&weight).ok_or_else(|| {
                internal(
                    "character-underflow",
                    format!("weight {weight:?} missing while stripping {highest:?}"),
                )
            })?;
            let delta = mult * (weight_mult as u128);
            if *slot < delta {
                return Err(internal(
                    "character-underflow",
                    format!("multiplicity underflow at {weight:?} while stripping {highest:?}"),
                ));
            }
            *slot -= delta;
            if *slot == 0 {
                acc.remove(&weight);
            }
        }
        let multiplicity = u64::try_from(mult)
            .map_err(|_| internal("multiplicity-overflow", "component multiplicity exceeds u64"))?;
        components.push(IrrepComponent {
            dim: irrep_dim(algebra, &highest)?,
            highest_weight: highest,
            multiplicity,
        });
    }

    components.sort_by(|a, b| {
        (a.dim, &a.highest_weight).cmp(&(b.dim, &b.highest_weight))
    });
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Series;

    fn dims(components: &[IrrepComponent]) -> Vec<(u128, u64)> {
        components
            .iter()
            .map(|component| (component.dim, component.multiplicity))
            .collect()
    }

    #[test]
    fn su2_doublet_squared() {
        let a1 = Algebra::new(Series::A, 1).unwrap();
        let components = tensor_decompose(&a1, &[vec![1], vec![1]]).unwrap();
        assert_eq!(dims(&components), vec![(1, 1), (3, 1)]);
    }

    #[test]
    fn su3_fundamental_times_antifundamental() {
        let a2 = Algebra::new(Series::A, 2).unwrap();
        let components = tensor_decompose(&a2, &[vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(dims(&components), vec![(1, 1), (8, 1)]);
    }

    #[test]
    fn su3_two_fundamentals_have_no_singlet() {
        let a2 = Algebra::new(Series::A, 2).unwrap();
        let components = tensor_decompose(&a2, &[vec![1, 0], vec![1, 0]]).unwrap();
        assert_eq!(dims(&components), vec![(3, 1), (6, 1)]);
        assert_eq!(components[0].highest_weight, vec![0, 1]);
    }

    #[test]
    fn su3_triple_with_adjoint_contains_singlet() {
        let a2 = Algebra::new(Series::A, 2).unwrap();
        let components =
            tensor_decompose(&a2, &[vec![1, 0], vec![1, 1], vec![0, 1]]).unwrap();
        let total: u128 = components
            .iter()
            .map(|c| c.dim * c.multiplicity as u128)
            .sum();
        assert_eq!(total, 72);
        assert!(components.iter().any(|c| c.dim == 1));
    }

    #[test]
    fn su2_triplet_cubed_dimension_bookkeeping() {
        let a1 = Algebra::new(Series::A, 1).unwrap();
        let components = tensor_decompose(&a1, &[vec![2], vec![2], vec![2]]).unwrap();
        let total: u128 = components
            .iter()
            .map(|c| c.dim * c.multiplicity as u128)
            .sum();
        assert_eq!(total, 27);
        // 3x3x3 = 1 + 3x3 + 2x5 + 7.
        assert_eq!(dims(&components), vec![(1, 1), (3, 3), (5, 2), (7, 1)]);
    }

    #[test]
    fn empty_product_is_an_input_error() {
        let a1 = Algebra::new(Series::A, 1).unwrap();
        assert!(matches!(
            tensor_decompose(&a1, &[]),
            Err(ZooError::Input(_))
        ));
    }
}
