//! Weight systems and irrep dimensions.
//!
//! Multiplicities come from Freudenthal's recursion, filled level by level
//! below the highest weight; dimensions from the Weyl dimension formula.
//! Both run over exact rationals and fail loudly on any non-integral result
//! instead of rounding.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use num_rational::Ratio;
use num_traits::{One, Zero};
use zoo_core::{ErrorInfo, Rational, ZooError};

use crate::algebra::Algebra;

pub(crate) fn widen(value: Rational) -> Ratio<i128> {
    Ratio::new(*value.numer() as i128, *value.denom() as i128)
}

pub(crate) fn add(a: &[i64], b: &[i64]) -> Vec<i64> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

fn sub(a: &[i64], b: &[i64]) -> Vec<i64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}

fn internal(code: &str, message: impl Into<String>) -> ZooError {
    ZooError::Algebra(ErrorInfo::new(code, message))
}

/// Dimension of the irrep with the given dominant highest weight, via the
/// Weyl dimension formula.
pub fn irrep_dim(algebra: &Algebra, highest_weight: &[i64]) -> Result<u128, ZooError> {
    algebra.check_dominant(highest_weight)?;
    let rho = algebra.weyl_vector();
    let shifted = add(highest_weight, &rho);
    let mut dim: Ratio<i128> = Ratio::one();
    for root in algebra.positive_root_table() {
        let numer = algebra.inner(&shifted, &root.labels);
        let denom = algebra.inner(&rho, &root.labels);
        if denom.is_zero() {
            return Err(internal("degenerate-root", "positive root orthogonal to rho"));
        }
        dim *= widen(numer) / widen(denom);
    }
    if !dim.is_integer() || dim <= Ratio::zero() {
        return Err(internal(
            "nonintegral-dimension",
            format!("Weyl formula produced {dim} for {highest_weight:?}"),
        ));
    }
    Ok(dim.to_integer() as u128)
}

/// Full weight system of the irrep with the given highest weight, as
/// `(weight, multiplicity)` pairs in deterministic (sorted) order.
pub fn weight_system(
    algebra: &Algebra,
    highest_weight: &[i64],
) -> Result<Vec<(Vec<i64>, u64)>, ZooError> {
    algebra.check_dominant(highest_weight)?;
    let rank = algebra.rank();
    let rho = algebra.weyl_vector();
    let top_shifted = add(highest_weight, &rho);
    let top_norm = widen(algebra.inner(&top_shifted, &top_shifted));

    let mut mults: BTreeMap<Vec<i64>, u64> = BTreeMap::new();
    mults.insert(highest_weight.to_vec(), 1);
    let mut current: Vec<Vec<i64>> = vec![highest_weight.to_vec()];
    let mut level: i64 = 0;

    while !current.is_empty() {
        level += 1;
        let candidates: BTreeSet<Vec<i64>> = current
            .iter()
            .cartesian_product(0..rank)
            .map(|(mu, i)| sub(mu, algebra.simple_root_labels(i)))
            .collect();

        let mut next: Vec<Vec<i64>> = Vec::new();
        for nu in candidates {
            if mults.contains_key(&nu) {
                continue;
            }
            let nu_shifted = add(&nu, &rho);
            let denom = top_norm - widen(algebra.inner(&nu_shifted, &nu_shifted));
            if denom <= Ratio::zero() {
                continue;
            }
            let mut rhs: Ratio<i128> = Ratio::zero();
            for root in algebra.positive_root_table() {
                let k_max = level / root.height;
                let mut upper = nu.clone();
                for _ in 1..=k_max {
                    upper = add(&upper, &root.labels);
                    if let Some(&mult) = mults.get(&upper) {
                        rhs += Ratio::from_integer(mult as i128)
                            * widen(algebra.inner(&upper, &root.labels));
                    }
                }
            }
            rhs *= Ratio::from_integer(2);
            if rhs <= Ratio::zero() {
                continue;
            }
            let mult = rhs / denom;
            if !mult.is_integer() {
                return Err(internal(
                    "nonintegral-multiplicity",
                    format!("Freudenthal recursion produced {mult} at {nu:?}"),
                ));
            }
            mults.insert(nu.clone(), mult.to_integer() as u64);
            next.push(nu);
        }
        current = next;
    }

    Ok(mults.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Series;

    #[test]
    fn su2_dimensions_are_spin_multiplicities() {
        let a1 = Algebra::new(Series::A, 1).unwrap();
        for labels in 0..6i64 {
            assert_eq!(irrep_dim(&a1, &[labels]).unwrap(), (labels + 1) as u128);
        }
    }

    #[test]
    fn su3_fundamental_and_adjoint_dimensions() {
        let a2 = Algebra::new(Series::A, 2).unwrap();
        assert_eq!(irrep_dim(&a2, &[1, 0]).unwrap(), 3);
        assert_eq!(irrep_dim(&a2, &[0, 1]).unwrap(), 3);
        assert_eq!(irrep_dim(&a2, &[1, 1]).unwrap(), 8);
        assert_eq!(irrep_dim(&a2, &[3, 0]).unwrap(), 10);
        assert_eq!(irrep_dim(&a2, &[2, 2]).unwrap(), 27);
    }

    #[test]
    fn classical_and_exceptional_spot_dimensions() {
        let b2 = Algebra::new(Series::B, 2).unwrap();
        assert_eq!(irrep_dim(&b2, &[1, 0]).unwrap(), 5);
        assert_eq!(irrep_dim(&b2, &[0, 1]).unwrap(), 4);

        let c2 = Algebra::new(Series::C, 2).unwrap();
        assert_eq!(irrep_dim(&c2, &[1, 0]).unwrap(), 4);

        let d4 = Algebra::new(Series::D, 4).unwrap();
        assert_eq!(irrep_dim(&d4, &[1, 0, 0, 0]).unwrap(), 8);

        let e6 = Algebra::new(Series::E, 6).unwrap();
        assert_eq!(irrep_dim(&e6, &[1, 0, 0, 0, 0, 0]).unwrap(), 27);

        let e8 = Algebra::new(Series::E, 8).unwrap();
        assert_eq!(
            irrep_dim(&e8, &[0, 0, 0, 0, 0, 0, 0, 1]).unwrap(),
            248
        );
    }

    #[test]
    fn su3_adjoint_weight_system_has_doubled_origin() {
        let a2 = Algebra::new(Series::A, 2).unwrap();
        let system = weight_system(&a2, &[1, 1]).unwrap();
        let total: u64 = system.iter().map(|(_, m)| m).sum();
        assert_eq!(total, 8);
        let origin = system
            .iter()
            .find(|(w, _)| w == &vec![0, 0])
            .map(|(_, m)| *m);
        assert_eq!(origin, Some(2));
    }

    #[test]
    fn weight_system_sums_match_dimensions() {
        let b2 = Algebra::new(Series::B, 2).unwrap();
        for hw in [[1, 0], [0, 1], [1, 1], [2, 0]] {
            let dim = irrep_dim(&b2, &hw).unwrap();
            let total: u64 = weight_system(&b2, &hw).unwrap().iter().map(|(_, m)| m).sum();
            assert_eq!(total as u128, dim);
        }
    }
}
