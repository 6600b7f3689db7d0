//! Root-system construction for the supported Lie algebra families.
//!
//! Weights are stored as Dynkin label vectors (the fundamental-weight basis).
//! The Cartan matrix convention is `cartan[i][j] = <alpha_i, alpha_j-check>`,
//! so the label vector of the simple root `alpha_i` is row `i` of the matrix.
//! All bilinear-form arithmetic is exact rational; the overall normalization
//! of the form cancels in every quantity derived from it.

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use num_traits::Zero;
use zoo_core::{ErrorInfo, Rational, ZooError};

use crate::linalg::invert;

/// Lie algebra family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Series {
    /// A(n): su(n+1).
    A,
    /// B(n): so(2n+1).
    B,
    /// C(n): sp(2n).
    C,
    /// D(n): so(2n).
    D,
    /// E(6), E(7), E(8).
    E,
}

impl Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Series::A => "A",
            Series::B => "B",
            Series::C => "C",
            Series::D => "D",
            Series::E => "E",
        };
        f.write_str(tag)
    }
}

/// A positive root, carried with its height for level bookkeeping.
#[derive(Debug, Clone)]
pub(crate) struct PosRoot {
    pub(crate) labels: Vec<i64>,
    pub(crate) height: i64,
}

/// A simple Lie algebra with its derived root-system tables.
#[derive(Debug, Clone)]
pub struct Algebra {
    series: Series,
    rank: usize,
    cartan: Vec<Vec<i64>>,
    form: Vec<Vec<Rational>>,
    cartan_t_inv: Vec<Vec<Rational>>,
    positive_roots: Vec<PosRoot>,
}

impl PartialEq for Algebra {
    fn eq(&self, other: &Self) -> bool {
        self.series == other.series && self.rank == other.rank
    }
}

impl Eq for Algebra {}

impl Display for Algebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.series, self.rank)
    }
}

fn rank_error(series: Series, rank: usize) -> ZooError {
    ZooError::Config(
        ErrorInfo::new("unsupported-rank", format!("{series}{rank} is not a supported algebra"))
            .with_context("series", series.to_string())
            .with_context("rank", rank.to_string()),
    )
}

fn internal_error(code: &str, message: impl Into<String>) -> ZooError {
    ZooError::Algebra(ErrorInfo::new(code, message))
}

fn cartan_matrix(series: Series, rank: usize) -> Result<Vec<Vec<i64>>, ZooError> {
    let mut cartan = vec![vec![0i64; rank]; rank];
    for (i, row) in cartan.iter_mut().enumerate() {
        row[i] = 2;
    }
    let mut link = |cartan: &mut Vec<Vec<i64>>, i: usize, j: usize| {
        cartan[i][j] = -1;
        cartan[j][i] = -1;
    };
    match series {
        Series::A => {
            if rank == 0 {
                return Err(rank_error(series, rank));
            }
            for i in 0..rank.saturating_sub(1) {
                link(&mut cartan, i, i + 1);
            }
        }
        Series::B => {
            if rank == 0 {
                return Err(rank_error(series, rank));
            }
            for i in 0..rank.saturating_sub(1) {
                link(&mut cartan, i, i + 1);
            }
            if rank >= 2 {
                // The last simple root is short.
                cartan[rank - 2][rank - 1] = -2;
            }
        }
        Series::C => {
            if rank == 0 {
                return Err(rank_error(series, rank));
            }
            for i in 0..rank.saturating_sub(1) {
                link(&mut cartan, i, i + 1);
            }
            if rank >= 2 {
                // The last simple root is long.
                cartan[rank - 1][rank - 2] = -2;
            }
        }
        Series::D => {
            if rank < 2 {
                return Err(rank_error(series, rank));
            }
            if rank >= 3 {
                for i in 0..rank - 2 {
                    link(&mut cartan, i, i + 1);
                }
                link(&mut cartan, rank - 3, rank - 1);
            }
            // rank 2 is the disconnected A1 x A1 diagram.
        }
        Series::E => {
            if !(6..=8).contains(&rank) {
                return Err(rank_error(series, rank));
            }
            // Bourbaki numbering, zero based: chain 0-2-3-...-(rank-1),
            // with node 1 attached to node 3.
            link(&mut cartan, 0, 2);
            for i in 2..rank - 1 {
                link(&mut cartan, i, i + 1);
            }
            link(&mut cartan, 1, 3);
        }
    }
    Ok(cartan)
}

/// Solves `d[i] * cartan[i][j] == d[j] * cartan[j][i]` by propagation over the
/// Dynkin graph, seeding each connected component with 1.
fn symmetrizers(cartan: &[Vec<i64>]) -> Vec<Rational> {
    let rank = cartan.len();
    let mut d: Vec<Option<Rational>> = vec![None; rank];
    for start in 0..rank {
        if d[start].is_some() {
            continue;
        }
        d[start] = Some(Rational::from_integer(1));
        let mut stack = vec![start];
        while let Some(i) = stack.pop() {
            for j in 0..rank {
                if i == j || cartan[i][j] == 0 || d[j].is_some() {
                    continue;
                }
                let di = d[i].unwrap_or_else(|| Rational::from_integer(1));
                d[j] = Some(di * Rational::new(cartan[j][i], cartan[i][j]));
                stack.push(j);
            }
        }
    }
    d.into_iter()
        .map(|value| value.unwrap_or_else(|| Rational::from_integer(1)))
        .collect()
}

fn positive_roots(cartan: &[Vec<i64>]) -> Vec<PosRoot> {
    let rank = cartan.len();
    let simple: Vec<Vec<i64>> = cartan.to_vec();
    let mut seen: BTreeSet<Vec<i64>> = simple.iter().cloned().collect();
    let mut roots: Vec<PosRoot> = simple
        .iter()
        .map(|labels| PosRoot {
            labels: labels.clone(),
            height: 1,
        })
        .collect();

    let mut frontier: Vec<Vec<i64>> = simple.clone();
    let mut height = 1i64;
    while !frontier.is_empty() {
        let mut next: Vec<Vec<i64>> = Vec::new();
        for beta in &frontier {
            for (i, alpha) in simple.iter().enumerate() {
                if beta == alpha {
                    continue;
                }
                // Count how far the alpha_i string extends below beta.
                let mut q = 0i64;
                let mut probe: Vec<i64> =
                    beta.iter().zip(alpha).map(|(b, a)| b - a).collect();
                while seen.contains(&probe) {
                    q += 1;
                    probe = probe.iter().zip(alpha).map(|(b, a)| b - a).collect();
                }
                let p = q - beta[i];
                if p >= 1 {
                    let gamma: Vec<i64> =
                        beta.iter().zip(alpha).map(|(b, a)| b + a).collect();
                    if seen.insert(gamma.clone()) {
                        roots.push(PosRoot {
                            labels: gamma.clone(),
                            height: height + 1,
                        });
                        next.push(gamma);
                    }
                }
            }
        }
        frontier = next;
        height += 1;
    }
    roots
}

impl Algebra {
    /// Constructs the algebra of the given series and rank, deriving the
    /// Cartan matrix, bilinear form and positive-root table.
    pub fn new(series: Series, rank: usize) -> Result<Self, ZooError> {
        let cartan = cartan_matrix(series, rank)?;
        let d = symmetrizers(&cartan);

        // b[i][j] = (alpha_i, alpha_j); symmetric by construction of d.
        let b: Vec<Vec<Rational>> = (0..rank)
            .map(|i| {
                (0..rank)
                    .map(|j| Rational::from_integer(cartan[i][j]) * d[j])
                    .collect()
            })
            .collect();
        let b_inv = invert(&b)
            .ok_or_else(|| internal_error("degenerate-form", "root bilinear form is singular"))?;
        // form[i][j] = (omega_i, omega_j) = d[i] * b_inv[i][j] * d[j].
        let form: Vec<Vec<Rational>> = (0..rank)
            .map(|i| (0..rank).map(|j| d[i] * b_inv[i][j] * d[j]).collect())
            .collect();

        let cartan_t: Vec<Vec<Rational>> = (0..rank)
            .map(|i| {
                (0..rank)
                    .map(|j| Rational::from_integer(cartan[j][i]))
                    .collect()
            })
            .collect();
        let cartan_t_inv = invert(&cartan_t)
            .ok_or_else(|| internal_error("degenerate-cartan", "Cartan matrix is singular"))?;

        let positive_roots = positive_roots(&cartan);
        Ok(Self {
            series,
            rank,
            cartan,
            form,
            cartan_t_inv,
            positive_roots,
        })
    }

    /// Family tag of the algebra.
    pub fn series(&self) -> Series {
        self.series
    }

    /// Rank of the algebra (number of Dynkin labels in a weight).
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of positive roots.
    pub fn num_positive_roots(&self) -> usize {
        self.positive_roots.len()
    }

    pub(crate) fn positive_root_table(&self) -> &[PosRoot] {
        &self.positive_roots
    }

    pub(crate) fn simple_root_labels(&self, i: usize) -> &[i64] {
        &self.cartan[i]
    }

    /// The Weyl vector rho, all Dynkin labels equal to one.
    pub fn weyl_vector(&self) -> Vec<i64> {
        vec![1; self.rank]
    }

    /// Exact bilinear form of two weights given by Dynkin labels.
    pub fn inner(&self, a: &[i64], b: &[i64]) -> Rational {
        let mut total = Rational::zero();
        for (i, &ai) in a.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.iter().enumerate() {
                if bj == 0 {
                    continue;
                }
                total += self.form[i][j] * Rational::from_integer(ai * bj);
            }
        }
        total
    }

    /// Validates that `weight` is a dominant integral weight for this algebra.
    pub fn check_dominant(&self, weight: &[i64]) -> Result<(), ZooError> {
        if weight.len() != self.rank {
            return Err(ZooError::Config(
                ErrorInfo::new(
                    "weight-rank-mismatch",
                    format!(
                        "weight has {} labels but {} has rank {}",
                        weight.len(),
                        self,
                        self.rank
                    ),
                )
                .with_context("rank", self.rank.to_string()),
            ));
        }
        if weight.iter().any(|&label| label < 0) {
            return Err(ZooError::Config(
                ErrorInfo::new(
                    "weight-not-dominant",
                    format!("highest weight {weight:?} has a negative Dynkin label"),
                )
                .with_context("algebra", self.to_string()),
            ));
        }
        Ok(())
    }

    /// Depth of `weight` below `top`, i.e. the coefficient sum of `top - weight`
    /// in the simple-root basis. Errors when the difference is not a
    /// non-negative integral root-lattice element.
    pub(crate) fn level_below(&self, top: &[i64], weight: &[i64]) -> Result<i64, ZooError> {
        let mut level = Rational::zero();
        for i in 0..self.rank {
            let mut coeff = Rational::zero();
            for j in 0..self.rank {
                coeff += self.cartan_t_inv[i][j] * Rational::from_integer(top[j] - weight[j]);
            }
            if !coeff.is_integer() || coeff < Rational::zero() {
                return Err(internal_error(
                    "not-in-root-lattice",
                    format!("{weight:?} does not sit below {top:?} in the root lattice"),
                ));
            }
            level += coeff;
        }
        Ok(level.to_integer())
    }
}
