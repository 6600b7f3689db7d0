//! Minimal exact linear algebra over rationals. Sizes here are bounded by the
//! algebra rank (at most 8 for the exceptional series), so Gauss-Jordan with
//! the first non-zero pivot is plenty.

use num_traits::{One, Zero};
use zoo_core::Rational;

/// Inverts a square rational matrix, returning `None` when singular.
pub(crate) fn invert(matrix: &[Vec<Rational>]) -> Option<Vec<Vec<Rational>>> {
    let n = matrix.len();
    let mut work: Vec<Vec<Rational>> = matrix.to_vec();
    let mut inv: Vec<Vec<Rational>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        Rational::one()
                    } else {
                        Rational::zero()
                    }
                })
                .collect()
        })
        .collect();

    for col in 0..n {
        let pivot_row = (col..n).find(|&row| !work[row][col].is_zero())?;
        work.swap(col, pivot_row);
        inv.swap(col, pivot_row);

        let pivot = work[col][col];
        for j in 0..n {
            work[col][j] /= pivot;
            inv[col][j] /= pivot;
        }
        for row in 0..n {
            if row == col || work[row][col].is_zero() {
                continue;
            }
            let factor = work[row][col];
            for j in 0..n {
                let w = work[col][j] * factor;
                work[row][j] -= w;
                let v = inv[col][j] * factor;
                inv[row][j] -= v;
            }
        }
    }
    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    #[test]
    fn inverts_a2_cartan() {
        let cartan = vec![vec![r(2), r(-1)], vec![r(-1), r(2)]];
        let inv = invert(&cartan).expect("invertible");
        assert_eq!(inv[0][0], Rational::new(2, 3));
        assert_eq!(inv[0][1], Rational::new(1, 3));
        assert_eq!(inv[1][1], Rational::new(2, 3));
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let singular = vec![vec![r(1), r(2)], vec![r(2), r(4)]];
        assert!(invert(&singular).is_none());
    }
}
