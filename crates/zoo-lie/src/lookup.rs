//! Irrep lookup by dimension name.
//!
//! Model templates refer to representations by their conventional dimension
//! label, e.g. `"3"` for the SU(3) fundamental and `"3*"` for its conjugate.
//! The lookup enumerates dominant weights by increasing label sum and
//! resolves ties toward the lexicographically greatest label vector, which
//! selects the un-barred representation of each conjugate pair.

use zoo_core::{ErrorInfo, ZooError};

use crate::algebra::{Algebra, Series};
use crate::weights::irrep_dim;

/// Label sums are searched up to this bound before giving up.
const MAX_LABEL_SUM: i64 = 8;

fn name_error(algebra: &Algebra, name: &str, reason: &str) -> ZooError {
    ZooError::Config(
        ErrorInfo::new("unknown-irrep", format!("no irrep named {name:?} for {algebra}"))
            .with_context("reason", reason)
            .with_hint("give the representation as explicit Dynkin labels"),
    )
}

/// Conjugate representation via the diagram automorphism of the family.
/// Identity for the self-conjugate families (B, C, D of even rank, E7, E8).
pub fn conjugate(algebra: &Algebra, weight: &[i64]) -> Result<Vec<i64>, ZooError> {
    algebra.check_dominant(weight)?;
    let rank = algebra.rank();
    let mut out = weight.to_vec();
    match algebra.series() {
        Series::A => out.reverse(),
        Series::D if rank % 2 == 1 => out.swap(rank - 2, rank - 1),
        Series::E if rank == 6 => {
            // Chain flip of the E6 diagram: 0<->5, 2<->4.
            out.swap(0, 5);
            out.swap(2, 4);
        }
        _ => {}
    }
    Ok(out)
}

fn compositions(total: i64, parts: usize) -> Vec<Vec<i64>> {
    if parts == 0 {
        return if total == 0 { vec![vec![]] } else { Vec::new() };
    }
    let mut out = Vec::new();
    for head in 0..=total {
        for tail in compositions(total - head, parts - 1) {
            let mut labels = Vec::with_capacity(parts);
            labels.push(head);
            labels.extend(tail);
            out.push(labels);
        }
    }
    out
}

/// Resolves a dimension name such as `"8"` or `"10*"` to a highest weight.
///
/// An unknown name is a configuration error, never a silent default.
pub fn irrep_by_name(algebra: &Algebra, name: &str) -> Result<Vec<i64>, ZooError> {
    let trimmed = name.trim();
    let (dim_part, conjugated) = match trimmed.strip_suffix('*') {
        Some(prefix) => (prefix.trim(), true),
        None => (trimmed, false),
    };
    let target: u128 = dim_part
        .parse()
        .map_err(|_| name_error(algebra, name, "not a positive integer"))?;
    if target == 0 {
        return Err(name_error(algebra, name, "zero-dimensional"));
    }

    for total in 0..=MAX_LABEL_SUM {
        let mut found: Option<Vec<i64>> = None;
        for labels in compositions(total, algebra.rank()) {
            if irrep_dim(algebra, &labels)? == target {
                match &found {
                    Some(best) if *best >= labels => {}
                    _ => found = Some(labels),
                }
            }
        }
        if let Some(labels) = found {
            return if conjugated {
                conjugate(algebra, &labels)
            } else {
                Ok(labels)
            };
        }
    }
    Err(name_error(algebra, name, "no dominant weight with that dimension"))
}
