//! The closed set of gauge group families.
//!
//! Two groups are equal iff family and parameter match; instances are plain
//! copyable values shared freely across fields.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use zoo_core::{ErrorInfo, ZooError};
use zoo_lie::{Algebra, Series};

/// A gauge or global symmetry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Group {
    /// Special unitary group SU(n), n >= 2.
    SU(u32),
    /// Special orthogonal group SO(n), n >= 3.
    SO(u32),
    /// Symplectic group Sp(2n).
    Sp(u32),
    /// Exceptional group E6, E7 or E8.
    E(u32),
    /// Cyclic group of order n.
    Z(u32),
    /// Continuous phase group U(1).
    U1,
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::SU(n) => write!(f, "SU({n})"),
            Group::SO(n) => write!(f, "SO({n})"),
            Group::Sp(n) => write!(f, "Sp({n})"),
            Group::E(n) => write!(f, "E({n})"),
            Group::Z(n) => write!(f, "Z({n})"),
            Group::U1 => write!(f, "U(1)"),
        }
    }
}

fn unsupported(name: &str, reason: &str) -> ZooError {
    ZooError::Config(
        ErrorInfo::new("unsupported-group", format!("unsupported group {name:?}"))
            .with_context("reason", reason),
    )
}

impl Group {
    /// Parses a `{family}_{parameter}` spelling such as `"su_3"`, `"so_10"`,
    /// `"sp_4"`, `"e_6"`, `"z_2"` or `"u_1"`. Case insensitive.
    pub fn parse(name: &str) -> Result<Self, ZooError> {
        let lowered = name.trim().to_ascii_lowercase();
        let (family, param) = lowered
            .split_once('_')
            .ok_or_else(|| unsupported(name, "expected {family}_{parameter}"))?;
        let parameter: u32 = param
            .parse()
            .map_err(|_| unsupported(name, "parameter is not a non-negative integer"))?;
        let group = match family {
            "su" => Group::SU(parameter),
            "so" => Group::SO(parameter),
            "sp" => Group::Sp(parameter),
            "e" => Group::E(parameter),
            "z" => Group::Z(parameter),
            "u" if parameter == 1 => Group::U1,
            "u" => return Err(unsupported(name, "only u_1 is supported in the u family")),
            _ => return Err(unsupported(name, "unknown family")),
        };
        group.validate()?;
        Ok(group)
    }

    /// Checks the family parameter is in the supported range.
    pub fn validate(&self) -> Result<(), ZooError> {
        match *self {
            Group::SU(n) if n < 2 => Err(unsupported(&self.to_string(), "SU needs n >= 2")),
            Group::SO(n) if n < 3 => Err(unsupported(&self.to_string(), "SO needs n >= 3")),
            Group::Sp(n) if n < 2 || n % 2 != 0 => {
                Err(unsupported(&self.to_string(), "Sp needs an even parameter >= 2"))
            }
            Group::E(n) if !(6..=8).contains(&n) => {
                Err(unsupported(&self.to_string(), "E exists only for 6, 7 and 8"))
            }
            Group::Z(n) if n == 0 => Err(unsupported(&self.to_string(), "Z needs order >= 1")),
            _ => Ok(()),
        }
    }

    /// True for the continuous non-abelian families backed by a Lie algebra.
    pub fn is_lie(&self) -> bool {
        matches!(self, Group::SU(_) | Group::SO(_) | Group::Sp(_) | Group::E(_))
    }

    /// True for the discrete and phase families whose charges simply add.
    pub fn is_abelian(&self) -> bool {
        matches!(self, Group::Z(_) | Group::U1)
    }

    /// The Lie algebra backing this group. Errors for the abelian families.
    pub fn lie_algebra(&self) -> Result<Algebra, ZooError> {
        self.validate()?;
        match *self {
            Group::SU(n) => Algebra::new(Series::A, n as usize - 1),
            Group::SO(n) if n % 2 == 1 => Algebra::new(Series::B, (n as usize - 1) / 2),
            Group::SO(n) => Algebra::new(Series::D, n as usize / 2),
            Group::Sp(n) => Algebra::new(Series::C, n as usize / 2),
            Group::E(n) => Algebra::new(Series::E, n as usize),
            Group::Z(_) | Group::U1 => Err(unsupported(
                &self.to_string(),
                "abelian and cyclic groups carry no Lie algebra",
            )),
        }
    }
}
