//! Spin parsing and the quantities derived from it.

use std::fmt::{self, Display};

use serde::Serialize;
use zoo_core::{rational_from_str, ErrorInfo, Rational, ZooError};

/// Statistics class of a field, derived from its spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParticleClass {
    /// Integer spin.
    Boson,
    /// Half-odd-integer spin.
    Fermion,
}

/// An exact, validated spin: a non-negative integer or half-integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Spin(Rational);

fn spin_error(raw: impl Display) -> ZooError {
    ZooError::Model(
        ErrorInfo::new("unrecognized-spin", format!("unrecognized spin {raw}"))
            .with_hint("spin must be a non-negative integer or half-integer"),
    )
}

impl Spin {
    /// Validates an exact rational as a spin value.
    pub fn from_rational(value: Rational) -> Result<Self, ZooError> {
        if value < Rational::from_integer(0) {
            return Err(spin_error(value));
        }
        let doubled = value * Rational::from_integer(2);
        if !doubled.is_integer() {
            return Err(spin_error(value));
        }
        Ok(Self(value))
    }

    /// Parses a spin from its configuration spelling, e.g. `"0"`, `"1/2"`.
    pub fn parse(raw: &str) -> Result<Self, ZooError> {
        let value = rational_from_str(raw).map_err(|_| spin_error(format!("{raw:?}")))?;
        Self::from_rational(value)
    }

    /// The exact spin value.
    pub fn value(&self) -> Rational {
        self.0
    }

    /// Boson for integer spin, fermion for half-odd-integer spin.
    pub fn particle_class(&self) -> ParticleClass {
        if self.0.is_integer() {
            ParticleClass::Boson
        } else {
            ParticleClass::Fermion
        }
    }

    /// Mass dimension: 0 for the spin-0 massless sentinel, 1 for other
    /// bosons, 3/2 for fermions.
    pub fn mass_dim(&self) -> Rational {
        if self.0 == Rational::from_integer(0) {
            Rational::from_integer(0)
        } else if self.0.is_integer() {
            Rational::from_integer(1)
        } else {
            Rational::new(3, 2)
        }
    }
}

impl Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
