//! Matter and gauge fields with their representation maps.

use std::collections::BTreeMap;

use serde::Serialize;
use zoo_algebra::{check_rep_kind, Group, RepValue};
use zoo_core::{Rational, ZooError};

use crate::spin::{ParticleClass, Spin};

/// A representation value paired with the group it transforms under.
///
/// Owned by exactly one field; the group is a plain copyable value shared
/// with the symmetry that declared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Representation {
    value: RepValue,
    group: Group,
}

impl Representation {
    /// Pairs a representation value with its group, rejecting shapes the
    /// group cannot carry (e.g. a weight vector under U(1)).
    pub fn new(value: RepValue, group: Group) -> Result<Self, ZooError> {
        group.validate()?;
        check_rep_kind(&group, &value)?;
        Ok(Self { value, group })
    }

    /// The raw representation value.
    pub fn value(&self) -> &RepValue {
        &self.value
    }

    /// The group this is a representation of.
    pub fn group(&self) -> Group {
        self.group
    }
}

/// A named field: spin, representation map and display metadata.
///
/// Constructed once by the configuration transform and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: String,
    spin: Spin,
    representations: BTreeMap<String, Representation>,
    description: Option<String>,
    no_mass: bool,
}

impl Field {
    /// Creates a field, parsing and validating the spin spelling.
    pub fn new(
        name: impl Into<String>,
        spin: &str,
        representations: BTreeMap<String, Representation>,
        description: Option<String>,
        no_mass: bool,
    ) -> Result<Self, ZooError> {
        Ok(Self {
            name: name.into(),
            spin: Spin::parse(spin)?,
            representations,
            description,
            no_mass,
        })
    }

    /// Name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact spin of the field.
    pub fn spin(&self) -> Spin {
        self.spin
    }

    /// Mass dimension derived from the spin.
    pub fn mass_dim(&self) -> Rational {
        self.spin.mass_dim()
    }

    /// Statistics class derived from the spin.
    pub fn particle_class(&self) -> ParticleClass {
        self.spin.particle_class()
    }

    /// True when the field carries integer spin.
    pub fn is_boson(&self) -> bool {
        self.particle_class() == ParticleClass::Boson
    }

    /// True when the field carries half-odd-integer spin.
    pub fn is_fermion(&self) -> bool {
        self.particle_class() == ParticleClass::Fermion
    }

    /// Description of the field, empty when none was given.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Whether the field was flagged massless in the configuration.
    pub fn no_mass(&self) -> bool {
        self.no_mass
    }

    /// Representations keyed by symmetry name.
    pub fn representations(&self) -> &BTreeMap<String, Representation> {
        &self.representations
    }

    /// The field's representation under the named symmetry, if any.
    pub fn representation(&self, symmetry: &str) -> Option<&Representation> {
        self.representations.get(symmetry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_rep(labels: Vec<i64>, group: Group) -> Representation {
        Representation::new(RepValue::Weight(labels), group).unwrap()
    }

    #[test]
    fn field_surfaces_spin_derived_attributes() {
        let mut reps = BTreeMap::new();
        reps.insert("color".to_string(), weight_rep(vec![1, 0], Group::SU(3)));
        let quark = Field::new("q", "1/2", reps, Some("up quark".into()), false).unwrap();
        assert!(quark.is_fermion());
        assert!(!quark.is_boson());
        assert_eq!(quark.mass_dim(), Rational::new(3, 2));
        assert_eq!(quark.description(), "up quark");
        assert!(quark.representation("color").is_some());
        assert!(quark.representation("weak").is_none());
    }

    #[test]
    fn bad_spin_fails_construction() {
        let result = Field::new("x", "2/3", BTreeMap::new(), None, false);
        assert!(matches!(result, Err(ZooError::Model(_))));
    }

    #[test]
    fn representation_kind_must_match_group() {
        assert!(Representation::new(RepValue::Weight(vec![1]), Group::U1).is_err());
        assert!(Representation::new(RepValue::Charge(Rational::new(1, 2)), Group::SU(2)).is_err());
    }
}
