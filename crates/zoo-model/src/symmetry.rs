//! Symmetries and the name-indexed registry that identifies them.
//!
//! A symmetry's identity is its name: two instances with the same name refer
//! to the same symmetry, so lookups go through an explicit name-keyed map
//! instead of structural equality.

use std::collections::BTreeMap;

use serde::Serialize;
use zoo_algebra::Group;
use zoo_core::{ErrorInfo, ZooError};

use crate::field::Field;

/// A gauged or global symmetry of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symmetry {
    name: String,
    group: Group,
    gauged: bool,
    coupling: String,
    tag: Option<String>,
    description: Option<String>,
}

impl Symmetry {
    /// Creates a symmetry.
    ///
    /// `tag` is a short display label such as the `L` in `SU(2)_L`; when
    /// present it takes precedence over the name in rendered output.
    pub fn new(
        name: impl Into<String>,
        group: Group,
        gauged: bool,
        coupling: impl Into<String>,
        tag: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ZooError> {
        group.validate()?;
        Ok(Self {
            name: name.into(),
            group,
            gauged,
            coupling: coupling.into(),
            tag,
            description,
        })
    }

    /// Name of the symmetry; this is its identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group dictating the symmetry.
    pub fn group(&self) -> Group {
        self.group
    }

    /// Whether the symmetry is local (gauged) rather than global.
    pub fn is_gauged(&self) -> bool {
        self.gauged
    }

    /// Name of the coupling constant.
    pub fn coupling(&self) -> &str {
        &self.coupling
    }

    /// Derived: true unless the group is a continuous non-abelian family.
    pub fn is_abelian(&self) -> bool {
        self.group.is_abelian()
    }

    /// The label preferred for display: the tag when present, else the name.
    pub fn display_tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(&self.name)
    }

    /// Description of the symmetry, empty when none was given.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Name-indexed collection of the symmetries declared by a model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SymmetryRegistry {
    by_name: BTreeMap<String, Symmetry>,
}

impl SymmetryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a symmetry, rejecting duplicate names.
    pub fn insert(&mut self, symmetry: Symmetry) -> Result<(), ZooError> {
        let name = symmetry.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(ZooError::Config(
                ErrorInfo::new(
                    "duplicate-symmetry",
                    format!("symmetry {name:?} is declared twice"),
                )
                .with_context("symmetry", name),
            ));
        }
        self.by_name.insert(name, symmetry);
        Ok(())
    }

    /// Looks a symmetry up by name.
    pub fn get(&self, name: &str) -> Option<&Symmetry> {
        self.by_name.get(name)
    }

    /// Iterates declared names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// Number of declared symmetries.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// True when nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Checks that every representation key on every field names a declared
/// symmetry and points at that symmetry's group.
pub fn validate_reps_declared(
    fields: &[Field],
    registry: &SymmetryRegistry,
) -> Result<(), ZooError> {
    for field in fields {
        for (name, representation) in field.representations() {
            let declared = registry.get(name).ok_or_else(|| {
                ZooError::Config(
                    ErrorInfo::new(
                        "undeclared-symmetry",
                        format!("field {:?} transforms under undeclared symmetry {name:?}", field.name()),
                    )
                    .with_context("field", field.name())
                    .with_context("symmetry", name.clone()),
                )
            })?;
            if representation.group() != declared.group() {
                return Err(ZooError::Config(
                    ErrorInfo::new(
                        "mismatched-group",
                        format!(
                            "field {:?} carries {} under {name:?} but the symmetry declares {}",
                            field.name(),
                            representation.group(),
                            declared.group()
                        ),
                    )
                    .with_context("field", field.name())
                    .with_context("symmetry", name.clone()),
                ));
            }
        }
    }
    Ok(())
}
