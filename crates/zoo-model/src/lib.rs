#![deny(missing_docs)]
#![doc = "Field and symmetry data model: immutable value objects constructed once by the \
configuration transform and consumed by the validation entry points."]

mod field;
mod spin;
mod symmetry;

pub use field::{Field, Representation};
pub use spin::{ParticleClass, Spin};
pub use symmetry::{validate_reps_declared, Symmetry, SymmetryRegistry};
