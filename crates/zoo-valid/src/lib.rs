#![deny(missing_docs)]
#![doc = "Validation entry points for zoo field models: gauge invariance of interaction \
terms and renormalizability classification by mass dimension."]

mod gauge;
mod renorm;
mod report;
mod serde;

pub use gauge::{is_gauge_invariant, is_gauge_invariant_repr};
pub use renorm::{validate_mass_dim, Renormalizability};
pub use report::{check_interaction, InvarianceReport};
pub use crate::serde::{from_json_slice, to_canonical_json_bytes};
