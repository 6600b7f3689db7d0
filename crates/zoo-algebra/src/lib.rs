#![deny(missing_docs)]
#![doc = "Group algebra adapter for the zoo validation engine: a closed set of gauge \
group families with one uniform representation-product entry point."]

mod decomp;
mod group;
mod rep;

pub use decomp::{decompose, ChargeComponent, Decomposition};
pub use group::Group;
pub use rep::{check_rep_kind, resolve_rep, RawRep, RepValue};
