#![deny(missing_docs)]
#![doc = "Core error taxonomy and exact scalar types shared across the zoo validation crates."]

pub mod errors;
pub mod scalar;

pub use errors::{ErrorInfo, ZooError};
pub use scalar::{rational_from_str, Rational};
