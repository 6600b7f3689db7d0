#![deny(missing_docs)]
#![doc = "Exact root-system arithmetic for the zoo validation engine: weight systems, \
irrep dimensions and tensor-product decomposition over the classical and exceptional \
Lie algebra families."]

mod algebra;
mod linalg;
mod lookup;
mod tensor;
mod weights;

pub use algebra::{Algebra, Series};
pub use lookup::{conjugate, irrep_by_name};
pub use tensor::{tensor_decompose, IrrepComponent};
pub use weights::{irrep_dim, weight_system};
