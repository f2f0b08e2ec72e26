mod field;
pub(crate) mod modular;
pub mod multiply;
mod point;
mod scalar;

pub use field::{FieldElement, GaloisField};
pub use modular::{mod_inverse, Modular};
pub use multiply::{double_and_add, multiply_batch, multiply_each};
pub use point::{AffinePoint, CurvePoint, ProjectivePoint};
pub use scalar::Scalar;
