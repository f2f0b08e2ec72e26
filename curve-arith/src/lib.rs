#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod arithmetic;
pub mod curve;
pub mod error;
pub mod form;
#[cfg(test)]
mod test_curve;

pub use bigint::U256;
pub use curve::{Curve, Secp256k1};
pub use error::ArithmeticError;
pub use form::CurveForm;
