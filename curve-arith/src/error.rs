use bigint::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("value has no inverse modulo the given modulus")]
    NotInvertible,
    #[error("modulus must be nonzero")]
    ZeroModulus,
    #[error("{coordinate} coordinate {value} is not below the field modulus")]
    CoordinateOutOfRange { coordinate: char, value: U256 },
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("projective triple with Z = 0 other than (0 : Y : 0), Y != 0")]
    DegenerateProjective,
}
