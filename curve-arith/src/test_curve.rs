use crate::curve::Curve;
use crate::form::CurveForm;
use crate::U256;

/// `y² = x³ + 2x + 3` over F_97.
///
/// The group has 100 points, among them three of order two: `(30, 0)`,
/// `(96, 0)` and `(68, 0)`. `ORDER` is the order of the generator `(3, 6)`,
/// which is 5, not the order of the whole group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestCurve97;

impl Curve for TestCurve97 {
    const NAME: &'static str = "test97";
    const PRIME_MODULUS: U256 = U256::from_u8(97);
    const ORDER: U256 = U256::from_u8(5);
    const GENERATOR_X: U256 = U256::from_u8(3);
    const GENERATOR_Y: U256 = U256::from_u8(6);
    const COEFF_A: U256 = U256::from_u8(2);
    const COEFF_B: U256 = U256::from_u8(3);
}

impl CurveForm for TestCurve97 {}
