use super::modular::{mod_inverse, reduce_u256, Modular};
use crate::curve::Curve;
use crate::error::ArithmeticError;

use bigint::U256;

use std::fmt;
use std::marker::PhantomData;

/// Element of the base field of curve `C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement<C: Curve>(pub(crate) U256, pub(crate) PhantomData<C>);

impl<C: Curve> FieldElement<C> {
    pub const ONE: Self = Self(U256::ONE, PhantomData);
    pub const ZERO: Self = Self(U256::ZERO, PhantomData);

    pub fn from_u64(number: u64) -> Self {
        Self::new(U256::from_u64(number))
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn double(&self) -> Self {
        self + self
    }
}

impl<C: Curve> Modular for FieldElement<C> {
    const MODULUS: U256 = C::PRIME_MODULUS;

    fn new(number: U256) -> Self {
        Self(reduce_u256(&number, &Self::MODULUS), PhantomData)
    }

    fn inner(&self) -> &U256 {
        &self.0
    }
}

impl<C: Curve> fmt::Display for FieldElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The prime field a curve is defined over.
///
/// Carries no data; the modulus comes from the curve's parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaloisField<C: Curve>(PhantomData<C>);

impl<C: Curve> GaloisField<C> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    pub fn modulus(&self) -> U256 {
        C::PRIME_MODULUS
    }

    /// `number mod p`
    pub fn reduce(&self, number: &U256) -> FieldElement<C> {
        FieldElement::new(*number)
    }

    /// Inverse of `value` modulo an arbitrary `modulus`.
    pub fn mod_inverse(&self, value: &U256, modulus: &U256) -> Result<U256, ArithmeticError> {
        mod_inverse(value, modulus)
    }

    /// Inverse of `value` in this field.
    pub fn inverse(&self, value: &FieldElement<C>) -> Result<FieldElement<C>, ArithmeticError> {
        value.inverse()
    }
}

impl<C: Curve> Default for GaloisField<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, 'b, C: Curve> std::ops::Add<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn add(self, rhs: &'b FieldElement<C>) -> Self::Output {
        Modular::add(self, rhs)
    }
}

impl<C: Curve> std::ops::Add for FieldElement<C> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Modular::add(&self, &rhs)
    }
}

impl<C: Curve> std::ops::AddAssign for FieldElement<C> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<C: Curve> std::ops::Sub for FieldElement<C> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Modular::sub(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Sub<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn sub(self, rhs: &'b FieldElement<C>) -> Self::Output {
        Modular::sub(self, rhs)
    }
}

impl<C: Curve> std::ops::SubAssign for FieldElement<C> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<C: Curve> std::ops::Neg for FieldElement<C> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Modular::neg(&self)
    }
}

impl<C: Curve> std::ops::Neg for &FieldElement<C> {
    type Output = FieldElement<C>;
    fn neg(self) -> Self::Output {
        Modular::neg(self)
    }
}

impl<C: Curve> std::ops::Mul for FieldElement<C> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Modular::mul(&self, &rhs)
    }
}

impl<'a, 'b, C: Curve> std::ops::Mul<&'b FieldElement<C>> for &'a FieldElement<C> {
    type Output = FieldElement<C>;
    fn mul(self, rhs: &'b FieldElement<C>) -> Self::Output {
        Modular::mul(self, rhs)
    }
}

impl<C: Curve> std::ops::MulAssign for FieldElement<C> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Secp256k1;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct TestCurveSmallMod;

    impl Curve for TestCurveSmallMod {
        const NAME: &'static str = "small";
        const PRIME_MODULUS: U256 = U256::from_u32(17);
        const ORDER: U256 = U256::ONE;
        const GENERATOR_X: U256 = U256::ZERO;
        const GENERATOR_Y: U256 = U256::ZERO;
        const COEFF_A: U256 = U256::ZERO;
        const COEFF_B: U256 = U256::ZERO;
    }

    type FeSmall = FieldElement<TestCurveSmallMod>;
    type FeLarge = FieldElement<Secp256k1>;

    #[test]
    fn operations_with_small_modulus() {
        let a = FeSmall::new(U256::from_u32(15));
        let b = FeSmall::new(U256::from_u32(9));
        assert_eq!(&a + &b, FeSmall::new(U256::from_u32(7)));
        assert_eq!(a * b, FeSmall::new(U256::from_u32(16)));
        assert_eq!(a - b, FeSmall::new(U256::from_u32(6)));
        assert_eq!(b - a, FeSmall::new(U256::from_u32(11)));
        assert_eq!(-a, FeSmall::new(U256::from_u32(2)));
        assert_eq!(FeSmall::new(U256::from_u32(40)), FeSmall::from_u64(6));
        // 15 * 8 = 120 = 7 * 17 + 1
        assert_eq!(a.inverse(), Ok(FeSmall::from_u64(8)));
        assert_eq!(FeSmall::ZERO.inverse(), Err(ArithmeticError::NotInvertible));
    }

    #[test]
    fn operations_with_large_modulus() {
        let a = FeLarge::new(Secp256k1::GENERATOR_X);
        let b = FeLarge::new(Secp256k1::GENERATOR_Y);
        assert_eq!(
            a + b,
            FeLarge::new(U256::from_be_hex(
                "c1f940f620808011b3455e91dc9813afffb3b123d4537cf2f63a51eb1208ec50"
            ))
        );
        assert_eq!(
            a * b,
            FeLarge::new(U256::from_be_hex(
                "fd3dc529c6eb60fb9d166034cf3c1a5a72324aa9dfd3428a56d7e1ce0179fd9b"
            ))
        );

        let a_min_b = a - b;
        let b_min_a = b - a;
        assert_eq!(a_min_b, -b_min_a);
        assert_eq!(
            a_min_b,
            FeLarge::new(U256::from_be_hex(
                "31838c07d338f746f7fb6699c076025e058448928748d4bfbdaab0cb1be742e0"
            ))
        );

        let a_inv = a.inverse().unwrap();
        assert_eq!(a * a_inv, FeLarge::ONE);
    }

    #[test]
    fn galois_field_contract() {
        let field = GaloisField::<TestCurveSmallMod>::new();
        assert_eq!(field.modulus(), U256::from_u32(17));
        assert_eq!(field.reduce(&U256::from_u32(35)), FeSmall::ONE);
        assert_eq!(
            field.mod_inverse(&U256::from_u32(3), &U256::from_u32(7)),
            Ok(U256::from_u32(5))
        );
        let two = FeSmall::from_u64(2);
        assert_eq!(field.inverse(&two).unwrap() * two, FeSmall::ONE);
    }
}
