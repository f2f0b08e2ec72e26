use crate::arithmetic::multiply::double_and_add;
use crate::arithmetic::{AffinePoint, CurvePoint, FieldElement, GaloisField, Modular};
use crate::curve::{Curve, Secp256k1};
use crate::error::ArithmeticError;
use crate::U256;

use std::marker::PhantomData;

/// The short Weierstrass polynomial `x³ + a·x + b − y²` of curve `C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Equation<C: Curve>(PhantomData<C>);

impl<C: Curve> Equation<C> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    pub fn coeff_a(&self) -> FieldElement<C> {
        FieldElement::new(C::COEFF_A)
    }

    pub fn coeff_b(&self) -> FieldElement<C> {
        FieldElement::new(C::COEFF_B)
    }

    /// Homogenized evaluation `X³ + a·X·Z² + b·Z³ − Y²·Z`, which reduces to
    /// the affine polynomial for `Z = 1`.
    pub fn evaluate(
        &self,
        x: &FieldElement<C>,
        y: &FieldElement<C>,
        z: &FieldElement<C>,
    ) -> FieldElement<C> {
        let z2 = z.square();
        let x3 = x.square() * *x;
        let axz2 = self.coeff_a() * *x * z2;
        let bz3 = self.coeff_b() * z2 * *z;
        let y2z = y.square() * *z;
        x3 + axz2 + bz3 - y2z
    }

    /// True iff `point` is a finite point on which the polynomial vanishes.
    /// The point at infinity is left to the caller.
    pub fn is_zero<P: CurvePoint<C>>(&self, point: &P) -> bool {
        let [x, y, z] = point.homogeneous_coordinates();
        !z.is_zero() && self.evaluate(&x, &y, &z).is_zero()
    }
}

impl<C: Curve> Default for Equation<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Group operations of a curve form, here short Weierstrass, on top of a
/// parameter set.
///
/// Every method has a default, so a new curve only needs an empty impl.
pub trait CurveForm: Curve {
    fn field() -> GaloisField<Self> {
        GaloisField::new()
    }

    fn equation() -> Equation<Self> {
        Equation::new()
    }

    /// `by · point`, in whichever representation `point` is given.
    fn multiply<P: CurvePoint<Self>>(point: &P, by: &U256) -> P {
        double_and_add::<Self, P>(point, by)
    }

    fn is_identity<P: CurvePoint<Self>>(point: &P) -> bool {
        point.is_identity()
    }

    fn contains<P: CurvePoint<Self>>(point: &P) -> bool {
        Self::is_identity(point) || Self::equation().is_zero(point)
    }

    /// Membership test on raw coordinates. Coordinates outside the field
    /// are never on the curve.
    fn contains_point_at(x: &U256, y: &U256) -> bool {
        AffinePoint::<Self>::new(*x, *y)
            .map(|point| Self::contains(&point))
            .unwrap_or(false)
    }

    fn generator<P: CurvePoint<Self>>() -> P {
        P::generator()
    }

    /// `number mod p`
    fn reduce(number: &U256) -> FieldElement<Self> {
        Self::field().reduce(number)
    }

    fn mod_inverse(value: &U256, modulus: &U256) -> Result<U256, ArithmeticError> {
        Self::field().mod_inverse(value, modulus)
    }
}

impl CurveForm for Secp256k1 {}
