use super::affine::checked_coordinate;
use super::{invert_nonzero, AffinePoint};
use crate::arithmetic::modular::mul_mod_u256;
use crate::arithmetic::{FieldElement, Modular};
use crate::curve::Curve;
use crate::error::ArithmeticError;
use crate::U256;

use std::fmt;
use std::marker::PhantomData;

/// A point in homogeneous projective coordinates `(X : Y : Z)`, standing for
/// the affine point `(X/Z, Y/Z)`.
///
/// Addition and doubling use the Renes-Costello-Batina formulas and never
/// invert a field element. The only inversion happens in
/// [`ProjectivePoint::to_affine`].
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: Curve> {
    x: FieldElement<C>,
    y: FieldElement<C>,
    z: FieldElement<C>,
}

impl<C: Curve> PartialEq for ProjectivePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        let x0z1 = self.x * other.z;
        let x1z0 = other.x * self.z;
        let y0z1 = self.y * other.z;
        let y1z0 = other.y * self.z;

        x0z1 == x1z0 && y0z1 == y1z0
    }
}

impl<C: Curve> Eq for ProjectivePoint<C> {}

impl<C: Curve> ProjectivePoint<C> {
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    pub const GENERATOR: Self = Self {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
        z: FieldElement::ONE,
    };

    /// Builds a point from raw coordinates, each of which has to be below the
    /// field modulus. A triple with `Z = 0` must be `(0 : Y : 0)` with
    /// `Y != 0`. Curve membership is not checked, see
    /// [`ProjectivePoint::new_checked`].
    pub fn new(x: U256, y: U256, z: U256) -> Result<Self, ArithmeticError> {
        let point = Self::from_field_elements(
            checked_coordinate::<C>('x', x)?,
            checked_coordinate::<C>('y', y)?,
            checked_coordinate::<C>('z', z)?,
        );
        // (0 : 0 : 0) would compare equal to every point and any other
        // Z = 0 triple has no affine image
        if point.z.is_zero() && !point.is_identity() {
            return Err(ArithmeticError::DegenerateProjective);
        }
        Ok(point)
    }

    /// Like [`ProjectivePoint::new`], but rejects points off the curve.
    pub fn new_checked(x: U256, y: U256, z: U256) -> Result<Self, ArithmeticError> {
        let point = Self::new(x, y, z)?;
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(ArithmeticError::NotOnCurve)
        }
    }

    pub(crate) fn from_field_elements(
        x: FieldElement<C>,
        y: FieldElement<C>,
        z: FieldElement<C>,
    ) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn x(&self) -> &FieldElement<C> {
        &self.x
    }

    #[inline(always)]
    pub fn y(&self) -> &FieldElement<C> {
        &self.y
    }

    #[inline(always)]
    pub fn z(&self) -> &FieldElement<C> {
        &self.z
    }

    #[inline(always)]
    pub fn is_identity(&self) -> bool {
        self.x == FieldElement::ZERO && self.y != FieldElement::ZERO && self.z == FieldElement::ZERO
    }

    pub fn invert_point(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// `P + Q` for any two points.
    ///
    /// Mutual inverses are detected by comparing against `-Q` because two
    /// triples of the same affine point need not share coordinates.
    pub fn geometric_add(&self, rhs: &Self) -> Self {
        if self.is_identity() && rhs.is_identity() {
            Self::IDENTITY
        } else if self.is_identity() {
            *rhs
        } else if rhs.is_identity() {
            *self
        } else if *self == rhs.invert_point() {
            Self::IDENTITY
        } else if self == rhs {
            self.double()
        } else {
            let sum = self.add_distinct(rhs);
            // the complete formulas degenerate to (0 : 0 : 0) when P - Q has
            // order two, which needs a curve of even order
            if sum.z == FieldElement::ZERO && !sum.is_identity() {
                Self::from(self.to_affine() + rhs.to_affine())
            } else {
                sum
            }
        }
    }

    // Renes-Costello-Batina 2015, algorithm 1
    fn add_distinct(&self, rhs: &Self) -> Self {
        let b3 = FieldElement::new(mul_mod_u256(
            &U256::from_u8(3),
            &C::COEFF_B,
            &C::PRIME_MODULUS,
        ));
        let a = FieldElement::new(C::COEFF_A);

        let mut t0 = self.x * rhs.x;
        let mut t1 = self.y * rhs.y;
        let mut t2 = self.z * rhs.z;
        let mut t3 = self.x + self.y;
        let mut t4 = rhs.x + rhs.y;

        t3 *= t4;
        t4 = t0 + t1;
        t3 -= t4;
        t4 = self.x + self.z;
        let mut t5 = rhs.x + rhs.z;

        t4 *= t5;
        t5 = t0 + t2;
        t4 -= t5;
        t5 = self.y + self.z;
        let mut sum_x = rhs.y + rhs.z;

        t5 *= sum_x;
        sum_x = t1 + t2;
        t5 -= sum_x;
        let mut sum_z = a * t4;
        sum_x = b3 * t2;

        sum_z += sum_x;
        sum_x = t1 - sum_z;
        sum_z += t1;
        let mut sum_y = sum_x * sum_z;
        t1 = t0 + t0;

        t1 += t0;
        t2 = a * t2;
        t4 *= b3;
        t1 += t2;
        t2 = t0 - t2;

        t2 *= a;
        t4 += t2;
        t0 = t1 * t4;
        sum_y += t0;
        t0 = t4 * t5;

        sum_x *= t3;
        sum_x -= t0;
        t0 = t1 * t3;
        sum_z *= t5;
        sum_z += t0;

        Self {
            x: sum_x,
            y: sum_y,
            z: sum_z,
        }
    }

    /// `2P`, Renes-Costello-Batina 2015, algorithm 3.
    pub fn double(&self) -> Self {
        // a finite point with y = 0 has order two
        if self.is_identity() || self.y == FieldElement::ZERO {
            return Self::IDENTITY;
        }

        let b3 = FieldElement::new(mul_mod_u256(
            &U256::from_u8(3),
            &C::COEFF_B,
            &C::PRIME_MODULUS,
        ));
        let a = FieldElement::new(C::COEFF_A);

        let mut t0 = self.x.square();
        let t1 = self.y.square();
        let mut t2 = self.z.square();
        let mut t3 = (self.x * self.y).double();
        let mut dbl_z = (self.x * self.z).double();

        let mut dbl_x = a * dbl_z;
        let mut dbl_y = b3 * t2;
        dbl_y += dbl_x;
        dbl_x = t1 - dbl_y;
        dbl_y += t1;

        dbl_y *= dbl_x;
        dbl_x *= t3;
        dbl_z *= b3;
        t2 *= a;
        t3 = t0 - t2;

        t3 *= a;
        t3 += dbl_z;
        dbl_z = t0 + t0;
        t0 += dbl_z;
        t0 += t2;

        t0 *= t3;
        dbl_y += t0;
        t2 = (self.y * self.z).double();
        t0 = t2 * t3;
        dbl_x -= t0;

        dbl_z = (t2 * t1).double().double();

        Self {
            x: dbl_x,
            y: dbl_y,
            z: dbl_z,
        }
    }

    pub fn homogeneous_coordinates(&self) -> [FieldElement<C>; 3] {
        [self.x, self.y, self.z]
    }

    /// Normalizes to affine coordinates with a single inversion of `Z`.
    pub fn to_affine(&self) -> AffinePoint<C> {
        if self.is_identity() {
            AffinePoint::IDENTITY
        } else {
            let z_inv = invert_nonzero(&self.z);
            AffinePoint::from_field_elements(self.x * z_inv, self.y * z_inv)
        }
    }
}

impl<C: Curve> fmt::Display for ProjectivePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "x: {}", self.x)?;
        writeln!(f, "y: {}", self.y)?;
        writeln!(f, "z: {}", self.z)
    }
}

impl_point_arithmetic!(ProjectivePoint<C>, "projective");
