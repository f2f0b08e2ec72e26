use super::invert_nonzero;
use crate::arithmetic::{FieldElement, Modular};
use crate::curve::Curve;
use crate::error::ArithmeticError;
use crate::U256;

use std::fmt;
use std::marker::PhantomData;

/// A point given by its `(x, y)` coordinates, or the point at infinity.
///
/// The group law works directly on the coordinates and pays one field
/// inversion per addition or doubling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffinePoint<C: Curve> {
    Identity,
    Coordinates {
        x: FieldElement<C>,
        y: FieldElement<C>,
    },
}

impl<C: Curve> AffinePoint<C> {
    pub const IDENTITY: Self = Self::Identity;

    pub const GENERATOR: Self = Self::Coordinates {
        x: FieldElement(C::GENERATOR_X, PhantomData),
        y: FieldElement(C::GENERATOR_Y, PhantomData),
    };

    /// Builds a point from raw coordinates, both of which have to be below
    /// the field modulus. Curve membership is not checked, see
    /// [`AffinePoint::new_checked`].
    pub fn new(x: U256, y: U256) -> Result<Self, ArithmeticError> {
        Ok(Self::from_field_elements(
            checked_coordinate::<C>('x', x)?,
            checked_coordinate::<C>('y', y)?,
        ))
    }

    /// Like [`AffinePoint::new`], but rejects points off the curve.
    pub fn new_checked(x: U256, y: U256) -> Result<Self, ArithmeticError> {
        let point = Self::new(x, y)?;
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(ArithmeticError::NotOnCurve)
        }
    }

    pub fn from_field_elements(x: FieldElement<C>, y: FieldElement<C>) -> Self {
        Self::Coordinates { x, y }
    }

    pub fn x(&self) -> Option<&FieldElement<C>> {
        match self {
            Self::Identity => None,
            Self::Coordinates { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&FieldElement<C>> {
        match self {
            Self::Identity => None,
            Self::Coordinates { y, .. } => Some(y),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn invert_point(&self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Coordinates { x, y } => Self::Coordinates { x: *x, y: -y },
        }
    }

    /// `P + Q` for any two points, identity and mutual inverses included.
    pub fn geometric_add(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Identity, _) => *rhs,
            (_, Self::Identity) => *self,
            (Self::Coordinates { x: x1, y: y1 }, Self::Coordinates { x: x2, y: y2 }) => {
                if x1 == x2 && y1 != y2 {
                    Self::Identity
                } else if self == rhs {
                    self.double()
                } else {
                    Self::add_distinct((x1, y1), (x2, y2))
                }
            }
        }
    }

    fn add_distinct(
        (x1, y1): (&FieldElement<C>, &FieldElement<C>),
        (x2, y2): (&FieldElement<C>, &FieldElement<C>),
    ) -> Self {
        assert!(x1 != x2, "chord addition of points sharing an x coordinate");
        let lambda = (y2 - y1) * invert_nonzero(&(x2 - x1));
        let x3 = lambda.square() - *x1 - *x2;
        let y3 = lambda * (x1 - &x3) - *y1;
        Self::Coordinates { x: x3, y: y3 }
    }

    pub fn double(&self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            // vertical tangent at a point of order two
            Self::Coordinates { y, .. } if y.is_zero() => Self::Identity,
            Self::Coordinates { x, y } => {
                let a = FieldElement::<C>::new(C::COEFF_A);
                let three = FieldElement::<C>::from_u64(3);
                let lambda = (three * x.square() + a) * invert_nonzero(&y.double());
                let x3 = lambda.square() - x.double();
                let y3 = lambda * (x - &x3) - *y;
                Self::Coordinates { x: x3, y: y3 }
            }
        }
    }

    pub fn homogeneous_coordinates(&self) -> [FieldElement<C>; 3] {
        match self {
            Self::Identity => [FieldElement::ZERO, FieldElement::ONE, FieldElement::ZERO],
            Self::Coordinates { x, y } => [*x, *y, FieldElement::ONE],
        }
    }
}

pub(crate) fn checked_coordinate<C: Curve>(
    coordinate: char,
    value: U256,
) -> Result<FieldElement<C>, ArithmeticError> {
    if value < C::PRIME_MODULUS {
        Ok(FieldElement::new(value))
    } else {
        Err(ArithmeticError::CoordinateOutOfRange { coordinate, value })
    }
}

impl<C: Curve> fmt::Display for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identity => writeln!(f, "identity"),
            Self::Coordinates { x, y } => {
                writeln!(f, "x: {}", x)?;
                writeln!(f, "y: {}", y)
            }
        }
    }
}

impl_point_arithmetic!(AffinePoint<C>, "affine");
