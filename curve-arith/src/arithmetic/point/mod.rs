#[macro_use]
mod impl_macro;
mod affine;
mod projective;

pub use affine::AffinePoint;
pub use projective::ProjectivePoint;

use super::{FieldElement, Modular};
use crate::curve::Curve;

use std::fmt::Debug;

/// Operations a point representation provides to the generic group
/// algorithms, most notably double-and-add scalar multiplication.
pub trait CurvePoint<C: Curve>: Clone + PartialEq + Debug + Send + Sync {
    /// Short label used in log records.
    const REPRESENTATION: &'static str;

    fn identity() -> Self;

    fn generator() -> Self;

    fn is_identity(&self) -> bool;

    /// The additive inverse `-P`.
    fn invert_point(&self) -> Self;

    /// The full group law, including identity and mutual-inverse operands.
    fn geometric_add(&self, rhs: &Self) -> Self;

    fn double(&self) -> Self;

    /// `(X, Y, Z)` with affine points mapped to `Z = 1` and the identity to
    /// `(0, 1, 0)`.
    fn homogeneous_coordinates(&self) -> [FieldElement<C>; 3];
}

// NOTE every caller proves the argument nonzero before inverting and the
// field modulus is prime, so a failure here is a broken invariant
pub(crate) fn invert_nonzero<C: Curve>(value: &FieldElement<C>) -> FieldElement<C> {
    value
        .inverse()
        .expect("inverted a field element that the group law guards proved nonzero")
}

// Conversions

impl<C: Curve> From<ProjectivePoint<C>> for AffinePoint<C> {
    fn from(point: ProjectivePoint<C>) -> AffinePoint<C> {
        point.to_affine()
    }
}

impl<C: Curve> From<&ProjectivePoint<C>> for AffinePoint<C> {
    fn from(point: &ProjectivePoint<C>) -> AffinePoint<C> {
        point.to_affine()
    }
}

impl<C: Curve> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(point: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::from(&point)
    }
}

impl<C: Curve> From<&AffinePoint<C>> for ProjectivePoint<C> {
    fn from(point: &AffinePoint<C>) -> ProjectivePoint<C> {
        let [x, y, z] = point.homogeneous_coordinates();
        ProjectivePoint::from_field_elements(x, y, z)
    }
}
