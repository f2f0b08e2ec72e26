// Operator sugar and the `CurvePoint` impl shared by both representations.
// Each representation provides the inherent group law methods.
macro_rules! impl_point_arithmetic {
    ($this:ty, $label:literal) => {
        impl<C: Curve> std::ops::Neg for $this {
            type Output = Self;
            fn neg(self) -> Self::Output {
                self.invert_point()
            }
        }

        impl<C: Curve> std::ops::Neg for &$this {
            type Output = $this;
            fn neg(self) -> Self::Output {
                self.invert_point()
            }
        }

        impl<C: Curve> std::ops::Add for $this {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                self.geometric_add(&rhs)
            }
        }

        impl<'a, 'b, C: Curve> std::ops::Add<&'b $this> for &'a $this {
            type Output = $this;
            fn add(self, rhs: &'b $this) -> Self::Output {
                self.geometric_add(rhs)
            }
        }

        impl<C: Curve> std::ops::AddAssign<&$this> for $this {
            fn add_assign(&mut self, rhs: &$this) {
                *self = self.geometric_add(rhs)
            }
        }

        impl<C: Curve> std::ops::Sub for $this {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                self.geometric_add(&rhs.invert_point())
            }
        }

        impl<'a, 'b, C: Curve> std::ops::Sub<&'b $this> for &'a $this {
            type Output = $this;
            fn sub(self, rhs: &'b $this) -> Self::Output {
                self.geometric_add(&rhs.invert_point())
            }
        }

        impl<'a, 'b, C: Curve> std::ops::Mul<&'b $crate::U256> for &'a $this {
            type Output = $this;
            fn mul(self, rhs: &'b $crate::U256) -> Self::Output {
                self.scalar_mul(rhs)
            }
        }

        impl<C: Curve> std::ops::Mul<$crate::arithmetic::Scalar<C>> for &$this {
            type Output = $this;
            fn mul(self, rhs: $crate::arithmetic::Scalar<C>) -> Self::Output {
                self.scalar_mul($crate::arithmetic::Modular::inner(&rhs))
            }
        }

        impl<'a, 'b, C: Curve> std::ops::Mul<&'b $crate::arithmetic::Scalar<C>> for &'a $this {
            type Output = $this;
            fn mul(self, rhs: &'b $crate::arithmetic::Scalar<C>) -> Self::Output {
                self.scalar_mul($crate::arithmetic::Modular::inner(rhs))
            }
        }

        impl<C: Curve> $this {
            /// `scalar · self` by double-and-add over the scalar's bits.
            pub fn scalar_mul(&self, scalar: &$crate::U256) -> Self {
                $crate::arithmetic::multiply::double_and_add::<C, Self>(self, scalar)
            }

            pub fn is_on_curve(&self) -> bool {
                self.is_identity() || $crate::form::Equation::<C>::new().is_zero(self)
            }
        }

        impl<C: Curve> $crate::arithmetic::CurvePoint<C> for $this {
            const REPRESENTATION: &'static str = $label;

            fn identity() -> Self {
                Self::IDENTITY
            }

            fn generator() -> Self {
                Self::GENERATOR
            }

            fn is_identity(&self) -> bool {
                <$this>::is_identity(self)
            }

            fn invert_point(&self) -> Self {
                <$this>::invert_point(self)
            }

            fn geometric_add(&self, rhs: &Self) -> Self {
                <$this>::geometric_add(self, rhs)
            }

            fn double(&self) -> Self {
                <$this>::double(self)
            }

            fn homogeneous_coordinates(&self) -> [FieldElement<C>; 3] {
                <$this>::homogeneous_coordinates(self)
            }
        }
    };
}
