use super::point::CurvePoint;
use crate::curve::Curve;

use bigint::U256;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `scalar · point` by right-to-left double-and-add.
///
/// The scalar is not reduced modulo the group order, and the running time
/// depends on its bits.
pub fn double_and_add<C: Curve, P: CurvePoint<C>>(point: &P, scalar: &U256) -> P {
    let width = scalar.bits_vartime();
    log::trace!(
        "{} {} scalar multiplication over {} bits",
        C::NAME,
        P::REPRESENTATION,
        width
    );

    let mut acc = P::identity();
    let mut running = point.clone();
    for i in 0..width {
        if scalar.bit_vartime(i) == 1 {
            acc = acc.geometric_add(&running);
        }
        running = running.geometric_add(&running);
    }
    acc
}

/// Multiplies every point with the same scalar.
pub fn multiply_batch<C: Curve, P: CurvePoint<C>>(points: &[P], scalar: &U256) -> Vec<P> {
    log::debug!(
        "{} {} batch of {} points",
        C::NAME,
        P::REPRESENTATION,
        points.len()
    );

    #[cfg(feature = "parallel")]
    let iter = points.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = points.iter();

    iter.map(|point| double_and_add::<C, P>(point, scalar))
        .collect()
}

/// Multiplies each point with its own scalar.
pub fn multiply_each<C: Curve, P: CurvePoint<C>>(pairs: &[(P, U256)]) -> Vec<P> {
    log::debug!(
        "{} {} batch of {} point-scalar pairs",
        C::NAME,
        P::REPRESENTATION,
        pairs.len()
    );

    #[cfg(feature = "parallel")]
    let iter = pairs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pairs.iter();

    iter.map(|(point, scalar)| double_and_add::<C, P>(point, scalar))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::{AffinePoint, Modular, ProjectivePoint, Scalar};
    use crate::curve::Secp256k1;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type SecAffine = AffinePoint<Secp256k1>;
    type SecPoint = ProjectivePoint<Secp256k1>;

    #[test]
    fn high_bit_scalars() {
        let g = SecPoint::GENERATOR;
        // 2^255 by repeated doubling
        let mut expected = g;
        for _ in 0..255 {
            expected = expected.double();
        }
        let top = U256::ONE.shl_vartime(255);
        assert_eq!(double_and_add::<Secp256k1, _>(&g, &top), expected);
        assert_eq!(
            double_and_add::<Secp256k1, _>(&g, &top.wrapping_add(&U256::ONE)),
            expected + g
        );
    }

    #[test]
    fn small_multiples() {
        let g = SecAffine::GENERATOR;
        assert_eq!(double_and_add::<Secp256k1, _>(&g, &U256::ZERO), SecAffine::IDENTITY);
        assert_eq!(double_and_add::<Secp256k1, _>(&g, &U256::ONE), g);
        assert_eq!(double_and_add::<Secp256k1, _>(&g, &U256::from_u8(2)), g.double());
        assert_eq!(
            double_and_add::<Secp256k1, _>(&g, &U256::from_u8(7)),
            g.double().double() + g.double() + g
        );
        assert_eq!(
            double_and_add::<Secp256k1, _>(&SecAffine::IDENTITY, &U256::from_u8(7)),
            SecAffine::IDENTITY
        );
    }

    #[test]
    fn order_annihilates_generator() {
        let g = SecPoint::GENERATOR;
        assert!(double_and_add::<Secp256k1, _>(&g, &Secp256k1::ORDER).is_identity());
        let order_minus_one = Secp256k1::ORDER.wrapping_sub(&U256::ONE);
        assert_eq!(double_and_add::<Secp256k1, _>(&g, &order_minus_one), -g);
    }

    #[test]
    fn batches_match_single_multiplication() {
        let _ = env_logger::try_init();
        let mut rng = StdRng::seed_from_u64(7);
        let points: Vec<SecPoint> = (0..4)
            .map(|_| &SecPoint::GENERATOR * Scalar::<Secp256k1>::random(&mut rng))
            .collect();
        let scalar = *Scalar::<Secp256k1>::random(&mut rng).inner();

        let batch = multiply_batch::<Secp256k1, _>(&points, &scalar);
        assert_eq!(batch.len(), points.len());
        for (point, product) in points.iter().zip(&batch) {
            assert_eq!(product, &point.scalar_mul(&scalar));
        }

        let pairs: Vec<(SecPoint, U256)> = points
            .iter()
            .map(|point| (*point, *Scalar::<Secp256k1>::random(&mut rng).inner()))
            .collect();
        let each = multiply_each::<Secp256k1, _>(&pairs);
        for ((point, scalar), product) in pairs.iter().zip(&each) {
            assert_eq!(product, &point.scalar_mul(scalar));
        }

        assert!(multiply_batch::<Secp256k1, SecAffine>(&[], &scalar).is_empty());
    }
}
