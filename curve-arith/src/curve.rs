use crate::U256;

/// Parameter set of a short Weierstrass curve `y² = x³ + a·x + b` over a
/// prime field.
///
/// Implemented by zero-sized tags. Points carry their curve tag as a type
/// parameter, so points of different curves never mix.
pub trait Curve: Clone + Copy + std::fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    const NAME: &'static str;
    const PRIME_MODULUS: U256;
    const ORDER: U256;
    const GENERATOR_X: U256;
    const GENERATOR_Y: U256;
    const COEFF_A: U256;
    const COEFF_B: U256;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    const NAME: &'static str = "secp256k1";
    const PRIME_MODULUS: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    const ORDER: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");
    const GENERATOR_X: U256 =
        U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
    const GENERATOR_Y: U256 =
        U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");
    const COEFF_A: U256 = U256::ZERO;
    const COEFF_B: U256 = U256::from_u8(7);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arithmetic::modular::mul_mod_u256;

    #[test]
    fn secp256k1_generator_satisfies_equation() {
        let p = Secp256k1::PRIME_MODULUS;
        let x = Secp256k1::GENERATOR_X;
        let y = Secp256k1::GENERATOR_Y;
        assert!(x < p && y < p);

        let y2 = mul_mod_u256(&y, &y, &p);
        let x3 = mul_mod_u256(&mul_mod_u256(&x, &x, &p), &x, &p);
        let rhs = x3.add_mod(&Secp256k1::COEFF_B, &p);
        assert_eq!(y2, rhs);
    }

    #[test]
    fn secp256k1_order_below_modulus() {
        assert!(Secp256k1::ORDER < Secp256k1::PRIME_MODULUS);
        assert_eq!(Secp256k1::NAME, "secp256k1");
    }
}
