use crate::error::ArithmeticError;

use bigint::{Encoding, NonZero, U256, U512};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;

/// Arithmetic on integers kept in `[0, MODULUS)`.
pub trait Modular: Sized {
    const MODULUS: U256;

    fn new(number: U256) -> Self;

    fn inner(&self) -> &U256;

    fn add(&self, other: &Self) -> Self {
        Self::new(self.inner().add_mod(other.inner(), &Self::MODULUS))
    }

    fn neg(&self) -> Self {
        Self::new(self.inner().neg_mod(&Self::MODULUS))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::new(self.inner().sub_mod(other.inner(), &Self::MODULUS))
    }

    fn mul(&self, other: &Self) -> Self {
        Self::new(mul_mod_u256(self.inner(), other.inner(), &Self::MODULUS))
    }

    fn inverse(&self) -> Result<Self, ArithmeticError> {
        mod_inverse(self.inner(), &Self::MODULUS).map(Self::new)
    }

    fn is_zero(&self) -> bool {
        self.inner() == &U256::ZERO
    }
}

/// Reduces `number` into `[0, modulus)`.
pub fn reduce_u256(number: &U256, modulus: &U256) -> U256 {
    if number < modulus {
        *number
    } else {
        // NOTE modulus is never zero, so unwrap is fine here
        *number % NonZero::new(*modulus).unwrap()
    }
}

pub fn mul_mod_u256(lhs: &U256, rhs: &U256, modulus: &U256) -> U256 {
    // NOTE modulus is never zero, so unwrap is fine here
    let mod512 = NonZero::new(U512::from((U256::ZERO, *modulus))).unwrap();
    // mul_wide yields (lo, hi) while U512::from takes (hi, lo)
    let (lo, hi) = lhs.mul_wide(rhs);
    let product = U512::from((hi, lo));
    // split returns (hi, lo), and hi is zero after reducing by a U256 modulus
    let (_, rem) = (product % mod512).split();
    rem
}

/// Multiplicative inverse of `value` modulo `modulus`.
///
/// Fails when `gcd(value, modulus) != 1`, which covers `value == 0` for any
/// modulus larger than one.
pub fn mod_inverse(value: &U256, modulus: &U256) -> Result<U256, ArithmeticError> {
    if modulus == &U256::ZERO {
        return Err(ArithmeticError::ZeroModulus);
    }
    let value = to_bigint(&reduce_u256(value, modulus));
    let modulus_big = to_bigint(modulus);

    let ext_gcd = value.extended_gcd(&modulus_big);
    if ext_gcd.gcd != BigInt::from(1u8) {
        return Err(ArithmeticError::NotInvertible);
    }
    // the Bezout coefficient may be negative, mod_floor brings it into [0, modulus)
    let inverse = ext_gcd.x.mod_floor(&modulus_big);
    Ok(from_bigint(&inverse))
}

fn to_bigint(number: &U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &number.to_be_bytes())
}

// only called on values already reduced below a U256 modulus
fn from_bigint(number: &BigInt) -> U256 {
    let (_, bytes) = number.to_bytes_be();
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(&bytes);
    U256::from_be_bytes(padded)
}
