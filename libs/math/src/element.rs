//! Elements of the fixed prime field.

use crate::errors::{DivByZero, Overflow};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
    sync::LazyLock,
};

/// The field modulus, the prime 2^256 + 297.
///
/// The prime is wider than 256 bits, so every 32-byte secret imports into the field without
/// reduction. Initialized once, immutable for the lifetime of the process.
pub static PRIME: LazyLock<BigUint> = LazyLock::new(|| (BigUint::one() << 256u32) + BigUint::from(297u32));

/// The fixed width of a field element's byte representation.
pub const ELEMENT_BYTES: usize = 32;

/// A number that performs arithmetic modulo [static@PRIME] in every operation.
///
/// The value is kept reduced into [0, p) at all times. Arithmetic is exact and
/// arbitrary-precision; intermediate products are reduced after each operation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FieldElement {
    value: BigUint,
}

impl FieldElement {
    /// Constructs a new field element, reducing the value modulo the prime.
    pub fn new(value: BigUint) -> Self {
        let value = if value >= *PRIME { value % &*PRIME } else { value };
        Self { value }
    }

    /// Constructs a field element from a u64.
    pub fn from_u64(value: u64) -> Self {
        Self { value: BigUint::from(value) }
    }

    /// The zero element.
    pub fn zero() -> Self {
        Self { value: BigUint::zero() }
    }

    /// The one element.
    pub fn one() -> Self {
        Self { value: BigUint::one() }
    }

    /// Check if this element is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Generates a uniformly random element using the provided random number generator.
    ///
    /// Uniformity comes from rejection sampling below the prime; the generator must be
    /// cryptographically strong, which the `CryptoRng` bound enforces at the type level.
    pub fn gen_random_with_rng<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self { value: rng.gen_biguint_below(&PRIME) }
    }

    /// Imports an element from its little-endian byte representation.
    ///
    /// Any 32-byte value is below the prime, so the import never reduces.
    pub fn from_le_bytes(bytes: &[u8; ELEMENT_BYTES]) -> Self {
        Self { value: BigUint::from_bytes_le(bytes) }
    }

    /// Exports this element as exactly 32 little-endian bytes, zero-padded on the high end.
    ///
    /// Elements in [2^256, p) need a 33rd byte and fail with [Overflow]; they are never
    /// truncated.
    pub fn to_le_bytes(&self) -> Result<[u8; ELEMENT_BYTES], Overflow> {
        if self.value.bits() > 256 {
            return Err(Overflow);
        }
        let bytes = self.value.to_bytes_le();
        let mut output = [0u8; ELEMENT_BYTES];
        for (slot, byte) in output.iter_mut().zip(bytes.iter()) {
            *slot = *byte;
        }
        Ok(output)
    }

    fn inverse(&self) -> FieldElement {
        let exponent = &*PRIME - BigUint::from(2u32);
        Self { value: self.value.modpow(&exponent, &PRIME) }
    }
}

/// A type whose values have a multiplicative inverse.
pub trait Inv {
    /// The result of the inversion.
    type Output;

    /// Computes the multiplicative inverse.
    fn inv(self) -> Self::Output;
}

impl Inv for &FieldElement {
    type Output = Result<FieldElement, DivByZero>;

    fn inv(self) -> Self::Output {
        if self.is_zero() {
            return Err(DivByZero);
        }
        Ok(self.inverse())
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        (&self).add(other)
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::new(&self.value + &other.value)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        (&self).sub(other)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        // Both operands are below p, so adding p first keeps the difference positive.
        FieldElement::new(&self.value + &*PRIME - &other.value)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        (&self).mul(other)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::new(&self.value * &other.value)
    }
}

impl Div<&FieldElement> for FieldElement {
    type Output = Result<FieldElement, DivByZero>;

    fn div(self, other: &FieldElement) -> Result<FieldElement, DivByZero> {
        (&self).div(other)
    }
}

impl Div for &FieldElement {
    type Output = Result<FieldElement, DivByZero>;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: &FieldElement) -> Result<FieldElement, DivByZero> {
        Ok(self * &other.inv()?)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        (&self).neg()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            return FieldElement::zero();
        }
        FieldElement { value: &*PRIME - &self.value }
    }
}

impl From<&FieldElement> for BigUint {
    fn from(element: &FieldElement) -> Self {
        element.value.clone()
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mod {}", self.value, *PRIME)
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
