//! Arithmetic in the Rijndael field GF(2^8).
//!
//! Elements are bytes interpreted as polynomials over GF(2), reduced modulo
//! `m(x) = x^8 + x^4 + x^3 + x + 1` (0x11B). Every operation is total:
//! zero has no inverse, so `inverse(0) = 0` and `a / 0 = 0`.
//!
//! Multiplication runs a fixed eight iterations and selects terms with masks
//! rather than branches, so timing does not depend on operand values.

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Low byte of the reduction polynomial, folded back in when `x^8` overflows.
pub const REDUCTION: u8 = 0x1b;

/// An element of GF(2^8) under the AES reduction polynomial.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Gf256(pub u8);

impl Gf256 {
    /// Additive identity.
    pub const ZERO: Self = Self(0);
    /// Multiplicative identity.
    pub const ONE: Self = Self(1);
    /// The element `x`.
    pub const X: Self = Self(2);
    /// The element `x + 1`, which generates the multiplicative group.
    pub const GENERATOR: Self = Self(3);

    /// Returns the underlying byte.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Field addition (bitwise XOR).
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub const fn add(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    /// Multiplies by `x`, reducing when bit 7 shifts out.
    #[inline]
    pub const fn mul_x(self) -> Self {
        let carry = (self.0 >> 7).wrapping_neg();
        Self((self.0 << 1) ^ (carry & REDUCTION))
    }

    /// Carry-less multiplication modulo the reduction polynomial.
    #[allow(clippy::should_implement_trait)]
    pub const fn mul(self, rhs: Self) -> Self {
        let mut acc = 0u8;
        let mut running = self;
        let mut bits = rhs.0;
        let mut i = 0;
        while i < 8 {
            acc ^= running.0 & (bits & 1).wrapping_neg();
            running = running.mul_x();
            bits >>= 1;
            i += 1;
        }
        Self(acc)
    }

    /// Raises the element to `exp` by square-and-multiply. `pow(0) = 1`.
    pub const fn pow(self, exp: u32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        let mut e = exp;
        while e != 0 {
            let mask = ((e & 1) as u8).wrapping_neg();
            let product = result.mul(base);
            result = Self((product.0 & mask) | (result.0 & !mask));
            base = base.mul(base);
            e >>= 1;
        }
        result
    }

    /// Multiplicative inverse, computed as `a^254`.
    ///
    /// The nonzero elements form a group of order 255, so `a^254 · a = 1`.
    /// For zero the exponentiation yields zero, which is the convention used
    /// here to keep the operation total.
    #[inline]
    pub const fn inverse(self) -> Self {
        self.pow(254)
    }

    /// Division `self · rhs⁻¹`. Dividing by zero yields zero.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.inverse())
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Gf256> for u8 {
    fn from(value: Gf256) -> Self {
        value.0
    }
}

impl Add for Gf256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Gf256::add(self, rhs)
    }
}

// Characteristic 2: subtraction is addition.
impl Sub for Gf256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Gf256::add(self, rhs)
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Gf256::mul(self, rhs)
    }
}

impl Div for Gf256 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Gf256::div(self, rhs)
    }
}

impl fmt::LowerHex for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
