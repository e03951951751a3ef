//! AES S-box computed from field inversion and an affine map.
//!
//! No lookup table is consulted, so substitution time does not depend on the
//! input byte.

use crate::affine::{Affine8, Matrix8};
use crate::field::Gf256;

/// Output bit `i` is `b_i ⊕ b_{i+4} ⊕ b_{i+5} ⊕ b_{i+6} ⊕ b_{i+7}` (indices mod 8), then `⊕ 0x63`.
pub const SBOX_AFFINE: Affine8 = Affine8::new(Matrix8::circulant(0xf1), 0x63);

/// Inverse of [`SBOX_AFFINE`]: rows are `0xa4` rotated, bias `0x05`.
pub const INV_SBOX_AFFINE: Affine8 = Affine8::new(Matrix8::circulant(0xa4), 0x05);

/// Forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX_AFFINE.apply(Gf256(byte).inverse().value())
}

/// Inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    Gf256(INV_SBOX_AFFINE.apply(byte)).inverse().value()
}
