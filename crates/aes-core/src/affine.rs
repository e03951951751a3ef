//! Affine maps over GF(2)^8.
//!
//! The AES S-box is a field inversion followed by a fixed affine map on the
//! bits of the result. These types express that second step.

use serde::{Deserialize, Serialize};

/// 8×8 binary matrix over GF(2), stored row-major with each row packed into a `u8`.
///
/// Bit `j` of row `i` is the coefficient of input bit `j` in output bit `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix8 {
    rows: [u8; 8],
}

impl Matrix8 {
    /// Builds the circulant matrix whose row `i` is `first_row` rotated left by `i`.
    pub const fn circulant(first_row: u8) -> Self {
        let mut rows = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            rows[i] = first_row.rotate_left(i as u32);
            i += 1;
        }
        Self { rows }
    }

    /// Applies the matrix to an 8-bit value, treating bits as a column vector.
    pub const fn apply(&self, value: u8) -> u8 {
        let mut out = 0u8;
        let mut row_idx = 0;
        while row_idx < 8 {
            let parity = (self.rows[row_idx] & value).count_ones() as u8 & 1;
            out |= parity << row_idx;
            row_idx += 1;
        }
        out
    }

    /// Inverts the matrix by Gauss-Jordan elimination on `[self | I]`.
    pub fn invert(&self) -> Option<Self> {
        let mut left = self.rows;
        let mut right = Self::circulant(0x01).rows;

        for col in 0..8 {
            let pivot = (col..8).find(|&row| (left[row] >> col) & 1 == 1)?;
            left.swap(pivot, col);
            right.swap(pivot, col);
            let (pivot_left, pivot_right) = (left[col], right[col]);
            for (row, (l, r)) in left.iter_mut().zip(right.iter_mut()).enumerate() {
                if row != col && (*l >> col) & 1 == 1 {
                    *l ^= pivot_left;
                    *r ^= pivot_right;
                }
            }
        }

        Some(Self { rows: right })
    }
}

/// 8-bit affine map `x -> lin * x ⊕ bias`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine8 {
    /// Linear component.
    pub lin: Matrix8,
    /// Additive bias.
    pub bias: u8,
}

impl Affine8 {
    /// Constructs a new affine map from components.
    pub const fn new(lin: Matrix8, bias: u8) -> Self {
        Self { lin, bias }
    }

    /// Applies the affine map.
    pub const fn apply(&self, value: u8) -> u8 {
        self.lin.apply(value) ^ self.bias
    }

    /// Returns the inverse map `y -> lin⁻¹ * y ⊕ lin⁻¹ * bias`, if `lin` is invertible.
    pub fn invert(&self) -> Option<Self> {
        let lin_inv = self.lin.invert()?;
        let bias = lin_inv.apply(self.bias);
        Some(Self::new(lin_inv, bias))
    }
}
