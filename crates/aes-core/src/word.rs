//! 128-bit AES state and key words.

use core::cmp::Ordering;
use core::fmt;
use core::ops::BitXor;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of bytes in a [`Word128`].
pub const WORD_BYTES: usize = 16;

/// Sixteen bytes held as two big-endian 64-bit halves.
///
/// `top` carries bytes 0..8 and `bot` bytes 8..16, byte 0 being the most
/// significant byte of `top`. Both halves are native `u64`, so every byte is
/// below 256 and every half below 2^64 by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word128 {
    top: u64,
    bot: u64,
}

impl Word128 {
    /// The all-zero word.
    pub const ZERO: Self = Self { top: 0, bot: 0 };

    /// Builds a word from its two halves.
    #[inline]
    pub const fn from_halves(top: u64, bot: u64) -> Self {
        Self { top, bot }
    }

    /// Upper half (bytes 0..8).
    #[inline]
    pub const fn top(&self) -> u64 {
        self.top
    }

    /// Lower half (bytes 8..16).
    #[inline]
    pub const fn bot(&self) -> u64 {
        self.bot
    }

    /// Packs exactly 16 bytes, byte 0 most significant.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; WORD_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: WORD_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self::from_array(array))
    }

    /// Packs 16 integers after checking each lies in `0..=255`.
    pub fn from_values<T>(values: &[T]) -> Result<Self>
    where
        T: Copy + Into<i128>,
    {
        if values.len() != WORD_BYTES {
            return Err(Error::InvalidLength {
                expected: WORD_BYTES,
                actual: values.len(),
            });
        }
        let mut bytes = [0u8; WORD_BYTES];
        for (index, (slot, value)) in bytes.iter_mut().zip(values).enumerate() {
            let value: i128 = (*value).into();
            *slot = u8::try_from(value).map_err(|_| Error::ByteOutOfRange { index, value })?;
        }
        Ok(Self::from_array(bytes))
    }

    /// Packs a fixed 16-byte array.
    pub const fn from_array(bytes: [u8; WORD_BYTES]) -> Self {
        let mut top = 0u64;
        let mut bot = 0u64;
        let mut i = 0;
        while i < 8 {
            top = (top << 8) | bytes[i] as u64;
            bot = (bot << 8) | bytes[i + 8] as u64;
            i += 1;
        }
        Self { top, bot }
    }

    /// Unpacks into 16 bytes, exact inverse of [`Word128::from_array`].
    pub const fn to_bytes(&self) -> [u8; WORD_BYTES] {
        let top = self.top.to_be_bytes();
        let bot = self.bot.to_be_bytes();
        let mut out = [0u8; WORD_BYTES];
        let mut i = 0;
        while i < 8 {
            out[i] = top[i];
            out[i + 8] = bot[i];
            i += 1;
        }
        out
    }

    /// Views the word as the AES state matrix: `m[row][col] = bytes[4 * col + row]`.
    pub fn to_columns(&self) -> [[u8; 4]; 4] {
        let bytes = self.to_bytes();
        let mut m = [[0u8; 4]; 4];
        for (row, cells) in m.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = bytes[4 * col + row];
            }
        }
        m
    }

    /// Inverse of [`Word128::to_columns`].
    pub fn from_columns(m: &[[u8; 4]; 4]) -> Self {
        let mut bytes = [0u8; WORD_BYTES];
        for (row, cells) in m.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                bytes[4 * col + row] = *cell;
            }
        }
        Self::from_array(bytes)
    }

    /// Splits into four big-endian 32-bit words, word `c` holding bytes `4c..4c+4`.
    pub const fn words(&self) -> [u32; 4] {
        [
            (self.top >> 32) as u32,
            self.top as u32,
            (self.bot >> 32) as u32,
            self.bot as u32,
        ]
    }

    /// Inverse of [`Word128::words`].
    pub const fn from_words(words: [u32; 4]) -> Self {
        Self {
            top: ((words[0] as u64) << 32) | words[1] as u64,
            bot: ((words[2] as u64) << 32) | words[3] as u64,
        }
    }

    /// The whole word as an integer, `bot + top · 2^64`.
    #[inline]
    pub const fn to_u128(&self) -> u128 {
        ((self.top as u128) << 64) | self.bot as u128
    }

    /// Inverse of [`Word128::to_u128`].
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            top: (value >> 64) as u64,
            bot: value as u64,
        }
    }

    /// Bytewise XOR, computed per half.
    #[inline]
    pub const fn xor(&self, rhs: &Self) -> Self {
        Self {
            top: self.top ^ rhs.top,
            bot: self.bot ^ rhs.bot,
        }
    }
}

impl From<[u8; WORD_BYTES]> for Word128 {
    fn from(value: [u8; WORD_BYTES]) -> Self {
        Self::from_array(value)
    }
}

impl From<Word128> for [u8; WORD_BYTES] {
    fn from(value: Word128) -> Self {
        value.to_bytes()
    }
}

impl TryFrom<&[u8]> for Word128 {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_bytes(value)
    }
}

impl From<u128> for Word128 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl BitXor for Word128 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.xor(&rhs)
    }
}

impl Ord for Word128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u128().cmp(&other.to_u128())
    }
}

impl PartialOrd for Word128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::LowerHex for Word128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.top, self.bot)
    }
}

impl fmt::Display for Word128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];

    #[test]
    fn packs_big_endian_halves() {
        let w = Word128::from_array(SEQ);
        assert_eq!(w.top(), 0x0001_0203_0405_0607);
        assert_eq!(w.bot(), 0x0809_0a0b_0c0d_0e0f);
        assert_eq!(w.to_bytes(), SEQ);
        assert_eq!(w.to_u128(), 0x0001_0203_0405_0607_0809_0a0b_0c0d_0e0f);
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        assert_eq!(
            Word128::from_bytes(&SEQ[..15]),
            Err(Error::InvalidLength {
                expected: 16,
                actual: 15
            })
        );
        assert_eq!(
            Word128::from_bytes(&[0u8; 17]),
            Err(Error::InvalidLength {
                expected: 16,
                actual: 17
            })
        );
        assert_eq!(Word128::from_bytes(&SEQ), Ok(Word128::from_array(SEQ)));
    }

    #[test]
    fn from_values_range_checks_each_element() {
        let mut values: Vec<i32> = SEQ.iter().map(|&b| i32::from(b)).collect();
        assert_eq!(Word128::from_values(&values[..]), Ok(Word128::from_array(SEQ)));

        values[3] = 256;
        assert_eq!(
            Word128::from_values(&values[..]),
            Err(Error::ByteOutOfRange {
                index: 3,
                value: 256
            })
        );

        values[3] = 3;
        values[12] = -1;
        assert_eq!(
            Word128::from_values(&values[..]),
            Err(Error::ByteOutOfRange {
                index: 12,
                value: -1
            })
        );

        assert!(matches!(
            Word128::from_values(&[0u16; 4]),
            Err(Error::InvalidLength { actual: 4, .. })
        ));
    }

    #[test]
    fn columns_follow_aes_state_layout() {
        let m = Word128::from_array(SEQ).to_columns();
        assert_eq!(m[0], [0x00, 0x04, 0x08, 0x0c]);
        assert_eq!(m[1], [0x01, 0x05, 0x09, 0x0d]);
        assert_eq!(m[2], [0x02, 0x06, 0x0a, 0x0e]);
        assert_eq!(m[3], [0x03, 0x07, 0x0b, 0x0f]);
        assert_eq!(Word128::from_columns(&m), Word128::from_array(SEQ));
    }

    #[test]
    fn words_are_consecutive_bytes() {
        let w = Word128::from_array(SEQ);
        assert_eq!(w.words(), [0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]);
        assert_eq!(Word128::from_words(w.words()), w);
    }

    #[test]
    fn xor_laws() {
        let a = Word128::from_array(SEQ);
        let b = Word128::from_u128(0xdead_beef_0000_ffff_1234_5678_9abc_def0);
        let c = Word128::from_halves(u64::MAX, 1);
        assert_eq!(a ^ a, Word128::ZERO);
        assert_eq!(a ^ Word128::ZERO, a);
        assert_eq!(a ^ b, b ^ a);
        assert_eq!((a ^ b) ^ c, a ^ (b ^ c));

        let mut bytewise = [0u8; 16];
        for (i, out) in bytewise.iter_mut().enumerate() {
            *out = a.to_bytes()[i] ^ b.to_bytes()[i];
        }
        assert_eq!(a.xor(&b).to_bytes(), bytewise);
    }

    #[test]
    fn ordering_follows_scalar_value() {
        let small = Word128::from_halves(0, u64::MAX);
        let large = Word128::from_halves(1, 0);
        assert!(small < large);
        assert_eq!(small.cmp(&small), Ordering::Equal);
        assert_eq!(large.to_u128(), 1u128 << 64);
    }

    #[test]
    fn formats_as_32_hex_digits() {
        let w = Word128::from_array(SEQ);
        assert_eq!(w.to_string(), "000102030405060708090a0b0c0d0e0f");
        assert_eq!(format!("{:x}", Word128::ZERO), "0".repeat(32));
    }
}
