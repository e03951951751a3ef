//! Round key types for AES-128.

use serde::{Deserialize, Serialize};

use crate::word::{Word128, WORD_BYTES};

/// Number of rounds in AES-128.
pub const ROUNDS: usize = 10;

/// Number of round keys produced by the key schedule, including the input key.
pub const ROUND_KEY_COUNT: usize = ROUNDS + 1;

/// A round key tagged with the round that consumes it (0..=10).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundKey {
    /// Round index; round 0 is the original key.
    pub round: u8,
    /// Key material for the round.
    pub key: Word128,
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundKeys(pub [Word128; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> Option<&Word128> {
        self.0.get(round)
    }

    /// The original key.
    #[inline]
    pub fn first(&self) -> &Word128 {
        &self.0[0]
    }

    /// The round 10 key.
    #[inline]
    pub fn last(&self) -> &Word128 {
        &self.0[ROUNDS]
    }

    /// Iterates the keys in round order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = RoundKey> + '_ {
        self.0.iter().enumerate().map(|(round, key)| RoundKey {
            round: round as u8,
            key: *key,
        })
    }

    /// Concatenates all round keys, round 0 first.
    pub fn to_bytes(&self) -> [u8; ROUND_KEY_COUNT * WORD_BYTES] {
        let mut out = [0u8; ROUND_KEY_COUNT * WORD_BYTES];
        for (chunk, key) in out.chunks_exact_mut(WORD_BYTES).zip(self.0.iter()) {
            chunk.copy_from_slice(&key.to_bytes());
        }
        out
    }
}
