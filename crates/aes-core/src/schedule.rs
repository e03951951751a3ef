//! AES-128 key schedule.

use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::field::Gf256;
use crate::key::{RoundKey, RoundKeys, ROUNDS, ROUND_KEY_COUNT};
use crate::sbox::sbox;
use crate::word::Word128;

/// Round constant byte `x^(round - 1)` for `round >= 1`; zero for round 0.
pub const fn rcon(round: usize) -> u8 {
    if round == 0 {
        return 0;
    }
    let mut value = Gf256::ONE;
    let mut i = 1;
    while i < round {
        value = value.mul_x();
        i += 1;
    }
    value.value()
}

/// RotWord: cyclic left rotation by one byte.
#[inline]
pub fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// SubWord: S-box applied to each byte.
#[inline]
pub fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Derives the key for `round` (1..=10) from the previous round key.
pub fn next_round_key(prev: &Word128, round: usize) -> Word128 {
    let [w0, w1, w2, w3] = prev.words();
    let temp = sub_word(rot_word(w3)) ^ (u32::from(rcon(round)) << 24);
    let n0 = w0 ^ temp;
    let n1 = w1 ^ n0;
    let n2 = w2 ^ n1;
    let n3 = w3 ^ n2;
    Word128::from_words([n0, n1, n2, n3])
}

/// Yields the round keys of one AES-128 expansion in order, then stops.
///
/// Each call to `next` hands out the current key and derives its successor;
/// after round 10 the schedule is exhausted.
#[derive(Clone, Debug)]
pub struct KeySchedule {
    current: Word128,
    round: usize,
}

impl KeySchedule {
    /// Starts a schedule whose round 0 key is `key`.
    pub fn new(key: Word128) -> Self {
        Self {
            current: key,
            round: 0,
        }
    }

    /// Index of the next round key to be yielded.
    pub fn round(&self) -> usize {
        self.round
    }

    /// True once all 11 round keys have been yielded.
    pub fn is_finished(&self) -> bool {
        self.round > ROUNDS
    }
}

impl Iterator for KeySchedule {
    type Item = RoundKey;

    fn next(&mut self) -> Option<RoundKey> {
        if self.is_finished() {
            return None;
        }
        let out = RoundKey {
            round: self.round as u8,
            key: self.current,
        };
        if self.round < ROUNDS {
            self.current = next_round_key(&self.current, self.round + 1);
        }
        trace!(round = self.round, "derived round key");
        self.round += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = ROUND_KEY_COUNT.saturating_sub(self.round);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KeySchedule {}

impl FusedIterator for KeySchedule {}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Word128) -> RoundKeys {
    let mut round_keys = [Word128::ZERO; ROUND_KEY_COUNT];
    for round_key in KeySchedule::new(*key) {
        round_keys[usize::from(round_key.round)] = round_key.key;
    }
    debug!(rounds = ROUND_KEY_COUNT, "expanded AES-128 key");
    RoundKeys(round_keys)
}
