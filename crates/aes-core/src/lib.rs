//! Arithmetic core of the AES-128 key schedule.
//!
//! This crate provides:
//! - Rijndael field arithmetic over GF(2^8) ([`Gf256`]).
//! - A 128-bit word type with byte, column and integer views ([`Word128`]).
//! - The AES-128 key expansion producing 11 round keys ([`expand_key`]).
//!
//! All operations are pure functions on `Copy` values. Field arithmetic and
//! the S-box avoid data-dependent branches and table lookups.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod affine;
mod error;
mod field;
mod key;
mod sbox;
mod schedule;
mod word;

pub use crate::affine::{Affine8, Matrix8};
pub use crate::error::{Error, Result};
pub use crate::field::{Gf256, REDUCTION};
pub use crate::key::{RoundKey, RoundKeys, ROUNDS, ROUND_KEY_COUNT};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX_AFFINE, SBOX_AFFINE};
pub use crate::schedule::{expand_key, next_round_key, rcon, rot_word, sub_word, KeySchedule};
pub use crate::word::{Word128, WORD_BYTES};
