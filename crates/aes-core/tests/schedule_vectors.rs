//! Key expansion checked against the published AES-128 vector.

use aes_core::{expand_key, KeySchedule, Word128, ROUND_KEY_COUNT};

const EXPANDED: [&str; ROUND_KEY_COUNT] = [
    "2b7e151628aed2a6abf7158809cf4f3c",
    "a0fafe1788542cb123a339392a6c7605",
    "f2c295f27a96b9435935807a7359f67f",
    "3d80477d4716fe3e1e237e446d7a883b",
    "ef44a541a8525b7fb671253bdb0bad00",
    "d4d1c6f87c839d87caf2b8bc11f915bc",
    "6d88a37a110b3efddbf98641ca0093fd",
    "4e54f70e5f5fc9f384a64fb24ea6dc4f",
    "ead27321b58dbad2312bf5607f8d292f",
    "ac7766f319fadc2128d12941575c006e",
    "d014f9a8c9ee2589e13f0cc8b6630ca6",
];

#[test]
fn expansion_prints_as_expected_hex() {
    let key = Word128::from_bytes(&hex::decode(EXPANDED[0]).unwrap()).unwrap();
    let round_keys = expand_key(&key);
    let printed: Vec<String> = round_keys.iter().map(|rk| rk.key.to_string()).collect();
    assert_eq!(printed, EXPANDED);
}

#[test]
fn iterator_and_expand_agree() {
    let key = Word128::from_values(&[
        0x2bu16, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
        0x4f, 0x3c,
    ])
    .unwrap();
    let collected: Vec<Word128> = KeySchedule::new(key).map(|rk| rk.key).collect();
    assert_eq!(collected, expand_key(&key).0);
}
