//! Differential fuzz target for Keccak-256.
//!
//! Compares against tiny-keccak and RustCrypto `sha3`, and checks the hex form
//! against the raw digest.

#![no_main]

use keccak256::{keccak256, keccak256_hex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = keccak256(data);

  let mut tiny = [0u8; 32];
  {
    use tiny_keccak::{Hasher, Keccak};
    let mut h = Keccak::v256();
    h.update(data);
    h.finalize(&mut tiny);
  }

  use sha3::Digest as _;
  let reference = sha3::Keccak256::digest(data);
  let mut rust_crypto = [0u8; 32];
  rust_crypto.copy_from_slice(&reference);

  assert_eq!(ours, tiny);
  assert_eq!(ours, rust_crypto);

  let hex = keccak256_hex(data);
  const DIGITS: &[u8; 16] = b"0123456789abcdef";
  for (pair, byte) in hex.as_bytes().chunks(2).zip(ours) {
    let expected = [DIGITS[usize::from(byte >> 4)], DIGITS[usize::from(byte & 0xf)]];
    assert_eq!(pair, &expected[..]);
  }
});
