//! Keccak-256 with the original Keccak padding.
//!
//! This is the pre-FIPS 202 instantiation (domain suffix `0x01`) used by
//! Ethereum and friends. It is **not** SHA3-256, which pads with `0x06` and
//! therefore produces different digests for every input.

use traits::Digest;

use crate::{hex::HexDigest, sponge::sponge};

/// Rate in bytes: 1088 bits, leaving a 512-bit capacity.
pub const RATE: usize = 136;

/// Domain-separation suffix of the original Keccak submission.
pub const DOMAIN_SUFFIX: u8 = 0x01;

/// Digest size in bytes.
pub const OUTPUT_SIZE: usize = 32;

/// Keccak-256.
///
/// Hashing is one-shot; a fresh state is built for every call and dropped
/// afterwards.
///
/// # Examples
///
/// ```
/// use keccak256::{Digest, Keccak256};
///
/// let digest = Keccak256::digest(b"abc");
/// assert_eq!(digest, keccak256::keccak256(b"abc"));
/// assert_eq!(
///   Keccak256::hex(b"abc").as_str(),
///   "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256;

impl Keccak256 {
  /// Raw 32-byte digest of `data`.
  #[inline]
  #[must_use]
  pub fn hash(data: &[u8]) -> [u8; OUTPUT_SIZE] {
    let mut out = [0u8; OUTPUT_SIZE];
    sponge::<RATE>(data, DOMAIN_SUFFIX, &mut out);
    out
  }

  /// Lowercase hex digest of `data`.
  #[inline]
  #[must_use]
  pub fn hex(data: &[u8]) -> HexDigest {
    HexDigest::encode(&Self::hash(data))
  }
}

impl Digest for Keccak256 {
  const OUTPUT_SIZE: usize = OUTPUT_SIZE;
  type Output = [u8; OUTPUT_SIZE];

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Self::hash(data)
  }
}

/// Raw Keccak-256 digest of `data`.
#[inline]
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; OUTPUT_SIZE] {
  Keccak256::hash(data)
}

/// Keccak-256 digest of `data` as 64 lowercase hex characters.
#[inline]
#[must_use]
pub fn keccak256_hex(data: &[u8]) -> HexDigest {
  Keccak256::hex(data)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keccak256_vectors() {
    assert_eq!(
      keccak256_hex(b""),
      "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
    assert_eq!(
      keccak256_hex(b"abc"),
      "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
    );
    assert_eq!(
      keccak256_hex(b"The quick brown fox jumps over the lazy dog"),
      "4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15"
    );
  }

  #[test]
  fn differs_from_sha3_256() {
    use sha3::Digest as _;

    let sha3 = sha3::Sha3_256::digest(b"abc");
    assert_ne!(&keccak256(b"abc")[..], &sha3[..]);
  }

  #[test]
  fn trait_and_free_functions_agree() {
    let data = b"keccak";
    assert_eq!(<Keccak256 as Digest>::digest(data), keccak256(data));
    assert_eq!(Keccak256::hex(data), HexDigest::encode(&keccak256(data)));
    assert_eq!(<Keccak256 as Digest>::OUTPUT_SIZE, 32);
  }
}
