//! Lowercase hex rendering of a 32-byte digest, without allocation.

use core::fmt;

use crate::keccak256::OUTPUT_SIZE;

/// Length of a hex-encoded digest.
pub const HEX_LEN: usize = OUTPUT_SIZE * 2;

#[inline(always)]
const fn nibble(n: u8) -> u8 {
  match n {
    0..=9 => b'0' + n,
    _ => b'a' + (n - 10),
  }
}

/// A digest rendered as exactly 64 lowercase hex characters.
///
/// Two characters per byte, most significant nibble first, no separators.
///
/// # Examples
///
/// ```
/// let hex = keccak256::keccak256_hex(b"");
/// assert_eq!(hex.as_str(), "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");
/// assert_eq!(hex.to_string().len(), 64);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDigest {
  buf: [u8; HEX_LEN],
}

impl HexDigest {
  /// Encode `digest` as lowercase hex.
  #[must_use]
  pub fn encode(digest: &[u8; OUTPUT_SIZE]) -> Self {
    let mut buf = [0u8; HEX_LEN];
    let (pairs, _) = buf.as_chunks_mut::<2>();
    for (pair, &byte) in pairs.iter_mut().zip(digest) {
      *pair = [nibble(byte >> 4), nibble(byte & 0x0f)];
    }
    Self { buf }
  }

  /// The hex string.
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    // SAFETY: `buf` only ever holds bytes produced by `nibble`, which are ASCII.
    unsafe { core::str::from_utf8_unchecked(&self.buf) }
  }

  /// The hex string as ASCII bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; HEX_LEN] {
    &self.buf
  }
}

impl AsRef<str> for HexDigest {
  #[inline]
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl AsRef<[u8]> for HexDigest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    &self.buf
  }
}

impl PartialEq<str> for HexDigest {
  #[inline]
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for HexDigest {
  #[inline]
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl fmt::Display for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("HexDigest").field(&self.as_str()).finish()
  }
}
