//! Cryptographic digest traits.
//!
//! Hashes in this workspace are one-shot: the whole message is handed over at
//! once and the digest comes back by value. There is no incremental state.

use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest.
pub trait Digest {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Compute the digest of `data`.
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output;
}
