//! Keccak sponge: state serialization, absorb with multi-rate padding, squeeze.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

use crate::keccak::{LANES, keccakf1600};

/// Size of the Keccak-f[1600] state in bytes.
pub const STATE_BYTES: usize = LANES * 8;

/// Final bit of multi-rate padding, placed in the last byte of the rate window.
const PAD_LAST: u8 = 0x80;

/// Decode a 200-byte buffer into lanes, little-endian per lane.
#[must_use]
pub fn lanes_from_bytes(bytes: &[u8; STATE_BYTES]) -> [u64; LANES] {
  let mut lanes = [0u64; LANES];
  let (chunks, _) = bytes.as_chunks::<8>();
  for (lane, chunk) in lanes.iter_mut().zip(chunks) {
    *lane = u64::from_le_bytes(*chunk);
  }
  lanes
}

/// Encode lanes into a 200-byte buffer, little-endian per lane.
#[must_use]
pub fn lanes_to_bytes(lanes: &[u64; LANES]) -> [u8; STATE_BYTES] {
  let mut bytes = [0u8; STATE_BYTES];
  let (chunks, _) = bytes.as_chunks_mut::<8>();
  for (chunk, lane) in chunks.iter_mut().zip(lanes) {
    *chunk = lane.to_le_bytes();
  }
  bytes
}

/// 1600-bit permutation state.
#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct KeccakState {
  lanes: [u64; LANES],
}

impl KeccakState {
  #[inline]
  pub(crate) fn permute(&mut self) {
    keccakf1600(&mut self.lanes);
  }

  /// XOR `byte` into state byte `offset`.
  #[inline(always)]
  pub(crate) fn xor_byte(&mut self, offset: usize, byte: u8) {
    debug_assert!(offset < STATE_BYTES);
    self.lanes[offset / 8] ^= u64::from(byte) << (8 * (offset % 8));
  }

  /// XOR `data` into the front of the state.
  #[inline(always)]
  pub(crate) fn xor_bytes(&mut self, data: &[u8]) {
    debug_assert!(data.len() <= STATE_BYTES);
    let (chunks, tail) = data.as_chunks::<8>();
    for (lane, chunk) in self.lanes.iter_mut().zip(chunks) {
      *lane ^= u64::from_le_bytes(*chunk);
    }
    let base = chunks.len() * 8;
    for (i, &byte) in tail.iter().enumerate() {
      self.xor_byte(base + i, byte);
    }
  }

  /// Copy the front `out.len()` bytes of the state into `out`.
  #[inline(always)]
  pub(crate) fn copy_out(&self, out: &mut [u8]) {
    debug_assert!(out.len() <= STATE_BYTES);
    let (chunks, tail) = out.as_chunks_mut::<8>();
    for (chunk, lane) in chunks.iter_mut().zip(&self.lanes) {
      *chunk = lane.to_le_bytes();
    }
    if !tail.is_empty() {
      let bytes = self.lanes[chunks.len()].to_le_bytes();
      tail.copy_from_slice(&bytes[..tail.len()]);
    }
  }

  #[cfg(test)]
  pub(crate) fn lanes(&self) -> &[u64; LANES] {
    &self.lanes
  }
}

/// A finalized sponge with rate `RATE` bytes, ready to squeeze.
pub(crate) struct Sponge<const RATE: usize> {
  state: KeccakState,
}

impl<const RATE: usize> Sponge<RATE> {
  const VALID_RATE: () = assert!(RATE > 0 && RATE < STATE_BYTES && RATE % 8 == 0);

  /// Absorb all of `data`, then apply `suffix` and multi-rate padding.
  pub(crate) fn absorb(data: &[u8], suffix: u8) -> Self {
    let () = Self::VALID_RATE;
    let mut state = KeccakState::default();

    let (blocks, rest) = data.as_chunks::<RATE>();
    for block in blocks {
      state.xor_bytes(block);
      state.permute();
    }
    state.xor_bytes(rest);

    let pad = rest.len();
    state.xor_byte(pad, suffix);
    // The suffix's top bit would collide with the final padding bit.
    if suffix & 0x80 != 0 && pad == RATE - 1 {
      state.permute();
    }
    state.xor_byte(RATE - 1, PAD_LAST);
    state.permute();

    Self { state }
  }

  /// Fill `out`, permuting between rate-sized blocks.
  pub(crate) fn squeeze(mut self, out: &mut [u8]) {
    for (i, block) in out.chunks_mut(RATE).enumerate() {
      if i != 0 {
        self.state.permute();
      }
      self.state.copy_out(block);
    }
  }

  #[cfg(test)]
  pub(crate) fn state(&self) -> &KeccakState {
    &self.state
  }
}

/// Run the full sponge: absorb `data` under `suffix`, squeeze into `out`.
#[inline]
pub(crate) fn sponge<const RATE: usize>(data: &[u8], suffix: u8, out: &mut [u8]) {
  Sponge::<RATE>::absorb(data, suffix).squeeze(out);
}
