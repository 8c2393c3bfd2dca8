//! Keccak-f[1600] permutation.
//!
//! The state is 25 little-endian lanes addressed as `x + 5 * y`. All tables the
//! round function needs (round constants, rho rotations, pi destinations) are
//! evaluated at compile time, so a permutation call carries no generator state.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

pub(crate) const KECCAKF_ROUNDS: usize = 24;

/// Lanes in a 1600-bit state.
pub const LANES: usize = 25;

/// Round constants, one per round of Keccak-f[1600].
pub(crate) const RC: [u64; KECCAKF_ROUNDS] = round_constants();

/// Left-rotation applied to each source lane during rho.
pub(crate) const RHO: [u32; LANES] = rho_offsets();

/// Destination of each source lane under pi: `(x, y) -> (y, 2x + 3y)`.
pub(crate) const PI: [usize; LANES] = pi_destinations();

/// Round constants from the degree-8 LFSR `x^8 + x^6 + x^5 + x^4 + 1`.
///
/// The LFSR runs continuously across all rounds starting from `0x01`; each
/// round consumes seven steps and step `j` contributes bit `2^j - 1`.
const fn round_constants() -> [u64; KECCAKF_ROUNDS] {
  let mut out = [0u64; KECCAKF_ROUNDS];
  let mut lfsr: u8 = 0x01;
  let mut round = 0;
  while round < KECCAKF_ROUNDS {
    let mut rc = 0u64;
    let mut j = 0u32;
    while j < 7 {
      lfsr = (lfsr << 1) ^ if lfsr & 0x80 != 0 { 0x71 } else { 0 };
      if lfsr & 0x02 != 0 {
        rc |= 1u64 << ((1u32 << j) - 1);
      }
      j += 1;
    }
    out[round] = rc;
    round += 1;
  }
  out
}

/// Walks the 24-lane pi orbit from `(1, 0)`, accumulating the triangular
/// rotation offsets. Lane `(0, 0)` stays at zero.
const fn rho_offsets() -> [u32; LANES] {
  let mut out = [0u32; LANES];
  let (mut x, mut y) = (1usize, 0usize);
  let mut offset = 0u32;
  let mut step = 0u32;
  while step < 24 {
    offset += step + 1;
    out[x + 5 * y] = offset % 64;
    let next_y = (2 * x + 3 * y) % 5;
    x = y;
    y = next_y;
    step += 1;
  }
  out
}

const fn pi_destinations() -> [usize; LANES] {
  let mut out = [0usize; LANES];
  let mut i = 0;
  while i < LANES {
    let (x, y) = (i % 5, i / 5);
    out[i] = y + 5 * ((2 * x + 3 * y) % 5);
    i += 1;
  }
  out
}

/// Apply Keccak-f[1600] to `state` in place.
///
/// # Examples
///
/// ```
/// let mut state = [0u64; 25];
/// keccak256::keccakf1600(&mut state);
/// assert_eq!(state[0], 0xF1258F7940E1DDE7);
/// ```
#[inline]
pub fn keccakf1600(state: &mut [u64; LANES]) {
  for &rc in &RC {
    round(state, rc);
  }
}

#[inline(always)]
fn round(a: &mut [u64; LANES], rc: u64) {
  // θ
  let mut c = [0u64; 5];
  for (x, parity) in c.iter_mut().enumerate() {
    *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
  }
  for x in 0..5 {
    let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    for y in 0..5 {
      a[x + 5 * y] ^= d;
    }
  }

  // ρ + π
  let mut b = [0u64; LANES];
  for (i, &lane) in a.iter().enumerate() {
    b[PI[i]] = lane.rotate_left(RHO[i]);
  }

  // χ reads only from `b`, so every row is a snapshot.
  for y in 0..5 {
    let row = 5 * y;
    for x in 0..5 {
      a[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
    }
  }

  // ι
  a[0] ^= rc;
}
