//! Keccak-256 as specified by the original Keccak submission.
//!
//! Portable, `no_std`, pure Rust Keccak-f[1600] sponge with rate 136 bytes and
//! domain suffix `0x01`. This is the hash Ethereum calls `keccak256`; it is
//! **not** interchangeable with FIPS 202 SHA3-256.
//!
//! # Quick Start
//!
//! ```
//! use keccak256::{keccak256, keccak256_hex};
//!
//! let raw: [u8; 32] = keccak256(b"abc");
//! let hex = keccak256_hex(b"abc");
//! assert_eq!(hex.as_str(), "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45");
//! assert_eq!(raw[0], 0x4e);
//! ```
//!
//! # Modules
//!
//! - [`binding`] - Argument validation for host-runtime calls (`alloc`).
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | The `keccak256` binary (implies `alloc`) |
//! | `alloc` | Yes | Enables [`binding`] |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
pub mod binding;
mod hex;
mod keccak;
mod keccak256;
mod sponge;

pub use hex::{HEX_LEN, HexDigest};
pub use keccak::{LANES, keccakf1600};
pub use keccak256::{DOMAIN_SUFFIX, Keccak256, OUTPUT_SIZE, RATE, keccak256, keccak256_hex};
pub use sponge::{STATE_BYTES, lanes_from_bytes, lanes_to_bytes};
pub use traits::{ArgumentError, Digest};
