//! Core traits shared across the keccak256 workspace.
//!
//! This crate is `no_std` compatible and has zero dependencies.
//!
//! # Traits
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | One-shot cryptographic hash functions | Keccak-256 |
//!
//! # Error Types
//!
//! - [`ArgumentError`] - A host call was rejected before reaching a hash core
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod digest;
pub mod error;

pub use digest::Digest;
pub use error::ArgumentError;
