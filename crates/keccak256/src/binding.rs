//! Host-call adapter for `keccak_hash(data, raw_output = false)`.
//!
//! Scripting hosts hand over loosely-typed argument lists. [`keccak_hash`]
//! checks arity and types up front and only then runs the hash, so a rejected
//! call never touches the core.

use alloc::vec::Vec;

use traits::ArgumentError;

use crate::{
  hex::HexDigest,
  keccak256::{Keccak256, OUTPUT_SIZE},
};

const MIN_ARGS: usize = 1;
const MAX_ARGS: usize = 2;

/// A dynamically-typed host value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  Bytes(Vec<u8>),
  Array(Vec<Value>),
}

impl Value {
  /// Host type name, as reported in argument errors.
  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    match self {
      Self::Null => "null",
      Self::Bool(_) => "bool",
      Self::Int(_) => "int",
      Self::Float(_) => "float",
      Self::Bytes(_) => "bytes",
      Self::Array(_) => "array",
    }
  }

  /// Scalar-to-bool coercion. `None` for values with no boolean reading.
  ///
  /// Zero numbers, empty bytes and the single byte `"0"` are false; every
  /// other scalar is true.
  ///
  /// `Null` has no boolean reading here. Lenient hosts that quietly turn a null
  /// argument into `false` (a behavior PHP deprecated in 8.1) are not
  /// followed: a null `raw_output` is rejected with
  /// [`ArgumentError::NotBool`].
  #[must_use]
  pub fn coerce_bool(&self) -> Option<bool> {
    match self {
      Self::Bool(b) => Some(*b),
      Self::Int(i) => Some(*i != 0),
      Self::Float(f) => Some(*f != 0.0),
      Self::Bytes(b) => Some(!(b.is_empty() || b.as_slice() == b"0")),
      Self::Null | Self::Array(_) => None,
    }
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Self::Bool(b)
  }
}

impl From<i64> for Value {
  fn from(i: i64) -> Self {
    Self::Int(i)
  }
}

impl From<f64> for Value {
  fn from(f: f64) -> Self {
    Self::Float(f)
  }
}

impl From<&[u8]> for Value {
  fn from(b: &[u8]) -> Self {
    Self::Bytes(b.to_vec())
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Self::Bytes(s.as_bytes().to_vec())
  }
}

impl From<Vec<u8>> for Value {
  fn from(b: Vec<u8>) -> Self {
    Self::Bytes(b)
  }
}

/// Result of a successful `keccak_hash` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashOutput {
  /// The 32-byte digest, when `raw_output` is true.
  Raw([u8; OUTPUT_SIZE]),
  /// The 64-character lowercase hex digest (default).
  Hex(HexDigest),
}

impl HashOutput {
  /// Bytes to hand back to the host: the raw digest or the ASCII hex string.
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Self::Raw(raw) => raw.as_slice(),
      Self::Hex(hex) => hex.as_bytes().as_slice(),
    }
  }
}

/// Validate `args` as `(data: bytes, raw_output: bool = false)` and hash.
///
/// # Errors
///
/// - [`ArgumentError::Arity`] unless one or two arguments are given.
/// - [`ArgumentError::NotBytes`] if the first argument is not [`Value::Bytes`].
/// - [`ArgumentError::NotBool`] if the second argument is `Null` or an `Array`.
///
/// # Examples
///
/// ```
/// use keccak256::binding::{HashOutput, Value, keccak_hash};
///
/// let out = keccak_hash(&[Value::from("abc")])?;
/// assert!(matches!(out, HashOutput::Hex(_)));
/// assert_eq!(out.as_bytes().len(), 64);
///
/// let raw = keccak_hash(&[Value::from("abc"), Value::Bool(true)])?;
/// assert_eq!(raw, HashOutput::Raw(keccak256::keccak256(b"abc")));
/// # Ok::<(), keccak256::ArgumentError>(())
/// ```
pub fn keccak_hash(args: &[Value]) -> Result<HashOutput, ArgumentError> {
  let (data, flag) = match args {
    [data] => (data, None),
    [data, flag] => (data, Some(flag)),
    _ => {
      return Err(ArgumentError::Arity {
        given: args.len(),
        min: MIN_ARGS,
        max: MAX_ARGS,
      });
    }
  };

  let Value::Bytes(data) = data else {
    return Err(ArgumentError::NotBytes {
      position: 1,
      found: data.type_name(),
    });
  };

  let raw_output = match flag {
    None => false,
    Some(flag) => flag.coerce_bool().ok_or(ArgumentError::NotBool {
      position: 2,
      found: flag.type_name(),
    })?,
  };

  Ok(if raw_output {
    HashOutput::Raw(Keccak256::hash(data))
  } else {
    HashOutput::Hex(Keccak256::hex(data))
  })
}
