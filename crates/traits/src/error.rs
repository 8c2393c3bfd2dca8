//! Error types for the host-call boundary.
//!
//! Hash cores are total over byte input and never fail. The only failure
//! surface is a host binding receiving a call it cannot forward: too many or
//! too few arguments, or an argument of the wrong type. These are rejected
//! before any hashing happens.

use core::fmt;

/// A host call was rejected during argument validation.
///
/// Positions are 1-based, matching how host runtimes number arguments.
///
/// # Examples
///
/// ```
/// use traits::ArgumentError;
///
/// let err = ArgumentError::NotBytes { position: 1, found: "array" };
/// assert_eq!(err.to_string(), "argument #1 must be of type bytes, array given");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ArgumentError {
  /// The number of arguments is outside `min..=max`.
  Arity {
    /// Arguments actually passed.
    given: usize,
    /// Fewest accepted arguments.
    min: usize,
    /// Most accepted arguments.
    max: usize,
  },
  /// A byte-sequence argument received some other type.
  NotBytes {
    /// 1-based argument position.
    position: usize,
    /// Host type name of the rejected value.
    found: &'static str,
  },
  /// A boolean argument received a value that cannot be coerced to `bool`.
  NotBool {
    /// 1-based argument position.
    position: usize,
    /// Host type name of the rejected value.
    found: &'static str,
  },
}

impl ArgumentError {
  /// 1-based position of the offending argument, if the error concerns one.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> Option<usize> {
    match *self {
      Self::Arity { .. } => None,
      Self::NotBytes { position, .. } | Self::NotBool { position, .. } => Some(position),
    }
  }
}

impl fmt::Display for ArgumentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::Arity { given, min, .. } if given < min => {
        let noun = if min == 1 { "argument" } else { "arguments" };
        write!(f, "expects at least {min} {noun}, {given} given")
      }
      Self::Arity { given, max, .. } => {
        let noun = if max == 1 { "argument" } else { "arguments" };
        write!(f, "expects at most {max} {noun}, {given} given")
      }
      Self::NotBytes { position, found } => {
        write!(f, "argument #{position} must be of type bytes, {found} given")
      }
      Self::NotBool { position, found } => {
        write!(f, "argument #{position} must be of type bool, {found} given")
      }
    }
  }
}

impl core::error::Error for ArgumentError {}
