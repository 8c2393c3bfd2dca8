//! Fuzz target for host-call validation.
//!
//! Arbitrary argument lists must either hash successfully or fail with the
//! error the validation rules predict. Nothing may panic.

#![no_main]

use arbitrary::Arbitrary;
use keccak256::{
  ArgumentError, keccak256,
  binding::{HashOutput, Value, keccak_hash},
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Arg {
  Null,
  Bool(bool),
  Int(i64),
  Float(f64),
  Bytes(Vec<u8>),
  Array(Vec<u8>),
}

impl From<Arg> for Value {
  fn from(arg: Arg) -> Self {
    match arg {
      Arg::Null => Value::Null,
      Arg::Bool(b) => Value::Bool(b),
      Arg::Int(i) => Value::Int(i),
      Arg::Float(f) => Value::Float(f),
      Arg::Bytes(b) => Value::Bytes(b),
      Arg::Array(items) => Value::Array(items.into_iter().map(|b| Value::Int(i64::from(b))).collect()),
    }
  }
}

fuzz_target!(|args: Vec<Arg>| {
  let args: Vec<Value> = args.into_iter().map(Value::from).collect();

  match keccak_hash(&args) {
    Ok(output) => {
      let Some(Value::Bytes(data)) = args.first() else {
        panic!("accepted a call without leading bytes");
      };
      assert!(matches!(args.len(), 1 | 2));
      let raw = keccak256(data);
      match output {
        HashOutput::Raw(out) => assert_eq!(out, raw),
        HashOutput::Hex(hex) => assert_eq!(hex.as_str(), keccak256::HexDigest::encode(&raw).as_str()),
      }
    }
    Err(ArgumentError::Arity { given, .. }) => assert!(given == 0 || given > 2),
    Err(ArgumentError::NotBytes { position, .. }) => {
      assert_eq!(position, 1);
      assert!(!matches!(args.first(), Some(Value::Bytes(_))));
    }
    Err(ArgumentError::NotBool { position, .. }) => {
      assert_eq!(position, 2);
      assert!(matches!(args.get(1), Some(Value::Null | Value::Array(_))));
    }
    Err(err) => panic!("unexpected error: {err}"),
  }
});
