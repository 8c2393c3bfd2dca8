use keccak256::{
  ArgumentError, keccak256, keccak256_hex,
  binding::{HashOutput, Value, keccak_hash},
};

#[test]
fn default_output_is_hex() {
  let out = keccak_hash(&[Value::from("abc")]).unwrap();
  assert_eq!(out, HashOutput::Hex(keccak256_hex(b"abc")));
  assert_eq!(
    out.as_bytes(),
    b"4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
  );
}

#[test]
fn raw_flag_returns_digest_bytes() {
  let out = keccak_hash(&[Value::from(&b"abc"[..]), Value::Bool(true)]).unwrap();
  assert_eq!(out, HashOutput::Raw(keccak256(b"abc")));
  assert_eq!(out.as_bytes().len(), 32);

  let out = keccak_hash(&[Value::from("abc"), Value::Bool(false)]).unwrap();
  assert!(matches!(out, HashOutput::Hex(_)));
}

#[test]
fn raw_flag_is_coerced_from_scalars() {
  let data = Value::from("");
  let cases = [
    (Value::Int(1), true),
    (Value::Int(0), false),
    (Value::Float(0.5), true),
    (Value::Float(0.0), false),
    (Value::from("1"), true),
    (Value::from("0"), false),
    (Value::from(""), false),
  ];
  for (flag, raw) in cases {
    let out = keccak_hash(&[data.clone(), flag.clone()]).unwrap();
    assert_eq!(matches!(out, HashOutput::Raw(_)), raw, "flag={flag:?}");
  }
}

#[test]
fn empty_bytes_are_hashed() {
  let out = keccak_hash(&[Value::Bytes(Vec::new())]).unwrap();
  assert_eq!(
    out.as_bytes(),
    b"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
  );
}

#[test]
fn rejects_wrong_arity() {
  assert_eq!(
    keccak_hash(&[]),
    Err(ArgumentError::Arity { given: 0, min: 1, max: 2 })
  );

  let three = [Value::from("a"), Value::Bool(true), Value::Bool(true)];
  let err = keccak_hash(&three).unwrap_err();
  assert_eq!(err, ArgumentError::Arity { given: 3, min: 1, max: 2 });
  assert_eq!(err.to_string(), "expects at most 2 arguments, 3 given");
}

#[test]
fn rejects_non_bytes_data() {
  for (value, name) in [
    (Value::Null, "null"),
    (Value::Bool(true), "bool"),
    (Value::Int(7), "int"),
    (Value::Float(1.0), "float"),
    (Value::Array(vec![Value::from("abc")]), "array"),
  ] {
    let err = keccak_hash(&[value]).unwrap_err();
    assert_eq!(err, ArgumentError::NotBytes { position: 1, found: name });
    assert_eq!(err.position(), Some(1));
  }
}

#[test]
fn rejects_non_bool_flag() {
  for (flag, name) in [(Value::Null, "null"), (Value::Array(Vec::new()), "array")] {
    let err = keccak_hash(&[Value::from("abc"), flag]).unwrap_err();
    assert_eq!(err, ArgumentError::NotBool { position: 2, found: name });
  }
}

#[test]
fn data_is_validated_before_flag() {
  let err = keccak_hash(&[Value::Int(1), Value::Null]).unwrap_err();
  assert_eq!(err.position(), Some(1));
}
