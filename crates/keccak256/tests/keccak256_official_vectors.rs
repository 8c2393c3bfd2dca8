use keccak256::{Digest, Keccak256, RATE, keccak256, keccak256_hex};

fn pattern(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i % 251) as u8).collect()
}

fn check(name: &str, input: &[u8], expected: &str) {
  assert_eq!(
    keccak256_hex(input).as_str(),
    expected,
    "{name} vector mismatch (len={})",
    input.len()
  );
  assert_eq!(hex::encode(Keccak256::digest(input)), expected, "{name} raw/hex disagree");
}

#[test]
fn keccak256_short_vectors() {
  check(
    "empty",
    b"",
    "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
  );
  check(
    "abc",
    b"abc",
    "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45",
  );
  check(
    "a",
    b"a",
    "3ac225168df54212a25c1c01fd35bebfea408fdac2e31ddd6f80a4bbf9a5f1cb",
  );
  check(
    "zero-byte",
    &[0u8],
    "bc36789e7a1e281436464229828f817d6612f7b477d66591ff96a9e064bcc98a",
  );
  check(
    "quick-brown-fox",
    b"The quick brown fox jumps over the lazy dog",
    "4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15",
  );
}

#[test]
fn keccak256_rate_boundary_vectors() {
  let cases: [(usize, &str); 4] = [
    (RATE - 1, "cbdfd9dee5faad3818d6b06f95a219fd290b0e1706f6a82e5a595b9ce9faca62"),
    (RATE, "7ce759f1ab7f9ce437719970c26b0a66ff11fe3e38e17df89cf5d29c7d7f807e"),
    (RATE + 1, "ac73d4fae68b8453f764007c1a20ce95994187861f0c3227a3a8e99a73a3b1db"),
    (2 * RATE, "8e2476e65823b24d96ebe239f2c1534cdf763e689e2410c3b1cb0c74e6177bfc"),
  ];
  for (len, expected) in cases {
    check("rate-boundary", &pattern(len), expected);
  }

  check(
    "zero-block",
    &[0u8; RATE],
    "3a5912a7c5faa06ee4fe906253e339467a9ce87d533c65be3c15cb231cdb25f9",
  );
}

#[test]
fn keccak256_rate_boundary_digests_are_distinct() {
  let digests: Vec<[u8; 32]> = [RATE - 1, RATE, RATE + 1, 2 * RATE]
    .into_iter()
    .map(|len| keccak256(&pattern(len)))
    .collect();
  for (i, a) in digests.iter().enumerate() {
    for b in &digests[i + 1..] {
      assert_ne!(a, b);
    }
  }
}
