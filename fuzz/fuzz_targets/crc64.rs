//! Fuzz target for the CRC-64 hasher.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Incremental updates produce same result as one-shot
//! - Resume produces correct results
//! - Combine agrees with direct computation
//! - Ranged updates agree with plain updates on the same bytes

#![no_main]

use arbitrary::Arbitrary;
use crc64::Crc64;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Crc64::checksum(data);

  let (a, b) = data.split_at(split);
  let mut hasher = Crc64::new();
  hasher.update(a);
  hasher.update(b);
  let incremental = hasher.finalize();

  assert_eq!(oneshot, incremental, "incremental mismatch");

  let crc_a = Crc64::checksum(a);
  let mut resumed = Crc64::resume(crc_a);
  resumed.update(b);
  let resume_result = resumed.finalize();

  assert_eq!(oneshot, resume_result, "resume mismatch");

  let crc_b = Crc64::checksum(b);
  let combined = Crc64::combine(crc_a, crc_b, b.len());

  assert_eq!(oneshot, combined, "combine mismatch");

  let mut ranged = Crc64::new();
  ranged.update_range(data, 0, split).expect("in-bounds range");
  ranged
    .update_range(data, split, data.len() - split)
    .expect("in-bounds range");

  assert_eq!(oneshot, ranged.finalize(), "ranged update mismatch");

  // Out-of-bounds ranges must fail without disturbing state.
  let mut bounds = Crc64::new();
  bounds.update(data);
  let before = bounds.finalize();
  assert!(bounds.update_range(data, data.len(), 1).is_err());
  assert!(bounds.update_range(data, usize::MAX, 1).is_err());
  assert_eq!(bounds.finalize(), before);
});
