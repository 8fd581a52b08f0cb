//! The CRC-64 hasher type.

use crate::checksum::{Checksum, ChecksumCombine};
use crate::combine::{Gf2Matrix64, combine_crc64, shift8_matrix};
use crate::error::RangeError;
use crate::portable;
use crate::tables::POLYNOMIAL;

/// CRC-64 checksum (ECMA-182 polynomial, reflected).
///
/// Implements streaming CRC-64 computation over the parameter set used by
/// XZ Utils and 7-Zip: init and final XOR all-ones, input and output
/// reflected.
///
/// A hasher is single-owner: it is only mutated through `&mut self`, so the
/// type system rules out concurrent updates to one instance. To parallelize,
/// give each thread its own hasher and merge the results with
/// [`combine`](Crc64::combine). The lookup tables behind [`update`](Crc64::update)
/// are compile-time `static`s, shared read-only by all hashers.
///
/// # Example
///
/// ```rust
/// use crc64::Crc64;
///
/// assert_eq!(Crc64::checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
/// ```
#[derive(Clone, Debug)]
pub struct Crc64 {
  /// Current CRC state (pre-inverted - XOR applied on finalize).
  state: u64,
  /// Construction-time state, restored by `reset`.
  initial: u64,
}

impl Crc64 {
  /// Initial register value (all ones; finalizes to an external value of 0).
  const INIT: u64 = !0u64;
  const XOR_OUT: u64 = !0u64;

  /// Pre-computed shift-by-one-byte matrix for combine.
  const SHIFT8_MATRIX: Gf2Matrix64 = shift8_matrix(POLYNOMIAL);

  /// Create a hasher at the initial state.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state: Self::INIT,
      initial: Self::INIT,
    }
  }

  /// Create a hasher that resumes from a previously finalized CRC.
  ///
  /// `Crc64::resume(Crc64::checksum(a))` followed by `update(b)` finalizes
  /// to `Crc64::checksum(a || b)`.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u64) -> Self {
    Self {
      state: crc ^ Self::XOR_OUT,
      initial: crc ^ Self::XOR_OUT,
    }
  }

  /// Compute the CRC-64 of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u64 {
    portable::update(Self::INIT, data) ^ Self::XOR_OUT
  }

  /// Fold `data` into the running state, in order.
  ///
  /// The result is independent of how the input is chunked across calls:
  /// `update(a); update(b)` is equivalent to `update(a || b)`.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = portable::update(self.state, data);
  }

  /// Fold `len` bytes of `data` starting at `offset` into the running state.
  ///
  /// A zero-length range is a no-op. Fails with [`RangeError`] when
  /// `offset + len` overflows or exceeds `data.len()`; the hasher state is
  /// untouched in that case.
  #[inline]
  pub fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), RangeError> {
    let range = offset
      .checked_add(len)
      .and_then(|end| data.get(offset..end))
      .ok_or(RangeError::new(offset, len, data.len()))?;
    self.update(range);
    Ok(())
  }

  /// The externally visible CRC value (register XOR all-ones).
  ///
  /// Pure read; further updates are allowed.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u64 {
    self.state ^ Self::XOR_OUT
  }

  /// Restore the construction-time state.
  ///
  /// For hashers created with [`new`](Crc64::new), `finalize` returns 0
  /// after a reset.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  /// Combine two CRC-64 values: `crc(A || B)` from `crc(A)`, `crc(B)`, and
  /// `len(B)` in bytes.
  ///
  /// Runs in O(log `len_b`) time independent of the byte content; neither
  /// input is reprocessed. `len_b == 0` returns `crc_a` unchanged.
  #[inline]
  #[must_use]
  pub const fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    combine_crc64(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
  }

  /// Combine two hashers into a new one representing `A || B`.
  ///
  /// Neither input is mutated; the returned hasher finalizes to
  /// `combine(a.finalize(), b.finalize(), len_b)` and can keep absorbing
  /// data that follows `B`.
  #[inline]
  #[must_use]
  pub fn combine_hashers(a: &Self, b: &Self, len_b: usize) -> Self {
    Self::resume(Self::combine(a.finalize(), b.finalize(), len_b))
  }
}

impl Default for Crc64 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn new() -> Self {
    Crc64::new()
  }

  #[inline]
  fn with_initial(initial: u64) -> Self {
    Crc64::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc64::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    Crc64::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc64::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> u64 {
    Crc64::checksum(data)
  }
}

impl ChecksumCombine for Crc64 {
  #[inline]
  fn combine(crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    Crc64::combine(crc_a, crc_b, len_b)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc64 {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use super::*;

  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn check_string() {
    assert_eq!(Crc64::checksum(TEST_DATA), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn empty() {
    assert_eq!(Crc64::checksum(b""), 0);
  }

  #[test]
  fn incremental() {
    let mut h = Crc64::new();
    h.update(b"1234");
    h.update(b"56789");
    assert_eq!(h.finalize(), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn zero_length_update_is_noop() {
    let mut h = Crc64::new();
    h.update(b"1234");
    let before = h.finalize();
    h.update(b"");
    assert_eq!(h.finalize(), before);
  }

  #[test]
  fn resume() {
    let data = b"hello world";
    let (a, b) = data.split_at(6);

    let crc_a = Crc64::checksum(a);
    let mut h = Crc64::resume(crc_a);
    h.update(b);
    assert_eq!(h.finalize(), Crc64::checksum(data));
  }

  #[test]
  fn reset_returns_to_zero() {
    let mut h = Crc64::new();
    h.update(TEST_DATA);
    assert_ne!(h.finalize(), 0);

    h.reset();
    assert_eq!(h.finalize(), 0);

    h.update(b"This is a test of the emergency broadcast system.");
    assert_eq!(h.finalize(), 0x27DB_187F_C15B_BC72);
  }

  #[test]
  fn reset_restores_resumed_state() {
    let crc_a = Crc64::checksum(b"prefix");
    let mut h = Crc64::resume(crc_a);
    h.update(b"suffix");
    h.reset();
    assert_eq!(h.finalize(), crc_a);
  }

  #[test]
  fn update_range_selects_subrange() {
    let buf = b"12345678901";

    let mut ranged = Crc64::new();
    ranged.update_range(buf, 1, 9).unwrap();

    assert_eq!(ranged.finalize(), Crc64::checksum(b"234567890"));
  }

  #[test]
  fn update_range_out_of_bounds_leaves_state_unchanged() {
    let buf = b"123456789";

    let mut h = Crc64::new();
    h.update(b"prefix");
    let before = h.finalize();

    let err = h.update_range(buf, 4, 6).unwrap_err();
    assert_eq!(err.offset(), 4);
    assert_eq!(err.len(), 6);
    assert_eq!(err.buffer_len(), 9);
    assert_eq!(h.finalize(), before);

    // Overflowing offset + len must also be rejected, not wrap.
    assert!(h.update_range(buf, usize::MAX, 2).is_err());
    assert_eq!(h.finalize(), before);
  }

  #[test]
  fn update_range_zero_length() {
    let mut h = Crc64::new();
    h.update_range(b"abc", 3, 0).unwrap();
    assert_eq!(h.finalize(), 0);
  }

  #[test]
  fn combine_all_splits() {
    for split in 0..=TEST_DATA.len() {
      let (a, b) = TEST_DATA.split_at(split);
      let crc_a = Crc64::checksum(a);
      let crc_b = Crc64::checksum(b);
      let combined = Crc64::combine(crc_a, crc_b, b.len());
      assert_eq!(combined, Crc64::checksum(TEST_DATA), "failed at split {split}");
    }
  }

  #[test]
  fn combine_hashers_continues_stream() {
    let data = b"This is a test of the emergency broadcast system.";
    let (head, rest) = data.split_at(10);
    let (mid, tail) = rest.split_at(20);

    let mut a = Crc64::new();
    a.update(head);
    let mut b = Crc64::new();
    b.update(mid);

    let mut merged = Crc64::combine_hashers(&a, &b, mid.len());
    merged.update(tail);

    assert_eq!(merged.finalize(), Crc64::checksum(data));
    // Inputs are untouched.
    assert_eq!(a.finalize(), Crc64::checksum(head));
    assert_eq!(b.finalize(), Crc64::checksum(mid));
  }

  #[test]
  fn combine_with_large_length() {
    // A multi-megabyte zero suffix: combine must agree with actually
    // feeding the zeros through update.
    let len = 3 * 1024 * 1024 + 7;
    let crc_a = Crc64::checksum(b"header");
    let crc_zeros = {
      let mut h = Crc64::new();
      let block = [0u8; 4096];
      let mut remaining = len;
      while remaining > 0 {
        let n = remaining.min(block.len());
        h.update(&block[..n]);
        remaining -= n;
      }
      h.finalize()
    };

    let combined = Crc64::combine(crc_a, crc_zeros, len);

    let mut direct = Crc64::new();
    direct.update(b"header");
    let block = [0u8; 4096];
    let mut remaining = len;
    while remaining > 0 {
      let n = remaining.min(block.len());
      direct.update(&block[..n]);
      remaining -= n;
    }

    assert_eq!(combined, direct.finalize());
  }

  #[test]
  fn trait_surface() {
    let oneshot = <Crc64 as Checksum>::checksum(TEST_DATA);
    assert_eq!(oneshot, Crc64::checksum(TEST_DATA));

    let vectored = Crc64::checksum_vectored(&[b"1234", b"", b"56789"]);
    assert_eq!(vectored, oneshot);

    let mut h = <Crc64 as Checksum>::with_initial(0);
    h.update(TEST_DATA);
    assert_eq!(h.finalize(), oneshot);

    assert_eq!(<Crc64 as ChecksumCombine>::combine(oneshot, 0, 0), oneshot);
  }

  #[test]
  fn write_impl_feeds_hasher() {
    use std::io::Write;

    let mut h = Crc64::new();
    h.write_all(TEST_DATA).unwrap();
    h.flush().unwrap();
    assert_eq!(h.finalize(), 0x995D_C9BB_DF19_39FA);
  }
}
