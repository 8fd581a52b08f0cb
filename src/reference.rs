//! Bitwise reference implementation.
//!
//! The canonical "source of truth" for CRC-64 computation: one bit at a
//! time, directly mirroring the polynomial-division definition. All
//! optimized paths (slice-by-N) must produce identical results.
//!
//! Intentionally slow (~8 operations per bit). Use for correctness
//! verification and as a test oracle, not for throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically
// guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::tables::POLYNOMIAL;

/// Bitwise CRC-64 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (0xC96C5795D7870F42 for ECMA-182)
/// * `init` - Initial register value (typically all-ones)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies the final XOR).
#[must_use]
pub const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions verify the reference implementation against known
// check values at compile time. If these fail, the build fails.

// Standard check value: "123456789" → 0x995DC9BBDF1939FA
const _: () = {
  let raw = crc64_bitwise(POLYNOMIAL, !0u64, b"123456789");
  assert!(raw ^ !0u64 == 0x995D_C9BB_DF19_39FA);
};

// 49-byte vector spanning several 8-byte blocks plus a remainder.
const _: () = {
  let raw = crc64_bitwise(POLYNOMIAL, !0u64, b"This is a test of the emergency broadcast system.");
  assert!(raw ^ !0u64 == 0x27DB_187F_C15B_BC72);
};

const _: () = {
  let raw = crc64_bitwise(POLYNOMIAL, !0u64, b"IHATEMATH");
  assert!(raw ^ !0u64 == 0x3920_E0F6_6B6E_E0C8);
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input() {
    // Empty input should return init; init XOR xorout is 0.
    let raw = crc64_bitwise(POLYNOMIAL, !0u64, &[]);
    assert_eq!(raw ^ !0u64, 0);
  }

  #[test]
  fn single_bytes_do_not_collide_with_zero() {
    for byte in 1u8..=255 {
      let raw = crc64_bitwise(POLYNOMIAL, !0u64, &[byte]);
      let zero = crc64_bitwise(POLYNOMIAL, !0u64, &[0]);
      assert_ne!(raw, zero, "byte {byte:#04x} collides with 0x00");
    }
  }

  #[test]
  fn incremental_matches_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = crc64_bitwise(POLYNOMIAL, !0u64, data);

    for split in 1..data.len() {
      let first = crc64_bitwise(POLYNOMIAL, !0u64, &data[..split]);
      let second = crc64_bitwise(POLYNOMIAL, first, &data[split..]);
      assert_eq!(second, oneshot, "incremental mismatch at split {split}");
    }
  }
}
