//! Table-driven CRC-64 kernels (slice-by-8 and slice-by-16).
//!
//! Slice-by-N processes N bytes per iteration using N precomputed lookup
//! tables. Each table holds the CRC contribution of a single byte at a
//! specific position in the block. The current CRC is XORed into the first
//! bytes of the block, then N table lookups are combined with XOR.
//!
//! The tables are const-evaluated into `static`s from the fixed polynomial:
//! computed once at compile time, never mutated, and safe for concurrent
//! reads from any number of hashers.

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - table indices use `& 0xFF` (0..255) or a final `>> 56` byte extraction
#![allow(clippy::indexing_slicing)]

use crate::tables::{POLYNOMIAL, generate_tables_16};

/// Slice-by-16 tables for the ECMA-182 polynomial (computed at compile time).
static TABLES_16: [[u64; 256]; 16] = generate_tables_16(POLYNOMIAL);

/// Update the raw CRC state with `data` using the slice-by-16 kernel.
///
/// `crc` is the pre-inverted register; the caller applies the final XOR.
#[inline]
#[must_use]
pub(crate) fn update(crc: u64, data: &[u8]) -> u64 {
  slice16_64(crc, data, &TABLES_16)
}

/// Fold a single byte into the raw CRC state.
///
/// This is the standard reflected table-driven step:
/// `crc = table[(crc ^ b) & 0xFF] ^ (crc >> 8)`.
#[cfg(test)]
#[inline]
#[must_use]
pub(crate) fn update_byte(crc: u64, byte: u8) -> u64 {
  TABLES_16[0][((crc ^ byte as u64) & 0xFF) as usize] ^ (crc >> 8)
}

/// Update CRC-64 state using the slice-by-8 algorithm.
///
/// Processes 8 bytes per iteration using 8 lookup tables.
#[cfg(test)]
#[inline]
pub(crate) fn slice8_64(mut crc: u64, data: &[u8], tables: &[[u64; 256]; 8]) -> u64 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let val = u64::from_le_bytes(*chunk) ^ crc;

    crc = tables[7][(val & 0xFF) as usize]
      ^ tables[6][((val >> 8) & 0xFF) as usize]
      ^ tables[5][((val >> 16) & 0xFF) as usize]
      ^ tables[4][((val >> 24) & 0xFF) as usize]
      ^ tables[3][((val >> 32) & 0xFF) as usize]
      ^ tables[2][((val >> 40) & 0xFF) as usize]
      ^ tables[1][((val >> 48) & 0xFF) as usize]
      ^ tables[0][(val >> 56) as usize];
  }

  // Process remaining bytes (0-7) byte-at-a-time
  for &byte in remainder {
    let index = ((crc ^ (byte as u64)) & 0xFF) as usize;
    crc = tables[0][index] ^ (crc >> 8);
  }

  crc
}

/// Update CRC-64 state using the slice-by-16 algorithm.
///
/// Processes 16 bytes per iteration (2× the CRC width in bytes).
#[inline]
fn slice16_64(mut crc: u64, data: &[u8], tables: &[[u64; 256]; 16]) -> u64 {
  let (chunks8, remainder) = data.as_chunks::<8>();
  let mut pairs = chunks8.chunks_exact(2);

  for pair in pairs.by_ref() {
    let a = u64::from_le_bytes(pair[0]) ^ crc;
    let b = u64::from_le_bytes(pair[1]);

    crc = tables[15][(a & 0xFF) as usize]
      ^ tables[14][((a >> 8) & 0xFF) as usize]
      ^ tables[13][((a >> 16) & 0xFF) as usize]
      ^ tables[12][((a >> 24) & 0xFF) as usize]
      ^ tables[11][((a >> 32) & 0xFF) as usize]
      ^ tables[10][((a >> 40) & 0xFF) as usize]
      ^ tables[9][((a >> 48) & 0xFF) as usize]
      ^ tables[8][(a >> 56) as usize]
      ^ tables[7][(b & 0xFF) as usize]
      ^ tables[6][((b >> 8) & 0xFF) as usize]
      ^ tables[5][((b >> 16) & 0xFF) as usize]
      ^ tables[4][((b >> 24) & 0xFF) as usize]
      ^ tables[3][((b >> 32) & 0xFF) as usize]
      ^ tables[2][((b >> 40) & 0xFF) as usize]
      ^ tables[1][((b >> 48) & 0xFF) as usize]
      ^ tables[0][(b >> 56) as usize];
  }

  // Handle an odd 8-byte tail
  if let [chunk] = pairs.remainder() {
    let val = u64::from_le_bytes(*chunk) ^ crc;
    crc = tables[7][(val & 0xFF) as usize]
      ^ tables[6][((val >> 8) & 0xFF) as usize]
      ^ tables[5][((val >> 16) & 0xFF) as usize]
      ^ tables[4][((val >> 24) & 0xFF) as usize]
      ^ tables[3][((val >> 32) & 0xFF) as usize]
      ^ tables[2][((val >> 40) & 0xFF) as usize]
      ^ tables[1][((val >> 48) & 0xFF) as usize]
      ^ tables[0][(val >> 56) as usize];
  }

  // Process remaining bytes (< 8) byte-at-a-time
  for &byte in remainder {
    let index = ((crc ^ (byte as u64)) & 0xFF) as usize;
    crc = tables[0][index] ^ (crc >> 8);
  }

  crc
}
