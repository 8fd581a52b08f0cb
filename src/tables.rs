//! Const-fn CRC-64 lookup table generation.
//!
//! Tables are computed with `const fn` and embedded in the binary as
//! `static`s: built once, immutable, and shared by every hasher with no
//! locking. Table 0 drives the byte-at-a-time step; the 16×256 extension
//! drives the slice-by-16 kernel.

// SAFETY: All array indexing in this module uses bounded loop indices
// (0..256, 0..N). Clippy cannot prove this in const fn contexts, but the
// bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// CRC-64-ECMA-182 polynomial (0x42F0E1EBA9EA3693) in reflected form.
/// Used by XZ Utils, 7-Zip, and PostgreSQL.
pub const POLYNOMIAL: u64 = 0xC96C_5795_D787_0F42;

/// Generate a single CRC-64 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial: start with the
/// byte value, then for each of 8 steps shift right, folding in the
/// polynomial whenever the low bit was set.
#[must_use]
pub const fn table_entry(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 8 CRC-64 lookup tables for slice-by-8 computation.
#[cfg(test)]
#[must_use]
pub const fn generate_tables_8(poly: u64) -> [[u64; 256]; 8] {
  let mut tables = [[0u64; 256]; 8];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Generate 16 CRC-64 lookup tables for slice-by-16 computation.
///
/// Table `k` holds the CRC contribution of a byte `k` positions deep in the
/// 16-byte block: `t[k][i] = t[0][t[k-1][i] & 0xFF] ^ (t[k-1][i] >> 8)`.
#[must_use]
pub const fn generate_tables_16(poly: u64) -> [[u64; 256]; 16] {
  let mut tables = [[0u64; 256]; 16];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 16 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}
