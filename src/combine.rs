//! GF(2) matrix operations for CRC combination.
//!
//! When you have `crc(A)` and `crc(B)`, you can compute `crc(A || B)` without
//! reprocessing `A`. For reflected CRCs:
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! Appending one zero bit to the stream is a linear operation on the 64-bit
//! register over GF(2), so it can be represented as a 64×64 bit matrix.
//! Squaring that matrix composes the operator with itself, which lets the
//! multiplication by `x^(8*len(B))` be evaluated with square-and-multiply
//! over the byte length in O(log len(B)) steps.
//!
//! This works directly on finalized CRC values because `crc(empty) == 0`
//! for this parameter set, which makes the finalized CRC function linear.

// SAFETY: All array indexing in this module uses bounded loop indices
// (0..64). Clippy cannot prove this in const fn contexts, but the bounds
// are statically guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

/// A 64×64 GF(2) matrix represented as 64 u64 values.
///
/// Entry `i` is a column of the operator: the register that results from an
/// input with only bit `i` set. Matrix-vector multiplication is then the
/// XOR of the columns selected by the vector's set bits.
#[derive(Clone, Copy)]
pub(crate) struct Gf2Matrix64([u64; 64]);

impl Gf2Matrix64 {
  /// Multiply matrix by a vector.
  #[inline]
  #[must_use]
  pub(crate) const fn mul_vec(self, vec: u64) -> u64 {
    let mut result = 0u64;
    let mut i = 0;
    while i < 64 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// Multiply two matrices (self * other).
  #[must_use]
  pub(crate) const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u64; 64];
    let mut i = 0;
    while i < 64 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  /// Square the matrix (self * self).
  #[inline]
  #[must_use]
  pub(crate) const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// Generate the "shift by 1 bit" matrix for a reflected CRC-64 polynomial.
///
/// Appending one zero bit maps the register to
/// `(crc >> 1) ^ (poly if crc & 1 else 0)`:
/// - bit 0 of the input selects the polynomial column,
/// - bit j (j > 0) of the input lands on bit j-1 of the output.
#[must_use]
pub(crate) const fn shift1_matrix(poly: u64) -> Gf2Matrix64 {
  let mut m = [0u64; 64];
  m[0] = poly;
  let mut j = 1;
  while j < 64 {
    m[j] = 1 << (j - 1);
    j += 1;
  }
  Gf2Matrix64(m)
}

/// Generate the "shift by 8 bits" (one zero byte) matrix.
///
/// Squaring the shift-by-1 operator three times gives
/// x -> x^2 -> x^4 -> x^8.
#[must_use]
pub(crate) const fn shift8_matrix(poly: u64) -> Gf2Matrix64 {
  let shift1 = shift1_matrix(poly);
  let shift2 = shift1.square();
  let shift4 = shift2.square();

  shift4.square()
}

/// Combine two CRC-64 values.
///
/// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
///
/// # Arguments
///
/// * `crc_a` - CRC of the first part
/// * `crc_b` - CRC of the second part
/// * `len_b` - Length of the second part in bytes
/// * `shift8` - Pre-computed shift-by-one-byte matrix for the polynomial
///
/// # Algorithm
///
/// Square-and-multiply over the byte length: for each set bit of `len_b`
/// (in order of increasing position), apply the current operator to
/// `crc_a`; square the operator between bits. The bit length `8 * len_b`
/// is never formed, so arbitrarily large `len_b` cannot overflow.
#[must_use]
pub(crate) const fn combine_crc64(crc_a: u64, crc_b: u64, len_b: usize, shift8: Gf2Matrix64) -> u64 {
  if len_b == 0 {
    return crc_a;
  }

  let mut op = shift8;
  let mut crc = crc_a;
  let mut len = len_b;

  loop {
    if len & 1 != 0 {
      crc = op.mul_vec(crc);
    }
    len >>= 1;
    if len == 0 {
      break;
    }
    op = op.square();
  }

  crc ^ crc_b
}
