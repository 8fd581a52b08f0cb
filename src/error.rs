//! Error types.
//!
//! CRC computation itself is a pure, total transform; the only fallible
//! operation is a ranged update whose offset/length fall outside the
//! supplied buffer.

use core::fmt;

/// A ranged update was requested outside the bounds of its buffer.
///
/// Returned by [`Crc64::update_range`](crate::Crc64::update_range) when
/// `offset + len` overflows or exceeds the buffer length. The hasher state
/// is left untouched when this error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeError {
  offset: usize,
  len: usize,
  buffer_len: usize,
}

impl RangeError {
  #[inline]
  #[must_use]
  pub(crate) const fn new(offset: usize, len: usize, buffer_len: usize) -> Self {
    Self { offset, len, buffer_len }
  }

  /// Offset of the rejected range.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  /// Length of the rejected range.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Length of the buffer the range was applied to.
  #[inline]
  #[must_use]
  pub const fn buffer_len(&self) -> usize {
    self.buffer_len
  }
}

impl fmt::Display for RangeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "byte range at offset {} with length {} exceeds buffer of {} bytes",
      self.offset, self.len, self.buffer_len
    )
  }
}

impl core::error::Error for RangeError {}
