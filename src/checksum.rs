//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: incremental updates for large data
//! - **Parallelism**: combine operation for parallel chunk processing
//! - **Zero-cost**: inline-friendly, no allocation

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// Provides the core interface for checksum computation with support for
/// incremental updates and streaming data.
///
/// # Usage
///
/// ```rust
/// use crc64::{Checksum, Crc64};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc64::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc64::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes (8 for CRC-64).
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher that resumes from a previously finalized checksum.
  ///
  /// Useful for continuing a computation or for non-standard seeds.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally;
  /// the final checksum depends only on the concatenation of all updates.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each
  /// buffer in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// Does not consume the hasher; further updates are allowed (the result
  /// would then cover all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute a checksum transparently during I/O.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use std::fs::File;
  ///
  /// use crc64::{Checksum, Crc64};
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Crc64::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:016x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute a checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums that support parallel computation via combination.
///
/// The combine operation computes `crc(A || B)` from `crc(A)`, `crc(B)`, and
/// `len(B)` in O(log n) time, enabling parallel checksum computation:
///
/// 1. Split data into chunks
/// 2. Compute checksums in parallel (one hasher per thread)
/// 3. Combine results
///
/// # Usage
///
/// ```rust
/// use crc64::{Checksum, ChecksumCombine, Crc64};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(6);
///
/// let crc_a = Crc64::checksum(a);
/// let crc_b = Crc64::checksum(b);
///
/// assert_eq!(Crc64::combine(crc_a, crc_b, b.len()), Crc64::checksum(data));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)`.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
