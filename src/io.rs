//! `std::io` adapters for transparent checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap any reader or writer and
//! fold every byte that passes through into a hasher, so checksumming a
//! stream costs no extra pass over the data.

use std::io::{self, IoSlice, IoSliceMut, Read, Write};
use std::path::Path;

use crate::checksum::Checksum;
use crate::crc64::Crc64;

/// A reader that computes a checksum of all data read through it.
///
/// # Example
///
/// ```rust
/// use std::io::Read;
///
/// use crc64::{Checksum, Crc64};
///
/// let data = b"hello world";
/// let mut reader = Crc64::reader(&data[..]);
/// let mut buf = Vec::new();
/// reader.read_to_end(&mut buf).unwrap();
///
/// assert_eq!(reader.crc(), Crc64::checksum(data));
/// ```
#[derive(Debug)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  /// Wrap `inner`, starting the checksum from the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Wrap `inner`, resuming the checksum from a previous value.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// The checksum of all data read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Shared access to the wrapped reader.
  #[inline]
  #[must_use]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  /// Mutable access to the wrapped reader.
  ///
  /// Reading through this reference bypasses the hasher.
  #[inline]
  #[must_use]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }

  /// Consume the adapter, returning the wrapped reader.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> R {
    self.inner
  }

  /// Consume the adapter, returning the wrapped reader and the hasher.
  #[inline]
  #[must_use]
  pub fn into_parts(self) -> (R, C) {
    (self.inner, self.hasher)
  }
}

impl<R: Read, C: Checksum> Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(filled) = buf.get(..n) {
      self.hasher.update(filled);
    }
    Ok(n)
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    // Replay the filled prefix across the buffers in order.
    let mut remaining = n;
    for buf in bufs.iter() {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(filled) = buf.get(..take) {
        self.hasher.update(filled);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// A writer that computes a checksum of all data written through it.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
///
/// use crc64::{Checksum, Crc64};
///
/// let mut writer = Crc64::writer(Vec::new());
/// writer.write_all(b"hello world").unwrap();
///
/// assert_eq!(writer.crc(), Crc64::checksum(b"hello world"));
/// assert_eq!(writer.into_inner(), b"hello world");
/// ```
#[derive(Debug)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  /// Wrap `inner`, starting the checksum from the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Wrap `inner`, resuming the checksum from a previous value.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// The checksum of all data written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Shared access to the wrapped writer.
  #[inline]
  #[must_use]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  /// Mutable access to the wrapped writer.
  ///
  /// Writing through this reference bypasses the hasher.
  #[inline]
  #[must_use]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }

  /// Consume the adapter, returning the wrapped writer.
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> W {
    self.inner
  }

  /// Consume the adapter, returning the wrapped writer and the hasher.
  #[inline]
  #[must_use]
  pub fn into_parts(self) -> (W, C) {
    (self.inner, self.hasher)
  }
}

impl<W: Write, C: Checksum> Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(written) = buf.get(..n) {
      self.hasher.update(written);
    }
    Ok(n)
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    // Only the accepted prefix counts toward the checksum.
    let mut remaining = n;
    for buf in bufs {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(written) = buf.get(..take) {
        self.hasher.update(written);
      }
      remaining -= take;
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

/// Compute the CRC-64 of everything a reader yields.
///
/// Reads the stream to exhaustion through a [`ChecksumReader`].
pub fn crc64_of_reader<R: Read>(reader: R) -> io::Result<u64> {
  let mut reader = ChecksumReader::<_, Crc64>::new(reader);
  io::copy(&mut reader, &mut io::sink())?;
  Ok(reader.crc())
}

/// Compute the CRC-64 of a file's contents.
pub fn crc64_of_file<P: AsRef<Path>>(path: P) -> io::Result<u64> {
  let file = std::fs::File::open(path)?;
  crc64_of_reader(io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
  use std::io::{Cursor, Read, Write};
  use std::vec::Vec;

  use super::*;
  use crate::crc64::Crc64;

  /// Yields at most one byte per read call, to exercise short reads.
  struct TrickleReader<'a>(&'a [u8]);

  impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      match (self.0.split_first(), buf.first_mut()) {
        (Some((&byte, rest)), Some(slot)) => {
          *slot = byte;
          self.0 = rest;
          Ok(1)
        }
        _ => Ok(0),
      }
    }
  }

  const TEST_DATA: &[u8] = b"This is a test of the emergency broadcast system.";

  #[test]
  fn reader_tracks_all_bytes() {
    let mut reader = ChecksumReader::<_, Crc64>::new(Cursor::new(TEST_DATA));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();

    assert_eq!(out, TEST_DATA);
    assert_eq!(reader.crc(), 0x27DB_187F_C15B_BC72);
  }

  #[test]
  fn reader_handles_short_reads() {
    let mut reader = ChecksumReader::<_, Crc64>::new(TrickleReader(TEST_DATA));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();

    assert_eq!(out, TEST_DATA);
    assert_eq!(reader.crc(), Crc64::checksum(TEST_DATA));
  }

  #[test]
  fn reader_with_initial_resumes() {
    let (a, b) = TEST_DATA.split_at(20);
    let crc_a = Crc64::checksum(a);

    let mut reader = ChecksumReader::<_, Crc64>::with_initial(Cursor::new(b), crc_a);
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();

    assert_eq!(reader.crc(), Crc64::checksum(TEST_DATA));
  }

  #[test]
  fn reader_into_parts() {
    let mut reader = ChecksumReader::<_, Crc64>::new(Cursor::new(TEST_DATA));
    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();

    let (cursor, hasher) = reader.into_parts();
    assert_eq!(cursor.position(), TEST_DATA.len() as u64);
    assert_eq!(hasher.finalize(), Crc64::checksum(TEST_DATA));
  }

  #[test]
  fn writer_tracks_all_bytes() {
    let mut writer = ChecksumWriter::<_, Crc64>::new(Vec::new());
    writer.write_all(b"hello ").unwrap();
    writer.write_all(b"world").unwrap();
    writer.flush().unwrap();

    assert_eq!(writer.crc(), Crc64::checksum(b"hello world"));
    assert_eq!(writer.into_inner(), b"hello world");
  }

  #[test]
  fn writer_vectored() {
    let mut writer = ChecksumWriter::<_, Crc64>::new(Vec::new());
    let bufs = [IoSlice::new(b"hello "), IoSlice::new(b"world")];
    let n = writer.write_vectored(&bufs).unwrap();

    // Vec accepts everything in one call.
    assert_eq!(n, 11);
    assert_eq!(writer.crc(), Crc64::checksum(b"hello world"));
  }

  #[test]
  fn trait_constructors() {
    use crate::checksum::Checksum;

    let mut reader = Crc64::reader(Cursor::new(TEST_DATA));
    io::copy(&mut reader, &mut io::sink()).unwrap();
    assert_eq!(reader.crc(), Crc64::checksum(TEST_DATA));

    let mut writer = Crc64::writer(io::sink());
    writer.write_all(TEST_DATA).unwrap();
    assert_eq!(writer.crc(), Crc64::checksum(TEST_DATA));
  }

  #[test]
  fn of_reader() {
    let crc = crc64_of_reader(Cursor::new(b"123456789")).unwrap();
    assert_eq!(crc, 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn of_file() {
    let dir = std::env::temp_dir();
    let path = dir.join("crc64-io-test.bin");
    std::fs::write(&path, TEST_DATA).unwrap();

    let crc = crc64_of_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(crc, 0x27DB_187F_C15B_BC72);
  }

  #[test]
  fn of_file_missing() {
    let err = crc64_of_file("/nonexistent/crc64-io-test.bin").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
  }
}
