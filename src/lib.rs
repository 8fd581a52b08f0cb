//! CRC-64 checksums using the ECMA-182 polynomial (reflected), with an
//! O(log n) combine operation.
//!
//! # Parameters
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Width | 64 |
//! | Polynomial | 0x42F0E1EBA9EA3693 (reflected: 0xC96C5795D7870F42) |
//! | Initial value | 0xFFFFFFFFFFFFFFFF |
//! | Final XOR | 0xFFFFFFFFFFFFFFFF |
//! | Reflect input/output | Yes |
//!
//! # Example
//!
//! ```rust
//! use crc64::{Checksum, ChecksumCombine, Crc64};
//!
//! // One-shot computation
//! let data = b"123456789";
//! let crc = Crc64::checksum(data);
//! assert_eq!(crc, 0x995D_C9BB_DF19_39FA);
//!
//! // Streaming computation
//! let mut hasher = Crc64::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Combine CRCs of adjacent ranges without reprocessing bytes
//! let (a, b) = data.split_at(4);
//! let crc_a = Crc64::checksum(a);
//! let crc_b = Crc64::checksum(b);
//! assert_eq!(Crc64::combine(crc_a, crc_b, b.len()), crc);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature to drop the
//! I/O adapters:
//!
//! ```toml
//! [dependencies]
//! crc64 = { version = "0.1", default-features = false }
//! ```
//!
//! # Fallibility Discipline
//!
//! Non-test code denies `unwrap`, `expect`, and panicking indexing; the only
//! fallible operation, [`Crc64::update_range`], surfaces a [`RangeError`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
mod combine;
mod crc64;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
mod portable;
mod reference;
mod tables;

pub use checksum::{Checksum, ChecksumCombine};
pub use crc64::Crc64;
pub use error::RangeError;
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter, crc64_of_file, crc64_of_reader};
pub use tables::POLYNOMIAL;
