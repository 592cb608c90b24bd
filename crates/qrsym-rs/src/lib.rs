//! Encoder core for QR Code Model 2 symbols (ISO/IEC 18004).
//!
//! Given Unicode text, raw bytes, or a hand-built list of data segments,
//! this crate selects the smallest symbol version (1 to 40) that carries
//! the payload, assembles the data bit stream, appends Reed-Solomon error
//! correction codewords over GF(2^8), lays everything onto the module
//! grid together with the function patterns, scores all eight mask
//! patterns, and returns the finished symbol as an immutable grid of dark
//! and light modules.
//!
//! Rendering is deliberately left to consumers: a [`QrCode`] exposes its
//! [`size`](QrCode::size) and a read-only [`get`](QrCode::get) accessor,
//! which is all an SVG, bitmap, or terminal back end needs.
//!
//! Simple operation:
//!
//! ```
//! use qrsym_rs::{EccLevel, QrCode};
//!
//! let qr = QrCode::encode_text("HELLO WORLD", EccLevel::Quartile).unwrap();
//! assert_eq!(qr.version().value(), 1);
//! assert_eq!(qr.size(), 21);
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let _dark = qr.get(x, y);
//!         // paint the module
//!     }
//! }
//! ```
//!
//! Manual operation over segments:
//!
//! ```
//! use qrsym_rs::{EccLevel, Mask, QrCode, Segment, Version};
//!
//! let segs = vec![
//!     Segment::make_alphanumeric("HELLO ")?,
//!     Segment::make_numeric("12345")?,
//! ];
//! let qr = QrCode::encode_segments_advanced(
//!     &segs,
//!     EccLevel::Medium,
//!     Version::new(2)?,
//!     Version::new(10)?,
//!     Some(Mask::new(3)),
//!     false,
//! )?;
//! assert_eq!(qr.mask().value(), 3);
//! # Ok::<(), qrsym_rs::QrError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bits;
mod blocks;
mod ecc;
mod encoder;
mod error;
mod gf256;
mod mask;
mod matrix;
mod mode;
mod penalty;
mod qr;
mod segment;
mod tables;
mod version;

pub use bits::BitBuffer;
pub use ecc::EccLevel;
pub use error::QrError;
pub use mask::Mask;
pub use mode::Mode;
pub use qr::QrCode;
pub use segment::Segment;
pub use version::Version;
