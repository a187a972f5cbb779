//! This crate provides core data types and codec support for the `gct-rs` project.
//!
//! # File Format
//!
//! - **GCT**: texture containers holding a 32-byte header and two planes of
//!   block-compressed data, a color plane and an alpha plane. Blocks are
//!   laid out in 8x8 super-tile order with big-endian endpoint colors, the
//!   format a `GameCube`-era GPU consumes directly.
//!
//! # Examples
//!
//! ```rust
//! use gct_types::file::gct::{self, Header, Rgba, SUPPORTED_FLAGS};
//!
//! // Encode an 8x8 opaque white image
//! let header = Header::new(8, 8, SUPPORTED_FLAGS).unwrap();
//! let pixels = vec![Rgba::new(255, 255, 255, 255); header.pixel_count()];
//! let file = gct::encode(&header, &pixels).unwrap();
//! assert_eq!(file.len(), Header::SIZE + header.encoded_size());
//!
//! // And decode it again
//! let decoded = gct::decode(&file).unwrap();
//! assert_eq!(decoded.pixels()[0], Rgba::new(255, 255, 255, 255));
//! ```

pub mod file;
pub mod prelude;

// Re-export commonly used file types at crate root for convenience
pub use file::{GctError, GctFile, GctHeader, Rgba, str_error};
