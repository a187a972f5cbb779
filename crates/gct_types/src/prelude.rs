//! Prelude module for `gct_types`.
//!
//! This module provides a convenient way to import commonly used types,
//! functions, and constants.
//!
//! # Examples
//!
//! ```rust
//! use gct_types::prelude::*;
//!
//! let header = GctHeader::new(8, 8, SUPPORTED_FLAGS).unwrap();
//! assert_eq!(header.encoded_size(), 64);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Error types
	GctError,

	// GCT types
	GctFile,
	GctHeader,
	Rgba,
	str_error,
};

// Codec entry points and flag constants
#[doc(inline)]
pub use crate::file::gct::{
	FLAG_ALPHA, FLAG_UNK01, SUPPORTED_FLAGS, decode, decode_into, decoded_size, encode,
	encode_into,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
