//! Prelude module for `gct_internal`.
//!
//! This module provides a convenient way to import commonly used types and
//! functions.
//!
//! # Examples
//!
//! ```rust
//! use gct_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let header = GctHeader::new(16, 16, SUPPORTED_FLAGS).unwrap();
//! let pixels = vec![Rgba::default(); header.pixel_count()];
//! let file = encode(&header, &pixels).unwrap();
//! assert_eq!(decoded_size(&file).unwrap(), header.decoded_size());
//! ```

// Re-export everything from gct_types::prelude
#[doc(inline)]
pub use gct_types::prelude::*;

// Re-export the entire gct_types module for advanced usage
#[doc(inline)]
pub use gct_types;
