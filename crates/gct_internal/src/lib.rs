//! Internal crate for `gct-rs`.
//!
//! This crate composes the workspace members behind one façade and should
//! not be used directly; depend on `gct-rs` instead.
//!
//! # Examples
//!
//! ```rust
//! use gct_internal::prelude::*;
//!
//! // All commonly used types are available
//! let header = GctHeader::new(8, 8, SUPPORTED_FLAGS).unwrap();
//! ```

/// `use gct_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export gct_types for convenience
pub use gct_types;
