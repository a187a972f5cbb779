//! File type support for `gct-rs` project.

mod error;

pub mod gct;

// Re-export unified error type
pub use error::{GctError, str_error};

// Re-export main file types
pub use gct::{File as GctFile, Header as GctHeader, Rgba};
