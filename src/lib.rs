#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `gct-rs` encodes and decodes GCT texture files: block-compressed RGBA
//! images stored as a color plane and an alpha plane in the super-tiled
//! big-endian layout a `GameCube`-era GPU reads directly.
//!
pub use gct_internal::*;
