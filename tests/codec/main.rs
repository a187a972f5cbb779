//! End-to-end codec tests for `gct-rs`

mod roundtrip;
