//! Integration tests for pixfx crates.
//!
//! End-to-end checks across `pixfx-core`, `pixfx-ops` and `pixfx-io`:
//! decode, transform, encode.
