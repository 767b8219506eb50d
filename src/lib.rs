//! House construction crew library
//!
//! Re-exports modules for use by binaries and tools.

pub mod construction;
