//! File system utilities
//!
//! - [`atomic`] - Temp-and-rename writes for the serialized output
//! - [`dirs`] - Directory creation

pub mod atomic;
pub mod dirs;

pub use atomic::atomic_write;
pub use dirs::ensure_dir;
