// Hash checking core
// Digest computation and file-to-hash comparison

pub mod compare;
pub mod error;
pub mod hash;
pub mod path_utils;

// Re-export commonly used types for convenience
pub use compare::{CompareEngine, Mismatch, Mismatches};
pub use error::CheckHashError;
pub use hash::{bytes_to_hex, HashComputer, HashRegistry, HashResult, Hasher};
