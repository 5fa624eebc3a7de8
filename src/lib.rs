// Library module for checkhash
// Re-exports the hash core for use in integration tests and external crates

pub mod hash;
