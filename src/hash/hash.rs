// Hash computation module
// Provides the hash algorithm registry and file digest logic

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::error::CheckHashError;

/// Trait for hash algorithm implementations
pub trait Hasher {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash and return the result
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Get the output size in bytes
    fn output_size(&self) -> usize;
}

// Wrapper types for hash algorithms
use md5::{Digest as Md5Digest, Md5};
use sha1::{Digest as Sha1Digest, Sha1};
use sha2::{Digest as Sha2Digest, Sha224, Sha256, Sha384, Sha512};

// MD5 wrapper
pub struct Md5Wrapper(Md5);

impl Hasher for Md5Wrapper {
    fn update(&mut self, data: &[u8]) {
        Md5Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Md5Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        16 // 128 bits
    }
}

// SHA1 wrapper
pub struct Sha1Wrapper(Sha1);

impl Hasher for Sha1Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha1Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        20 // 160 bits
    }
}

// SHA-224 wrapper
pub struct Sha224Wrapper(Sha224);

impl Hasher for Sha224Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        28 // 224 bits
    }
}

// SHA-256 wrapper
pub struct Sha256Wrapper(Sha256);

impl Hasher for Sha256Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        32 // 256 bits
    }
}

// SHA-384 wrapper
pub struct Sha384Wrapper(Sha384);

impl Hasher for Sha384Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        48 // 384 bits
    }
}

// SHA-512 wrapper
pub struct Sha512Wrapper(Sha512);

impl Hasher for Sha512Wrapper {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Sha2Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        64 // 512 bits
    }
}

/// Registry for hash algorithms
pub struct HashRegistry;

impl HashRegistry {
    /// Canonical lowercase names of the supported algorithms, in a fixed order
    pub const ALGORITHM_NAMES: [&'static str; 6] =
        ["md5", "sha1", "sha224", "sha256", "sha384", "sha512"];

    /// Get a hasher instance for the specified algorithm
    ///
    /// The lookup is case-insensitive and accepts the dashed spellings
    /// (`sha-256`) alongside the canonical names. Anything else is an
    /// UnsupportedAlgorithm error; there is no default.
    pub fn get_hasher(algorithm: &str) -> Result<Box<dyn Hasher>, CheckHashError> {
        let alg_lower = algorithm.to_lowercase();

        match alg_lower.as_str() {
            "md5" => Ok(Box::new(Md5Wrapper(Md5Digest::new()))),
            "sha1" | "sha-1" => Ok(Box::new(Sha1Wrapper(Sha1Digest::new()))),
            "sha224" | "sha-224" => Ok(Box::new(Sha224Wrapper(Sha2Digest::new()))),
            "sha256" | "sha-256" => Ok(Box::new(Sha256Wrapper(Sha2Digest::new()))),
            "sha384" | "sha-384" => Ok(Box::new(Sha384Wrapper(Sha2Digest::new()))),
            "sha512" | "sha-512" => Ok(Box::new(Sha512Wrapper(Sha2Digest::new()))),
            _ => Err(CheckHashError::UnsupportedAlgorithm {
                algorithm: algorithm.to_string(),
            }),
        }
    }
}

/// Result of a hash computation
#[derive(Debug, Clone, serde::Serialize)]
pub struct HashResult {
    pub algorithm: String,
    pub hash: String, // hex-encoded, lowercase
    pub file_path: PathBuf,
}

/// Hash computer with streaming I/O
pub struct HashComputer {
    buffer_size: usize,
}

impl HashComputer {
    /// Create a new HashComputer with default buffer size (1MB)
    pub fn new() -> Self {
        Self {
            buffer_size: 1024 * 1024,
        }
    }

    /// Create a new HashComputer with custom buffer size
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    /// Compute the hash of a single file using streaming I/O
    ///
    /// The whole file is streamed through the hasher; digests depend on
    /// every byte, so there are no size-based shortcuts. The file handle
    /// is closed on every exit path, including errors.
    pub fn compute_hash(
        &self,
        path: &Path,
        algorithm: &str,
    ) -> Result<HashResult, CheckHashError> {
        let mut hasher = HashRegistry::get_hasher(algorithm)?;

        let mut file = File::open(path).map_err(|e| {
            CheckHashError::from_io_error(e, "reading", Some(path.to_path_buf()))
        })?;

        let mut buffer = vec![0u8; self.buffer_size];
        loop {
            let bytes_read = file.read(&mut buffer).map_err(|e| {
                CheckHashError::from_io_error(e, "reading", Some(path.to_path_buf()))
            })?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        let hash_bytes = hasher.finalize();
        let hash_hex = bytes_to_hex(&hash_bytes);

        Ok(HashResult {
            algorithm: algorithm.to_string(),
            hash: hash_hex,
            file_path: path.to_path_buf(),
        })
    }
}

impl Default for HashComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert bytes to a lowercase hexadecimal string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
