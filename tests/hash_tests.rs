// Tests for the digest engine
// Known vectors, streaming behavior and error kinds

use std::fs;
use std::io::Write;
use std::path::Path;

use checkhash::hash::{bytes_to_hex, CheckHashError, HashComputer, HashRegistry};

#[test]
fn test_compute_hash_sha256() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hello.txt");
    fs::write(&file, b"hello world").unwrap();

    let computer = HashComputer::new();
    let result = computer.compute_hash(&file, "sha256").unwrap();

    assert_eq!(result.algorithm, "sha256");
    assert_eq!(
        result.hash,
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    assert_eq!(result.file_path, file);
}

#[test]
fn test_compute_hash_md5() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hello.txt");
    fs::write(&file, b"hello world").unwrap();

    let computer = HashComputer::new();
    let result = computer.compute_hash(&file, "md5").unwrap();

    assert_eq!(result.hash, "5eb63bbbe01eeed093cb22bb8f5acdc3");
}

#[test]
fn test_compute_hash_sha1() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("hello.txt");
    fs::write(&file, b"hello world").unwrap();

    let computer = HashComputer::new();
    let result = computer.compute_hash(&file, "sha1").unwrap();

    assert_eq!(result.hash, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
}

#[test]
fn test_empty_file_digests() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty.bin");
    fs::write(&file, b"").unwrap();

    let computer = HashComputer::new();

    let sha256 = computer.compute_hash(&file, "sha256").unwrap();
    assert_eq!(
        sha256.hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );

    let md5 = computer.compute_hash(&file, "md5").unwrap();
    assert_eq!(md5.hash, "d41d8cd98f00b204e9800998ecf8427e");

    let sha1 = computer.compute_hash(&file, "sha1").unwrap();
    assert_eq!(sha1.hash, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn test_digest_lengths_per_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.bin");
    fs::write(&file, b"algorithm length check").unwrap();

    let computer = HashComputer::new();
    let expected_hex_lengths = [
        ("md5", 32),
        ("sha1", 40),
        ("sha224", 56),
        ("sha256", 64),
        ("sha384", 96),
        ("sha512", 128),
    ];

    for (algorithm, hex_len) in expected_hex_lengths {
        let result = computer.compute_hash(&file, algorithm).unwrap();
        assert_eq!(result.hash.len(), hex_len, "wrong length for {}", algorithm);
        assert!(result.hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(result.hash, result.hash.to_lowercase());
    }
}

#[test]
fn test_md5_and_sha256_differ() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.bin");
    fs::write(&file, b"same input, different digests").unwrap();

    let computer = HashComputer::new();
    let md5 = computer.compute_hash(&file, "md5").unwrap();
    let sha256 = computer.compute_hash(&file, "sha256").unwrap();

    assert_ne!(md5.hash, sha256.hash);
    assert_eq!(md5.hash.len(), 32);
    assert_eq!(sha256.hash.len(), 64);
}

#[test]
fn test_determinism_on_repeated_calls() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("stable.txt");
    fs::write(&file, b"repeatable content").unwrap();

    let computer = HashComputer::new();
    let first = computer.compute_hash(&file, "sha512").unwrap();
    let second = computer.compute_hash(&file, "sha512").unwrap();
    let third = computer.compute_hash(&file, "sha512").unwrap();

    assert_eq!(first.hash, second.hash);
    assert_eq!(second.hash, third.hash);
}

#[test]
fn test_streaming_past_buffer_size() {
    // File larger than the configured read buffer forces multiple
    // update calls; the digest must match a single-pass computation
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("large.bin");
    let mut handle = fs::File::create(&file).unwrap();
    let chunk = vec![b'a'; 1024];
    for _ in 0..100 {
        handle.write_all(&chunk).unwrap();
    }
    drop(handle);

    let small_buffer = HashComputer::with_buffer_size(512);
    let large_buffer = HashComputer::new();

    let streamed = small_buffer.compute_hash(&file, "sha256").unwrap();
    let single = large_buffer.compute_hash(&file, "sha256").unwrap();

    assert_eq!(streamed.hash, single.hash);
    assert_eq!(streamed.hash.len(), 64);
}

#[test]
fn test_file_not_found_error() {
    let computer = HashComputer::new();
    let result = computer.compute_hash(Path::new("nonexistent_file.txt"), "sha256");

    match result {
        Err(CheckHashError::FileNotFound { path }) => {
            assert_eq!(path, Path::new("nonexistent_file.txt"));
        }
        other => panic!("Expected FileNotFound, got {:?}", other.map(|r| r.hash)),
    }
}

#[test]
fn test_unsupported_algorithm_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data.txt");
    fs::write(&file, b"test").unwrap();

    let computer = HashComputer::new();
    let result = computer.compute_hash(&file, "invalid_algorithm");

    match result {
        Err(CheckHashError::UnsupportedAlgorithm { algorithm }) => {
            assert_eq!(algorithm, "invalid_algorithm");
        }
        other => panic!("Expected UnsupportedAlgorithm, got {:?}", other.map(|r| r.hash)),
    }
}

#[test]
fn test_registry_accepts_aliases() {
    assert!(HashRegistry::get_hasher("SHA256").is_ok());
    assert!(HashRegistry::get_hasher("sha-256").is_ok());
    assert!(HashRegistry::get_hasher("Sha-512").is_ok());
    assert!(HashRegistry::get_hasher("sha3-256").is_err());
    assert!(HashRegistry::get_hasher("").is_err());
}

#[test]
fn test_registry_covers_canonical_names() {
    for name in HashRegistry::ALGORITHM_NAMES {
        assert!(HashRegistry::get_hasher(name).is_ok(), "{} missing", name);
    }
}

#[test]
fn test_hasher_output_sizes() {
    let expected = [
        ("md5", 16),
        ("sha1", 20),
        ("sha224", 28),
        ("sha256", 32),
        ("sha384", 48),
        ("sha512", 64),
    ];
    for (name, size) in expected {
        let hasher = HashRegistry::get_hasher(name).unwrap();
        assert_eq!(hasher.output_size(), size, "wrong output size for {}", name);
    }
}

#[test]
fn test_bytes_to_hex_lowercase() {
    assert_eq!(bytes_to_hex(&[0x00, 0xff, 0xde, 0xad]), "00ffdead");
    assert_eq!(bytes_to_hex(&[]), "");
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}
