// Compare engine module
// Pairs files with expected hash values positionally, digests each file
// and reports every mismatch in input order

use std::path::{Path, PathBuf};

use super::error::CheckHashError;
use super::hash::HashComputer;
use super::path_utils;

/// A file whose computed digest differs from its expected hash value
///
/// Carries the resolved path, the computed lowercase hex digest and the
/// expected value as the caller supplied it (original case).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Mismatch {
    pub path: PathBuf,
    pub file_hash: String,
    pub expected: String,
}

/// Engine for comparing files against expected hash values
pub struct CompareEngine {
    computer: HashComputer,
}

impl CompareEngine {
    pub fn new() -> Self {
        Self {
            computer: HashComputer::new(),
        }
    }

    /// Walk the file/hash pairs positionally and produce mismatches lazily
    ///
    /// The length precondition is checked here, before any filesystem
    /// access: unequal sequence lengths fail with a LengthMismatch error
    /// carrying both counts. The returned iterator resolves each path,
    /// digests the file and compares against the lowercased expected
    /// value; matching pairs produce nothing. The first resolution or
    /// read error ends iteration, so pairs after a failing file are not
    /// processed.
    pub fn check_mismatches<'a, P: AsRef<Path>, S: AsRef<str>>(
        &'a self,
        files: &'a [P],
        expected_hashes: &'a [S],
        algorithm: &'a str,
    ) -> Result<Mismatches<'a, P, S>, CheckHashError> {
        if files.len() != expected_hashes.len() {
            return Err(CheckHashError::LengthMismatch {
                files_count: files.len(),
                hashes_count: expected_hashes.len(),
            });
        }

        Ok(Mismatches {
            computer: &self.computer,
            algorithm,
            files,
            expected_hashes,
            index: 0,
            failed: false,
        })
    }

    /// Compare files to expected hash values and report mismatches
    ///
    /// Each mismatch is printed to stdout as it is found:
    ///
    /// ```text
    /// File doesn't match expected value: <resolved path>
    /// File hash: <lowercase hex digest>
    /// Expected value: <expected hash as supplied>
    /// ```
    ///
    /// followed by a blank line. Files that match produce no output at
    /// all. Any error ends the run and propagates to the caller.
    pub fn compare_files_to_hashes<P: AsRef<Path>, S: AsRef<str>>(
        &self,
        files: &[P],
        expected_hashes: &[S],
        algorithm: &str,
    ) -> Result<(), CheckHashError> {
        for mismatch in self.check_mismatches(files, expected_hashes, algorithm)? {
            let mismatch = mismatch?;
            println!("File doesn't match expected value: {}", mismatch.path.display());
            println!("File hash: {}", mismatch.file_hash);
            println!("Expected value: {}", mismatch.expected);
            println!();
        }
        Ok(())
    }
}

impl Default for CompareEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy stream of mismatches over positionally paired files and hashes
///
/// Fused on error: once a pair fails to resolve or digest, remaining
/// pairs are never touched.
pub struct Mismatches<'a, P, S> {
    computer: &'a HashComputer,
    algorithm: &'a str,
    files: &'a [P],
    expected_hashes: &'a [S],
    index: usize,
    failed: bool,
}

impl<P: AsRef<Path>, S: AsRef<str>> Iterator for Mismatches<'_, P, S> {
    type Item = Result<Mismatch, CheckHashError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while self.index < self.files.len() {
            let file = self.files[self.index].as_ref();
            let expected = self.expected_hashes[self.index].as_ref();
            self.index += 1;

            let resolved = match path_utils::resolve_input_path(file) {
                Ok(resolved) => resolved,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            let result = match self.computer.compute_hash(&resolved, self.algorithm) {
                Ok(result) => result,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            // Computed digests are lowercase hex; fold the expected value
            // to match so comparison is case-insensitive
            if result.hash != expected.to_lowercase() {
                return Some(Ok(Mismatch {
                    path: resolved,
                    file_hash: result.hash,
                    expected: expected.to_string(),
                }));
            }
        }

        None
    }
}
