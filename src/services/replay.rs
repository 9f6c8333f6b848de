//! Saving and replaying fuzz inputs
//!
//! Crashing or interesting inputs are stored as raw 32-byte files named
//! `<prefix>-<digest>`, where the digest is the first 8 bytes of the
//! SHA-256 of the content in hex. Identical inputs map to the same file.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::fuzz::{self, FuzzInput};
use crate::error::AppError;

/// Read and decode a saved input file
pub fn read_input(path: &Path) -> Result<FuzzInput, AppError> {
    let data = fs::read(path)?;
    FuzzInput::decode(&data)
}

/// Write an input into `dir`, returning the file path
pub fn write_input(dir: &Path, prefix: &str, input: &FuzzInput) -> Result<PathBuf, AppError> {
    let bytes = input.encode();
    let digest = Sha256::digest(bytes);
    let path = dir.join(format!("{prefix}-{}", hex::encode(&digest[..8])));

    fs::create_dir_all(dir)?;
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Decode a saved input and run it through the harness
pub fn replay(path: &Path, precision: Option<usize>) -> Result<String, AppError> {
    let input = read_input(path)?;
    tracing::info!(
        path = %path.display(),
        non_finite = input.has_non_finite(),
        "Replaying input"
    );
    Ok(fuzz::exercise(&input, precision))
}
