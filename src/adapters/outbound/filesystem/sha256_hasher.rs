use crate::ports::outbound::ContentHasher;
use crate::shared::Result;
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Sha256Hasher adapter computing hex-encoded SHA-256 digests of files
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHasher for Sha256Hasher {
    fn digest_file(&self, path: &Path) -> Result<String> {
        let mut file = File::open(path)
            .with_context(|| format!("failed to open file for sha256 sum: {}", path.display()))?;

        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher)
            .with_context(|| format!("failed to calculate sha256 sum: {}", path.display()))?;

        Ok(hex::encode(hasher.finalize()))
    }
}
