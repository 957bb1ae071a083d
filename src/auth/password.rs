use thiserror::Error;
use tracing::error;

use crate::config::DEFAULT_BCRYPT_COST;

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted bcrypt hashing. The cost factor is embedded in every hash, so
/// changing it only affects newly created hashes.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, plain: &str) -> Result<String, HashingError> {
        let plain = plain.to_owned();
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| {
                error!(error = %e, "bcrypt hash task failed");
                HashingError::from(e)
            })?
            .map_err(|e| {
                error!(error = %e, "bcrypt hash error");
                HashingError::from(e)
            })?;
        Ok(hash)
    }

    /// Returns `Ok(false)` on mismatch. Errors only when `hash` is not a
    /// parseable bcrypt string or the blocking task dies.
    pub async fn verify(&self, plain: &str, hash: &str) -> Result<bool, HashingError> {
        let plain = plain.to_owned();
        let hash = hash.to_owned();
        let ok = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
            .await?
            .map_err(|e| {
                error!(error = %e, "bcrypt parse hash error");
                HashingError::from(e)
            })?;
        Ok(ok)
    }
}
