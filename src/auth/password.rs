//! Password Hashing
//! Mission: Salted, deliberately slow password hashes with constant-time checks

use anyhow::{Context, Result};
use lazy_static::lazy_static;

/// bcrypt work factor for new hashes
pub const BCRYPT_COST: u32 = 10;

lazy_static! {
    // Verified against when the username is unknown so both login failures cost the same.
    static ref DECOY_HASH: Option<String> = bcrypt::hash("decoy-password", BCRYPT_COST).ok();
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String> {
    bcrypt::hash(plaintext, BCRYPT_COST).context("Failed to hash password")
}

/// Check `plaintext` against a stored bcrypt hash.
///
/// A malformed hash is an authentication failure, not an error.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
}

/// Burn one verification's worth of time without any hash to compare against.
pub fn verify_decoy(plaintext: &str) {
    if let Some(hash) = DECOY_HASH.as_deref() {
        let _ = verify_password(plaintext, hash);
    }
}

/// `hash_password` on the blocking pool.
pub async fn hash_password_blocking(plaintext: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plaintext))
        .await
        .context("Password hashing task failed")?
}

/// `verify_password` on the blocking pool. `None` hash runs the decoy check and yields `false`.
pub async fn verify_password_blocking(plaintext: String, stored_hash: Option<String>) -> Result<bool> {
    tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_password(&plaintext, &hash),
        None => {
            verify_decoy(&plaintext);
            false
        }
    })
    .await
    .context("Password verification task failed")
}
