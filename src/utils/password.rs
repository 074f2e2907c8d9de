use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use rand_core::OsRng;
use crate::utils::config::PasswordStorage;

/// The value that lands in the `password` column for a submitted password.
pub fn stored_password(storage: PasswordStorage, submitted: &str) -> Result<String, anyhow::Error> {
    match storage {
        PasswordStorage::Plaintext => Ok(submitted.to_string()),
        PasswordStorage::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(submitted.as_bytes(), &salt)
                .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?;
            Ok(hash.to_string())
        }
    }
}

#[cfg(test)]
pub fn verify_password(submitted: &str, stored: &str) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    match PasswordHash::new(stored) {
        Ok(hash) => Argon2::default().verify_password(submitted.as_bytes(), &hash).is_ok(),
        Err(_) => false,
    }
}
