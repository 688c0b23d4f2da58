//! Credential verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{Identity, ADMIN_ROLE},
};

/// Checks a login/password pair and resolves the identity behind it
#[cfg_attr(test, mockall::automock)]
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, password: &str) -> AppResult<Identity>;
}

/// Single configured account holding the admin role
pub struct StaticCredentials {
    email: String,
    password_hash: String,
}

impl StaticCredentials {
    /// Build from configuration, hashing the plaintext password unless a hash is provided
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let password_hash = match config.admin_password_hash {
            Some(ref hash) => {
                PasswordHash::new(hash)
                    .map_err(|e| AppError::Internal(format!("Invalid admin password hash: {}", e)))?;
                hash.clone()
            }
            None => hash_password(&config.admin_password)?,
        };

        Ok(Self {
            email: config.admin_email.clone(),
            password_hash,
        })
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> AppResult<Identity> {
        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        let password_valid = Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok();

        if email != self.email || !password_valid {
            return Err(AppError::Authentication("Invalid email or password".to_string()));
        }

        Ok(Identity {
            email: self.email.clone(),
            role: ADMIN_ROLE.to_string(),
        })
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
