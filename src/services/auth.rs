//! Authentication service: token issuance and verification

use std::sync::Arc;

use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::SessionClaims,
    services::credentials::CredentialVerifier,
};

#[derive(Clone)]
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, config: AuthConfig) -> Self {
        Self { verifier, config }
    }

    /// Authenticate by email and password and return a signed JWT with its claims
    pub fn login(&self, email: &str, password: &str) -> AppResult<(String, SessionClaims)> {
        let identity = self.verifier.verify(email, password)?;

        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = SessionClaims {
            email: identity.email,
            role: identity.role,
            exp,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        tracing::info!(email = %claims.email, role = %claims.role, "Issued session token");

        Ok((token, claims))
    }

    /// Check signature and expiry of a bearer token
    pub fn verify_token(&self, token: &str) -> AppResult<SessionClaims> {
        SessionClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|e| AppError::Authentication(format!("Invalid or expired token: {}", e)))
    }
}
