//! Business logic services

pub mod auth;
pub mod catalog;
pub mod credentials;
pub mod uploads;

use std::sync::Arc;

use crate::{
    config::AppConfig,
    error::AppResult,
    repository::{BookShelf, Repository},
};

use credentials::{CredentialVerifier, StaticCredentials};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub uploads: uploads::UploadService,
}

impl Services {
    /// Create all services with the built-in credential verifier
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let verifier = StaticCredentials::from_config(&config.auth)?;
        Ok(Self::with_verifier(config, Arc::new(verifier)))
    }

    /// Create all services around a custom credential verifier
    pub fn with_verifier(config: &AppConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let shelf = if config.store.seed {
            BookShelf::seeded()
        } else {
            BookShelf::new(Vec::new())
        };
        let repository = Repository::new(shelf);

        Self {
            auth: auth::AuthService::new(verifier, config.auth.clone()),
            catalog: catalog::CatalogService::new(repository),
            uploads: uploads::UploadService::new(config.upload.directory.clone()),
        }
    }
}
