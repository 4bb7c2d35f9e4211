use crate::{
    domain::{
        error::DomainError,
        models::credential::{Credential, Username},
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    usecase::require_credentials,
};

pub struct RegisterUserUsecase<C: CredentialRepository, P: PasswordHasher> {
    credential_repository: C,
    password_hasher: P,
}

impl<C: CredentialRepository, P: PasswordHasher> RegisterUserUsecase<C, P> {
    pub fn new(credential_repository: C, password_hasher: P) -> Self {
        Self {
            credential_repository,
            password_hasher,
        }
    }

    /// Store a salted hash of `password` under `username`, replacing any
    /// record already stored for that username.
    pub async fn register(&self, username: String, password: String) -> Result<Username, DomainError> {
        let username = require_credentials(username, &password).inspect_err(|_| {
            tracing::warn!("Username or password missing");
        })?;

        let password_hash = self.password_hasher.hash(&password).inspect_err(|e| {
            tracing::error!(username = %username, error = %e, "Failed to hash password");
        })?;

        let credential = Credential::new(username, password_hash);
        self.credential_repository
            .put_credential(&credential)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    username = %credential.username(),
                    error = %e,
                    "Failed to store credential"
                );
            })?;

        tracing::info!(username = %credential.username(), "User registered");
        Ok(credential.username().clone())
    }
}
