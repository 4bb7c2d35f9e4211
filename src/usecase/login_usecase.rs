use crate::{
    domain::{
        error::DomainError,
        models::credential::Username,
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    usecase::require_credentials,
};

pub struct LoginUsecase<C: CredentialRepository, P: PasswordHasher> {
    credential_repository: C,
    password_hasher: P,
}

impl<C: CredentialRepository, P: PasswordHasher> LoginUsecase<C, P> {
    pub fn new(credential_repository: C, password_hasher: P) -> Self {
        Self {
            credential_repository,
            password_hasher,
        }
    }

    /// Check `password` against the stored hash for `username`.
    ///
    /// Unknown users and wrong passwords both yield [`DomainError::Unauthorized`];
    /// only the log records which one it was.
    pub async fn authenticate(&self, username: String, password: String) -> Result<Username, DomainError> {
        let username = require_credentials(username, &password).inspect_err(|_| {
            tracing::warn!("Username or password missing");
        })?;

        let credential = self
            .credential_repository
            .get_credential(&username)
            .await
            .inspect_err(|e| {
                tracing::error!(username = %username, error = %e, "Error logging in");
            })?;

        let Some(credential) = credential else {
            tracing::info!(username = %username, reason = "unknown_user", "Login rejected");
            return Err(DomainError::Unauthorized);
        };

        let verified = match self
            .password_hasher
            .verify(&password, credential.password_hash())
        {
            Ok(verified) => verified,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Stored password hash is unreadable");
                false
            }
        };

        if !verified {
            tracing::info!(username = %username, reason = "wrong_password", "Login rejected");
            return Err(DomainError::Unauthorized);
        }

        tracing::info!(username = %username, "Login successful");
        Ok(username)
    }
}
