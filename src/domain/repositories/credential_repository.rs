use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::credential::{Credential, Username},
};

/// Key-value store of credential records, keyed by username
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Absence is `Ok(None)`, not an error.
    async fn get_credential(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, RepositoryError>;

    /// Unconditional write. An existing record for the same username is replaced.
    async fn put_credential(&self, credential: &Credential) -> Result<(), RepositoryError>;
}
