use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema,
    sea_query::OnConflict,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::credential::{Credential, HashedPassword, Username},
        repositories::credential_repository::CredentialRepository,
    },
    infrastructure::entity::credentials,
};

fn storage_error(e: DbErr) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[derive(Clone)]
pub struct SqlCredentialRepository {
    db: DatabaseConnection,
}

impl SqlCredentialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the credentials table if it does not exist yet
    pub async fn ensure_table(&self) -> Result<(), RepositoryError> {
        let backend = self.db.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(credentials::Entity);
        statement.if_not_exists();

        self.db
            .execute(backend.build(&statement))
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for SqlCredentialRepository {
    async fn get_credential(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, RepositoryError> {
        let model = credentials::Entity::find_by_id(username.as_str().to_string())
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        model
            .map(|model| -> Result<Credential, RepositoryError> {
                let username = Username::new(model.username)
                    .map_err(|e| RepositoryError::Storage(e.to_string()))?;
                Ok(Credential::reconstruct(
                    username,
                    HashedPassword::new(model.password_hash),
                    model.updated_at,
                ))
            })
            .transpose()
    }

    async fn put_credential(&self, credential: &Credential) -> Result<(), RepositoryError> {
        let model = credentials::ActiveModel {
            username: Set(credential.username().as_str().to_string()),
            password_hash: Set(credential.password_hash().as_str().to_string()),
            updated_at: Set(credential.updated_at()),
        };

        // upsert: last write wins
        credentials::Entity::insert(model)
            .on_conflict(
                OnConflict::column(credentials::Column::Username)
                    .update_columns([
                        credentials::Column::PasswordHash,
                        credentials::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;

    use super::*;

    async fn connect() -> DatabaseConnection {
        Database::connect("sqlite::memory:").await.unwrap()
    }

    async fn repository() -> SqlCredentialRepository {
        let repository = SqlCredentialRepository::new(connect().await);
        repository.ensure_table().await.unwrap();
        repository
    }

    fn credential(username: &str, hash: &str) -> Credential {
        Credential::new(
            Username::new(username.to_string()).unwrap(),
            HashedPassword::new(hash.to_string()),
        )
    }

    #[tokio::test]
    async fn missing_record_is_none() {
        let repository = repository().await;
        let username = Username::new("nobody".to_string()).unwrap();

        let found = repository.get_credential(&username).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn put_then_get_returns_record() {
        let repository = repository().await;
        repository
            .put_credential(&credential("alice", "hash-1"))
            .await
            .unwrap();

        let found = repository
            .get_credential(&Username::new("alice".to_string()).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.username().as_str(), "alice");
        assert_eq!(found.password_hash().as_str(), "hash-1");
    }

    #[tokio::test]
    async fn second_put_overwrites() {
        let repository = repository().await;
        repository
            .put_credential(&credential("alice", "hash-1"))
            .await
            .unwrap();
        repository
            .put_credential(&credential("alice", "hash-2"))
            .await
            .unwrap();

        let found = repository
            .get_credential(&Username::new("alice".to_string()).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.password_hash().as_str(), "hash-2");
    }

    #[tokio::test]
    async fn records_are_keyed_by_username() {
        let repository = repository().await;
        repository
            .put_credential(&credential("alice", "hash-a"))
            .await
            .unwrap();
        repository
            .put_credential(&credential("bob", "hash-b"))
            .await
            .unwrap();

        let alice = repository
            .get_credential(&Username::new("alice".to_string()).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(alice.password_hash().as_str(), "hash-a");
    }

    #[tokio::test]
    async fn ensure_table_is_idempotent() {
        let repository = repository().await;
        repository.ensure_table().await.unwrap();
    }

    #[tokio::test]
    async fn missing_table_surfaces_storage_error() {
        let repository = SqlCredentialRepository::new(connect().await);

        let read = repository
            .get_credential(&Username::new("alice".to_string()).unwrap())
            .await;
        assert!(matches!(read, Err(RepositoryError::Storage(_))));

        let write = repository.put_credential(&credential("alice", "hash-1")).await;
        assert!(matches!(write, Err(RepositoryError::Storage(_))));
    }
}
