use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Value object representing a hashed password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Create a new HashedPassword from an already hashed string
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-empty login name, the primary key of the credential store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::missing_credentials());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Credential {
    username: Username,
    password_hash: HashedPassword,
    updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(username: Username, password_hash: HashedPassword) -> Self {
        Self {
            username,
            password_hash,
            updated_at: Utc::now(),
        }
    }

    pub fn reconstruct(
        username: Username,
        password_hash: HashedPassword,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            updated_at,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
