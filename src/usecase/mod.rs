pub mod login_usecase;
pub mod register_user_usecase;

use crate::domain::{error::DomainError, models::credential::Username};

/// Presence check shared by both usecases. No format rules are applied.
fn require_credentials(username: String, password: &str) -> Result<Username, DomainError> {
    if password.is_empty() {
        return Err(DomainError::missing_credentials());
    }
    Username::new(username)
}
