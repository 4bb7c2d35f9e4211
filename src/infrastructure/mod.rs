pub mod argon2_password_hasher;
pub mod credential_repository;
pub mod entity;
