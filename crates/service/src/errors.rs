use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn already_exists(name: &str) -> Self {
        Self::AlreadyExists(name.to_string())
    }

    pub fn not_found(name: &str) -> Self {
        Self::NotFound(name.to_string())
    }
}
