// src/domain/errors.rs
use crate::domain::article::ArticleId;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("article with id [ {0} ] not found")]
    NotFound(ArticleId),
    #[error("store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
