use super::client::DynamoClientError;
use crate::domain::errors::DomainError;

pub fn map_dynamo(err: DynamoClientError) -> DomainError {
    DomainError::Store(err.to_string())
}
