// src/infrastructure/dynamodb/client.rs
use super::expressions::{RenderedExpression, TagPredicate};
use super::item::Item;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DynamoClientError {
    #[error("table or index not found: {0}")]
    NotFound(String),
    #[error("request throttled: {0}")]
    Throttled(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("invalid request: {0}")]
    InvalidInput(String),
    #[error("store failure: {0}")]
    Internal(String),
}

/// Items returned by a single scan call.
#[derive(Debug, Clone, Default)]
pub struct ScanPage {
    pub items: Vec<Item>,
    /// The store stopped early and reported a continuation key.
    pub truncated: bool,
}

/// Item-level operations against one table. The article repository only
/// depends on this trait, never on the SDK client directly.
#[async_trait]
pub trait DynamoTable: Send + Sync {
    async fn put_item(&self, item: Item) -> Result<(), DynamoClientError>;

    async fn get_item(&self, key: Item) -> Result<Option<Item>, DynamoClientError>;

    async fn delete_item(&self, key: Item) -> Result<(), DynamoClientError>;

    async fn scan(&self, predicate: Option<&TagPredicate>) -> Result<ScanPage, DynamoClientError>;

    async fn query_index(
        &self,
        index_name: &str,
        predicate: &TagPredicate,
    ) -> Result<Vec<Item>, DynamoClientError>;
}

/// Session parameters for [`AwsDynamoTable::connect`].
#[derive(Debug, Clone)]
pub struct DynamoSettings {
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    pub endpoint: Option<String>,
    pub table_name: String,
}

#[derive(Debug, Clone)]
pub struct AwsDynamoTable {
    client: Client,
    table_name: String,
}

impl AwsDynamoTable {
    pub fn from_sdk_config(config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            table_name: table_name.into(),
        }
    }

    pub async fn load_sdk_config(settings: &DynamoSettings) -> SdkConfig {
        let credentials = Credentials::new(
            settings.access_key.clone(),
            settings.secret_key.clone(),
            None,
            None,
            "articles-service-config",
        );
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &settings.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }
        loader.load().await
    }

    pub async fn connect(settings: &DynamoSettings) -> Self {
        let sdk_config = Self::load_sdk_config(settings).await;
        tracing::info!(
            table = %settings.table_name,
            region = %settings.region,
            endpoint = settings.endpoint.as_deref().unwrap_or("default"),
            "dynamodb client configured"
        );
        Self::from_sdk_config(&sdk_config, settings.table_name.clone())
    }
}

#[async_trait]
impl DynamoTable for AwsDynamoTable {
    async fn put_item(&self, item: Item) -> Result<(), DynamoClientError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_sdk_error)?;
        Ok(())
    }

    async fn get_item(&self, key: Item) -> Result<Option<Item>, DynamoClientError> {
        let out = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(map_sdk_error)?;
        Ok(out.item)
    }

    async fn delete_item(&self, key: Item) -> Result<(), DynamoClientError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(map_sdk_error)?;
        Ok(())
    }

    async fn scan(&self, predicate: Option<&TagPredicate>) -> Result<ScanPage, DynamoClientError> {
        let mut req = self.client.scan().table_name(&self.table_name);

        if let Some(predicate) = predicate {
            let RenderedExpression {
                filter,
                names,
                values,
                ..
            } = predicate.scan_filter();
            req = req
                .set_filter_expression(filter)
                .set_expression_attribute_names(Some(names))
                .set_expression_attribute_values(Some(values));
        }

        let out = req.send().await.map_err(map_sdk_error)?;
        Ok(ScanPage {
            truncated: out.last_evaluated_key.is_some(),
            items: out.items.unwrap_or_default(),
        })
    }

    async fn query_index(
        &self,
        index_name: &str,
        predicate: &TagPredicate,
    ) -> Result<Vec<Item>, DynamoClientError> {
        let RenderedExpression {
            key_condition,
            filter,
            names,
            values,
        } = predicate.index_query();

        let out = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(index_name)
            .set_key_condition_expression(key_condition)
            .set_filter_expression(filter)
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(values))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(out.items.unwrap_or_default())
    }
}

fn map_sdk_error<E>(err: SdkError<E>) -> DynamoClientError
where
    E: ProvideErrorMetadata + std::fmt::Debug,
{
    let fallback = format!("{err:?}");

    match err {
        SdkError::ServiceError(service_err) => {
            let code = service_err.err().code().unwrap_or("Unknown");
            let message = service_err
                .err()
                .message()
                .map_or_else(|| fallback.clone(), str::to_string);
            classify_service_error(code, message)
        }
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            DynamoClientError::Unavailable(fallback)
        }
        _ => DynamoClientError::Internal(fallback),
    }
}

fn classify_service_error(code: &str, message: String) -> DynamoClientError {
    match code {
        "ResourceNotFoundException" => DynamoClientError::NotFound(message),
        "ProvisionedThroughputExceededException"
        | "ThrottlingException"
        | "RequestLimitExceeded" => DynamoClientError::Throttled(message),
        "ValidationException" | "SerializationException" => {
            DynamoClientError::InvalidInput(message)
        }
        "ServiceUnavailable" | "InternalServerError" => DynamoClientError::Unavailable(message),
        _ => DynamoClientError::Internal(message),
    }
}
