// src/config.rs
use crate::infrastructure::dynamodb::DynamoSettings;
use std::{env, fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    environment: AppEnv,
    listen_addr: String,
    aws_access_key: String,
    aws_secret_key: String,
    aws_region: String,
    dynamodb_endpoint: Option<String>,
    articles_table: String,
    tag_index: Option<String>,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment environment the process runs in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppEnv {
    #[default]
    Dev,
    Test,
    Prod,
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(ConfigError::Invalid(format!(
                "APP_ENV must be one of dev, test, prod (got `{other}`)"
            ))),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Prod => "prod",
        })
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_articles_table() -> String {
    "articles".into()
}

fn default_tag_index() -> String {
    "TagsIndex".into()
}

impl AppConfig {
    /// Build configuration from the process environment. Loading a `.env`
    /// file is left to the binary, which does it before tracing starts.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let environment = lookup("APP_ENV")
            .map(|v| v.parse::<AppEnv>())
            .transpose()?
            .unwrap_or_default();

        let aws_access_key = required("AWS_ACCESS_KEY")?;
        let aws_secret_key = required("AWS_SECRET_KEY")?;
        let aws_region = required("AWS_DEFAULT_REGION")?;

        let dynamodb_endpoint = lookup("DYNAMODB_ENDPOINT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if let Some(endpoint) = &dynamodb_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::Invalid(
                    "DYNAMODB_ENDPOINT must be an http(s) URL".into(),
                ));
            }
        }

        let articles_table = lookup("ARTICLES_TABLE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_articles_table);

        // An explicitly empty value turns the index off.
        let tag_index = match lookup("ARTICLES_TAG_INDEX") {
            Some(v) if v.trim().is_empty() => None,
            Some(v) => Some(v.trim().to_string()),
            None => Some(default_tag_index()),
        };

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment,
            listen_addr,
            aws_access_key,
            aws_secret_key,
            aws_region,
            dynamodb_endpoint,
            articles_table,
            tag_index,
            allowed_origins,
        })
    }

    pub const fn environment(&self) -> AppEnv {
        self.environment
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn articles_table(&self) -> &str {
        &self.articles_table
    }

    pub fn tag_index(&self) -> Option<&str> {
        self.tag_index.as_deref()
    }

    /// Empty means any origin is allowed.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn dynamo_settings(&self) -> DynamoSettings {
        DynamoSettings {
            access_key: self.aws_access_key.clone(),
            secret_key: self.aws_secret_key.clone(),
            region: self.aws_region.clone(),
            endpoint: self.dynamodb_endpoint.clone(),
            table_name: self.articles_table.clone(),
        }
    }
}
