// src/infrastructure/dynamodb/mod.rs
mod article_repository;
pub mod client;
mod error;
pub mod expressions;
pub mod item;

pub use article_repository::DynamoArticleRepository;
pub use client::{AwsDynamoTable, DynamoClientError, DynamoSettings, DynamoTable, ScanPage};
pub use expressions::TagPredicate;
pub use item::{ArticleItem, Item};
