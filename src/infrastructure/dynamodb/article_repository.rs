// src/infrastructure/dynamodb/article_repository.rs
use super::client::DynamoTable;
use super::error::map_dynamo;
use super::expressions::TagPredicate;
use super::item::{self, ArticleItem, Item};
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, AuthorId,
    BulkDeleteReport, FailedDelete,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// Article repository over a single DynamoDB table keyed by `article_id`.
///
/// The externally provisioned tag index is partitioned on an article's first
/// tag only. Tag lookups read that partition from the index and pick up
/// articles carrying the tag further down their list with a filtered scan.
/// Without an index the whole lookup is one filtered scan. Author lookups
/// always filter a full scan client-side, which only holds up while the
/// table stays small.
#[derive(Clone)]
pub struct DynamoArticleRepository {
    table: Arc<dyn DynamoTable>,
    tag_index: Option<String>,
}

impl DynamoArticleRepository {
    pub fn new(table: Arc<dyn DynamoTable>, tag_index: Option<String>) -> Self {
        Self { table, tag_index }
    }

    async fn put(&self, article: &Article) -> DomainResult<()> {
        let item = ArticleItem::from(article).into_inner();
        self.table.put_item(item).await.map_err(map_dynamo)
    }

    async fn scan_items(&self, predicate: Option<&TagPredicate>) -> DomainResult<Vec<Item>> {
        let page = self.table.scan(predicate).await.map_err(map_dynamo)?;
        if page.truncated {
            tracing::warn!(
                returned = page.items.len(),
                "article scan truncated by the store; remaining items were not read"
            );
        }
        Ok(page.items)
    }

    fn decode_all(items: Vec<Item>) -> DomainResult<Vec<Article>> {
        items
            .into_iter()
            .map(|item| Article::try_from(ArticleItem::from(item)))
            .collect()
    }
}

#[async_trait]
impl ArticleWriteRepository for DynamoArticleRepository {
    async fn create(&self, article: Article) -> DomainResult<Article> {
        self.put(&article).await?;
        tracing::debug!(article_id = %article.id, "article stored");
        Ok(article)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        self.put(&article).await?;
        self.get_by_id(&article.id).await
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        self.table
            .delete_item(item::key(id))
            .await
            .map_err(map_dynamo)?;
        tracing::debug!(article_id = %id, "article deleted");
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<BulkDeleteReport> {
        let articles = self.list().await?;
        let mut report = BulkDeleteReport::default();

        for article in articles {
            let outcome = self.delete(&article.id).await;
            match outcome {
                Ok(()) => report.deleted.push(article.id),
                Err(err) => {
                    tracing::warn!(article_id = %article.id, error = %err, "bulk delete skipped article");
                    report.failed.push(FailedDelete {
                        id: article.id,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

#[async_trait]
impl ArticleReadRepository for DynamoArticleRepository {
    async fn get_by_id(&self, id: &ArticleId) -> DomainResult<Article> {
        let item = self
            .table
            .get_item(item::key(id))
            .await
            .map_err(map_dynamo)?
            .ok_or_else(|| DomainError::NotFound(id.clone()))?;
        Article::try_from(ArticleItem::from(item))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let items = self.scan_items(None).await?;
        Self::decode_all(items)
    }

    async fn list_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>> {
        let articles = self.list().await?;
        Ok(articles
            .into_iter()
            .filter(|article| article.is_written_by(author_id))
            .collect())
    }

    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>> {
        let items = match &self.tag_index {
            Some(index) => {
                let mut items = self
                    .table
                    .query_index(index, &TagPredicate::new(tag))
                    .await
                    .map_err(map_dynamo)?;
                items.extend(
                    self.scan_items(Some(&TagPredicate::outside_partition(tag)))
                        .await?,
                );
                items
            }
            None => self.scan_items(Some(&TagPredicate::new(tag))).await?,
        };

        let mut seen = HashSet::new();
        let mut articles = Self::decode_all(items)?;
        articles.retain(|article| seen.insert(article.id.clone()));
        Ok(articles)
    }
}
