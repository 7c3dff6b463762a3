use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleId, AuthorId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Outcome of a bulk delete. Deletes are issued one by one, so a failure
/// part-way leaves the remaining items in place and is reported here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteReport {
    pub deleted: Vec<ArticleId>,
    pub failed: Vec<FailedDelete>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDelete {
    pub id: ArticleId,
    pub reason: String,
}

impl BulkDeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Puts the article, replacing any item with the same id.
    async fn create(&self, article: Article) -> DomainResult<Article>;
    /// Full replace, then returns what the store holds afterwards.
    async fn update(&self, article: Article) -> DomainResult<Article>;
    async fn delete(&self, id: &ArticleId) -> DomainResult<()>;
    async fn delete_all(&self) -> DomainResult<BulkDeleteReport>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn get_by_id(&self, id: &ArticleId) -> DomainResult<Article>;
    async fn list(&self) -> DomainResult<Vec<Article>>;
    async fn list_by_author(&self, author_id: &AuthorId) -> DomainResult<Vec<Article>>;
    async fn list_by_tag(&self, tag: &str) -> DomainResult<Vec<Article>>;
}
