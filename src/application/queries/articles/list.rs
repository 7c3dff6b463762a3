use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListArticlesQuery;

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        _query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
