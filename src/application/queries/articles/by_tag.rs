use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct ListArticlesByTagQuery {
    pub tag: String,
}

impl ArticleQueryService {
    pub async fn list_articles_by_tag(
        &self,
        query: ListArticlesByTagQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let tag = query.tag.trim();
        if tag.is_empty() {
            return Err(ApplicationError::validation("tag cannot be empty"));
        }
        let articles = self.read_repo.list_by_tag(tag).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
