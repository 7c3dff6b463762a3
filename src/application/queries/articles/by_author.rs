use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::AuthorId,
};

pub struct ListArticlesByAuthorQuery {
    pub author_id: String,
}

impl ArticleQueryService {
    pub async fn list_articles_by_author(
        &self,
        query: ListArticlesByAuthorQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let author_id = AuthorId::new(query.author_id)?;
        let articles = self.read_repo.list_by_author(&author_id).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
