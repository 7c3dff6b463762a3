use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleId, errors::DomainError},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        // nothing is ever stored under a blank key
        let id = ArticleId::new(query.id.clone())
            .map_err(|_| DomainError::NotFound(ArticleId::unchecked(query.id)))?;
        let article = self.read_repo.get_by_id(&id).await?;
        Ok(article.into())
    }
}
