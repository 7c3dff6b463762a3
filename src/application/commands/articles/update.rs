// src/application/commands/articles/update.rs
use super::{ArticleCommandService, AuthorInput};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleTitle, Tags},
};
use chrono::{DateTime, Utc};

/// Full replacement of an article. Every field is overwritten, so the
/// publish date has to be supplied explicitly.
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Vec<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub author: AuthorInput,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let publish_date = command
            .publish_date
            .ok_or_else(|| ApplicationError::validation("publish_date is required"))?;

        let article = Article {
            id,
            title: ArticleTitle::new(command.title)?,
            subtitle: command.subtitle,
            introduction: command.introduction,
            body: command.body,
            tags: Tags::new(command.tags),
            publish_date,
            author: command.author.into_domain()?,
        };

        let stored = self.write_repo.update(article).await?;
        tracing::info!(article_id = %stored.id, "article updated");
        Ok(stored.into())
    }
}
