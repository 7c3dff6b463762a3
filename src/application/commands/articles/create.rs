// src/application/commands/articles/create.rs
use super::{ArticleCommandService, AuthorInput};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{Article, ArticleId, ArticleTitle, Tags},
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Vec<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub author: AuthorInput,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    subtitle: String,
    introduction: String,
    body: String,
    tags: Vec<String>,
    publish_date: Option<DateTime<Utc>>,
    author: Option<AuthorInput>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = introduction.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn publish_date(mut self, publish_date: DateTime<Utc>) -> Self {
        self.publish_date = Some(publish_date);
        self
    }

    pub fn author(mut self, author: AuthorInput) -> Self {
        self.author = Some(author);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            subtitle: self.subtitle,
            introduction: self.introduction,
            body: self.body,
            tags: self.tags,
            publish_date: self.publish_date,
            author: self.author.ok_or("author is required")?,
        })
    }
}

impl ArticleCommandService {
    /// Stores a new article under a freshly generated id. The publish date
    /// defaults to the current time.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = Article {
            id: ArticleId::generate(),
            title: ArticleTitle::new(command.title)?,
            subtitle: command.subtitle,
            introduction: command.introduction,
            body: command.body,
            tags: Tags::new(command.tags),
            publish_date: command.publish_date.unwrap_or_else(|| self.clock.now()),
            author: command.author.into_domain()?,
        };

        let created = self.write_repo.create(article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
