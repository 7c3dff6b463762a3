use crate::domain::article::{Article, AuthorInfo, BulkDeleteReport, FailedDelete};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub author_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl From<AuthorInfo> for AuthorDto {
    fn from(author: AuthorInfo) -> Self {
        Self {
            author_id: author.author_id.into(),
            name: author.name,
            email: author.email,
            profile_image: author.profile_image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: String,
    pub title: String,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Vec<String>,
    pub publish_date: DateTime<Utc>,
    pub author: AuthorDto,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title.into(),
            subtitle: article.subtitle,
            introduction: article.introduction,
            body: article.body,
            tags: article.tags.into_inner(),
            publish_date: article.publish_date,
            author: article.author.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FailedDeleteDto {
    pub article_id: String,
    pub reason: String,
}

impl From<FailedDelete> for FailedDeleteDto {
    fn from(failed: FailedDelete) -> Self {
        Self {
            article_id: failed.id.into(),
            reason: failed.reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BulkDeleteReportDto {
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDeleteDto>,
}

impl BulkDeleteReportDto {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl From<BulkDeleteReport> for BulkDeleteReportDto {
    fn from(report: BulkDeleteReport) -> Self {
        Self {
            deleted: report.deleted.into_iter().map(Into::into).collect(),
            failed: report.failed.into_iter().map(Into::into).collect(),
        }
    }
}
