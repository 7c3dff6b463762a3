// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        AuthorInput, CreateArticleCommand, DeleteAllArticlesCommand, DeleteArticleCommand,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, BulkDeleteReportDto},
    error::ApplicationError,
    queries::articles::{
        GetArticleByIdQuery, ListArticlesByAuthorQuery, ListArticlesByTagQuery, ListArticlesQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorRequest {
    pub author_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl From<AuthorRequest> for AuthorInput {
    fn from(author: AuthorRequest) -> Self {
        Self {
            author_id: author.author_id,
            name: author.name,
            email: author.email,
            profile_image: author.profile_image,
        }
    }
}

/// Body shared by create and update. Update replaces every field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,
    pub author: AuthorRequest,
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let mut builder = CreateArticleCommand::builder()
        .title(payload.title)
        .subtitle(payload.subtitle)
        .introduction(payload.introduction)
        .body(payload.body)
        .tags(payload.tags)
        .author(payload.author.into());
    if let Some(publish_date) = payload.publish_date {
        builder = builder.publish_date(publish_date);
    }
    let command = builder
        .build()
        .map_err(ApplicationError::validation)
        .into_http()?;

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Every stored article.", body = Vec<ArticleDto>),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/author/{author_id}",
    params(("author_id" = String, Path, description = "Author id")),
    responses(
        (status = 200, description = "Articles written by the author.", body = Vec<ArticleDto>)
    ),
    tag = "Articles"
)]
pub async fn list_articles_by_author(
    Extension(state): Extension<HttpState>,
    Path(author_id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles_by_author(ListArticlesByAuthorQuery { author_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/tag/{tag}",
    params(("tag" = String, Path, description = "Tag to match")),
    responses(
        (status = 200, description = "Articles carrying the tag.", body = Vec<ArticleDto>)
    ),
    tag = "Articles"
)]
pub async fn list_articles_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles_by_tag(ListArticlesByTagQuery { tag })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "The article as stored after the write.", body = ArticleDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        subtitle: payload.subtitle,
        introduction: payload.introduction,
        body: payload.body,
        tags: payload.tags,
        publish_date: payload.publish_date,
        author: payload.author.into(),
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article removed (or was already absent).", body = StatusResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Every article was deleted.", body = BulkDeleteReportDto),
        (status = 207, description = "Some deletes failed; see `failed`.", body = BulkDeleteReportDto),
        (status = 500, description = "Listing failed; nothing was deleted.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_all_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<(StatusCode, Json<BulkDeleteReportDto>)> {
    let report = state
        .services
        .article_commands
        .delete_all_articles(DeleteAllArticlesCommand)
        .await
        .into_http()?;

    let status = if report.is_complete() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    Ok((status, Json(report)))
}
