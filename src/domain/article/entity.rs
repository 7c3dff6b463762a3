// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, AuthorId, Tags};
use chrono::{DateTime, Utc};

/// Author reference embedded in every article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub author_id: AuthorId,
    pub name: String,
    pub email: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub subtitle: String,
    pub introduction: String,
    pub body: String,
    pub tags: Tags,
    pub publish_date: DateTime<Utc>,
    pub author: AuthorInfo,
}

impl Article {
    pub fn is_written_by(&self, author_id: &AuthorId) -> bool {
        &self.author.author_id == author_id
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new("a1").unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            subtitle: String::new(),
            introduction: String::new(),
            body: "body".into(),
            tags: Tags::new(["go", "db"]),
            publish_date: Utc::now(),
            author: AuthorInfo {
                author_id: AuthorId::new("u1").unwrap(),
                name: "Ada".into(),
                email: None,
                profile_image: None,
            },
        }
    }

    #[test]
    fn author_match_uses_author_id() {
        let article = sample_article();
        assert!(article.is_written_by(&AuthorId::new("u1").unwrap()));
        assert!(!article.is_written_by(&AuthorId::new("u2").unwrap()));
    }

    #[test]
    fn tag_match_is_exact() {
        let article = sample_article();
        assert!(article.has_tag("go"));
        assert!(!article.has_tag("g"));
    }
}
