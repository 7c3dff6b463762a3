// tests/support/builders.rs
use articles_service::domain::article::*;
use chrono::{DateTime, Utc};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: String,
    title: String,
    body: String,
    tags: Vec<String>,
    author_id: String,
    publish_date: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "a1".into(),
            title: "Test Article".into(),
            body: "Test body".into(),
            tags: Vec::new(),
            author_id: "author-1".into(),
            publish_date: fixed_now(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            subtitle: "Subtitle".into(),
            introduction: "Introduction".into(),
            body: self.body,
            tags: Tags::new(self.tags),
            publish_date: self.publish_date,
            author: AuthorInfo {
                author_id: AuthorId::new(self.author_id).unwrap(),
                name: "Test Author".into(),
                email: Some("author@example.com".into()),
                profile_image: None,
            },
        }
    }
}
