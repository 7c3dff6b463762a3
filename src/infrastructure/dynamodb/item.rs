// src/infrastructure/dynamodb/item.rs
use crate::domain::article::{Article, ArticleId, ArticleTitle, AuthorId, AuthorInfo, Tags};
use crate::domain::errors::{DomainError, DomainResult};
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

pub mod attr {
    pub const ARTICLE_ID: &str = "article_id";
    pub const TITLE: &str = "title";
    pub const SUBTITLE: &str = "subtitle";
    pub const INTRODUCTION: &str = "introduction";
    pub const BODY: &str = "body";
    pub const TAGS: &str = "tags";
    pub const PUBLISH_DATE: &str = "publish_date";
    pub const AUTHOR_INFO: &str = "author_info";
    /// Partition key of the externally provisioned tag index.
    pub const TAG_INDEX_KEY: &str = "tag";

    pub const AUTHOR_ID: &str = "author_id";
    pub const AUTHOR_NAME: &str = "name";
    pub const AUTHOR_EMAIL: &str = "email";
    pub const AUTHOR_PROFILE_IMAGE: &str = "profile_image";
}

pub fn key(id: &ArticleId) -> Item {
    HashMap::from([(
        attr::ARTICLE_ID.to_string(),
        AttributeValue::S(id.as_str().to_string()),
    )])
}

/// Store representation of an [`Article`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleItem(Item);

impl ArticleItem {
    pub fn into_inner(self) -> Item {
        self.0
    }
}

impl From<Item> for ArticleItem {
    fn from(item: Item) -> Self {
        Self(item)
    }
}

impl From<&Article> for ArticleItem {
    fn from(article: &Article) -> Self {
        let mut item = Item::new();
        put_s(&mut item, attr::ARTICLE_ID, article.id.as_str());
        put_s(&mut item, attr::TITLE, article.title.as_str());
        put_s(&mut item, attr::SUBTITLE, &article.subtitle);
        put_s(&mut item, attr::INTRODUCTION, &article.introduction);
        put_s(&mut item, attr::BODY, &article.body);
        item.insert(
            attr::TAGS.to_string(),
            AttributeValue::L(
                article
                    .tags
                    .iter()
                    .map(|t| AttributeValue::S(t.to_string()))
                    .collect(),
            ),
        );
        if let Some(primary) = article.tags.primary() {
            put_s(&mut item, attr::TAG_INDEX_KEY, primary);
        }
        put_s(
            &mut item,
            attr::PUBLISH_DATE,
            &article
                .publish_date
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        );
        item.insert(
            attr::AUTHOR_INFO.to_string(),
            AttributeValue::M(author_to_map(&article.author)),
        );
        Self(item)
    }
}

impl TryFrom<ArticleItem> for Article {
    type Error = DomainError;

    fn try_from(item: ArticleItem) -> Result<Self, Self::Error> {
        let item = item.0;
        let publish_date = required_s(&item, attr::PUBLISH_DATE)?;
        let publish_date = DateTime::parse_from_rfc3339(publish_date)
            .map_err(|e| malformed(attr::PUBLISH_DATE, &e.to_string()))?
            .with_timezone(&Utc);

        let author = match item.get(attr::AUTHOR_INFO) {
            Some(AttributeValue::M(map)) => author_from_map(map)?,
            Some(_) => return Err(malformed(attr::AUTHOR_INFO, "expected a map")),
            None => return Err(missing(attr::AUTHOR_INFO)),
        };

        Ok(Article {
            id: ArticleId::new(required_s(&item, attr::ARTICLE_ID)?)
                .map_err(|e| malformed(attr::ARTICLE_ID, &e.to_string()))?,
            title: ArticleTitle::unchecked(optional_s(&item, attr::TITLE)?.unwrap_or_default()),
            subtitle: optional_s(&item, attr::SUBTITLE)?.unwrap_or_default(),
            introduction: optional_s(&item, attr::INTRODUCTION)?.unwrap_or_default(),
            body: optional_s(&item, attr::BODY)?.unwrap_or_default(),
            tags: Tags::new(string_list(&item, attr::TAGS)?),
            publish_date,
            author,
        })
    }
}

fn author_to_map(author: &AuthorInfo) -> Item {
    let mut map = Item::new();
    put_s(&mut map, attr::AUTHOR_ID, author.author_id.as_str());
    put_s(&mut map, attr::AUTHOR_NAME, &author.name);
    if let Some(email) = &author.email {
        put_s(&mut map, attr::AUTHOR_EMAIL, email);
    }
    if let Some(image) = &author.profile_image {
        put_s(&mut map, attr::AUTHOR_PROFILE_IMAGE, image);
    }
    map
}

fn author_from_map(map: &Item) -> DomainResult<AuthorInfo> {
    Ok(AuthorInfo {
        author_id: AuthorId::unchecked(optional_s(map, attr::AUTHOR_ID)?.unwrap_or_default()),
        name: optional_s(map, attr::AUTHOR_NAME)?.unwrap_or_default(),
        email: optional_s(map, attr::AUTHOR_EMAIL)?,
        profile_image: optional_s(map, attr::AUTHOR_PROFILE_IMAGE)?,
    })
}

fn put_s(item: &mut Item, name: &str, value: &str) {
    item.insert(name.to_string(), AttributeValue::S(value.to_string()));
}

fn required_s<'a>(item: &'a Item, name: &str) -> DomainResult<&'a str> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(value.as_str()),
        Some(_) => Err(malformed(name, "expected a string")),
        None => Err(missing(name)),
    }
}

fn optional_s(item: &Item, name: &str) -> DomainResult<Option<String>> {
    match item.get(name) {
        Some(AttributeValue::S(value)) => Ok(Some(value.clone())),
        Some(AttributeValue::Null(_)) | None => Ok(None),
        Some(_) => Err(malformed(name, "expected a string")),
    }
}

// Older items may hold tags as a string set rather than a list.
fn string_list(item: &Item, name: &str) -> DomainResult<Vec<String>> {
    match item.get(name) {
        Some(AttributeValue::L(values)) => values
            .iter()
            .map(|value| match value {
                AttributeValue::S(s) => Ok(s.clone()),
                _ => Err(malformed(name, "expected a list of strings")),
            })
            .collect(),
        Some(AttributeValue::Ss(values)) => Ok(values.clone()),
        Some(AttributeValue::Null(_)) | None => Ok(Vec::new()),
        Some(_) => Err(malformed(name, "expected a list of strings")),
    }
}

fn missing(name: &str) -> DomainError {
    DomainError::store(format!("malformed item: missing attribute `{name}`"))
}

fn malformed(name: &str, detail: &str) -> DomainError {
    DomainError::store(format!("malformed item: attribute `{name}`: {detail}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new("a1").unwrap(),
            title: ArticleTitle::new("T").unwrap(),
            subtitle: "sub".into(),
            introduction: "intro".into(),
            body: "body".into(),
            tags: Tags::new(["go", "db"]),
            publish_date: Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap(),
            author: AuthorInfo {
                author_id: AuthorId::new("u1").unwrap(),
                name: "Ada".into(),
                email: Some("ada@example.com".into()),
                profile_image: None,
            },
        }
    }

    #[test]
    fn article_item_layout() {
        let item = ArticleItem::from(&sample_article()).into_inner();
        assert_eq!(item.get("article_id"), Some(&AttributeValue::S("a1".into())));
        assert_eq!(item.get("tag"), Some(&AttributeValue::S("go".into())));
        assert_eq!(
            item.get("tags"),
            Some(&AttributeValue::L(vec![
                AttributeValue::S("go".into()),
                AttributeValue::S("db".into()),
            ]))
        );
        assert_eq!(
            item.get("publish_date"),
            Some(&AttributeValue::S("2024-01-01T12:30:00Z".into()))
        );

        let Some(AttributeValue::M(author)) = item.get("author_info") else {
            panic!("author_info should be a map");
        };
        assert_eq!(author.get("author_id"), Some(&AttributeValue::S("u1".into())));
        assert!(!author.contains_key("profile_image"));
    }

    #[test]
    fn decoding_restores_every_field() {
        let article = sample_article();
        let decoded = Article::try_from(ArticleItem::from(&article)).unwrap();
        assert_eq!(decoded, article);
    }

    #[test]
    fn untagged_article_has_no_index_key() {
        let mut article = sample_article();
        article.tags = Tags::default();
        let item = ArticleItem::from(&article).into_inner();
        assert!(!item.contains_key("tag"));
        assert_eq!(item.get("tags"), Some(&AttributeValue::L(vec![])));
    }

    #[test]
    fn string_set_tags_are_accepted() {
        let mut item = ArticleItem::from(&sample_article()).into_inner();
        item.insert("tags".into(), AttributeValue::Ss(vec!["rust".into()]));
        let decoded = Article::try_from(ArticleItem::from(item)).unwrap();
        assert!(decoded.has_tag("rust"));
    }

    #[test]
    fn only_the_key_is_required_on_read() {
        let mut item = ArticleItem::from(&sample_article()).into_inner();
        item.insert("title".into(), AttributeValue::S(String::new()));
        item.insert(
            "author_info".into(),
            AttributeValue::M(Item::from([("name".to_string(), AttributeValue::S("Ada".into()))])),
        );
        let decoded = Article::try_from(ArticleItem::from(item)).unwrap();
        assert_eq!(decoded.title.as_str(), "");
        assert_eq!(decoded.author.author_id.as_str(), "");

        let mut keyless = ArticleItem::from(&sample_article()).into_inner();
        keyless.insert("article_id".into(), AttributeValue::S("  ".into()));
        assert!(matches!(
            Article::try_from(ArticleItem::from(keyless)),
            Err(DomainError::Store(msg)) if msg.contains("article_id")
        ));
    }

    #[test]
    fn missing_author_is_a_store_error() {
        let mut item = ArticleItem::from(&sample_article()).into_inner();
        item.remove("author_info");
        let err = Article::try_from(ArticleItem::from(item)).unwrap_err();
        assert!(matches!(err, DomainError::Store(msg) if msg.contains("author_info")));
    }

    #[test]
    fn bad_publish_date_is_a_store_error() {
        let mut item = ArticleItem::from(&sample_article()).into_inner();
        item.insert("publish_date".into(), AttributeValue::S("yesterday".into()));
        assert!(matches!(
            Article::try_from(ArticleItem::from(item)),
            Err(DomainError::Store(_))
        ));
    }
}
