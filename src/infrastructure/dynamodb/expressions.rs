// src/infrastructure/dynamodb/expressions.rs
use super::item::{Item, attr};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

const TAG_NAME: &str = "#tag";
const TAGS_NAME: &str = "#tags";
const TAG_VALUE: &str = ":tag";

/// Expression strings plus the placeholder maps they reference. DynamoDB
/// rejects placeholders that no expression uses, so each rendering only
/// carries the names it needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedExpression {
    pub key_condition: Option<String>,
    pub filter: Option<String>,
    pub names: HashMap<String, String>,
    pub values: Item,
}

/// "Article carries this tag".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPredicate {
    tag: String,
    outside_partition: bool,
}

impl TagPredicate {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            outside_partition: false,
        }
    }

    /// Matches articles carrying the tag anywhere but in the index partition
    /// key, the complement of an index query for the same tag.
    pub fn outside_partition(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            outside_partition: true,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub const fn is_outside_partition(&self) -> bool {
        self.outside_partition
    }

    /// Key condition on the tag index partition plus the containment filter.
    pub fn index_query(&self) -> RenderedExpression {
        RenderedExpression {
            key_condition: Some(format!("{TAG_NAME} = {TAG_VALUE}")),
            filter: Some(contains_filter()),
            names: HashMap::from([
                (TAG_NAME.to_string(), attr::TAG_INDEX_KEY.to_string()),
                (TAGS_NAME.to_string(), attr::TAGS.to_string()),
            ]),
            values: self.values(),
        }
    }

    /// Containment filter for a table scan, narrowed to items outside the
    /// tag's index partition when asked.
    pub fn scan_filter(&self) -> RenderedExpression {
        if self.outside_partition {
            return RenderedExpression {
                key_condition: None,
                filter: Some(format!(
                    "{} AND (attribute_not_exists({TAG_NAME}) OR {TAG_NAME} <> {TAG_VALUE})",
                    contains_filter()
                )),
                names: HashMap::from([
                    (TAG_NAME.to_string(), attr::TAG_INDEX_KEY.to_string()),
                    (TAGS_NAME.to_string(), attr::TAGS.to_string()),
                ]),
                values: self.values(),
            };
        }
        RenderedExpression {
            key_condition: None,
            filter: Some(contains_filter()),
            names: HashMap::from([(TAGS_NAME.to_string(), attr::TAGS.to_string())]),
            values: self.values(),
        }
    }

    fn values(&self) -> Item {
        HashMap::from([(TAG_VALUE.to_string(), AttributeValue::S(self.tag.clone()))])
    }
}

fn contains_filter() -> String {
    format!("contains({TAGS_NAME}, {TAG_VALUE})")
}
