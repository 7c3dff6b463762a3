// tests/support/mocks/table.rs
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use articles_service::infrastructure::dynamodb::{
    DynamoClientError, DynamoTable, Item, ScanPage, TagPredicate,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

/// In-memory stand-in for a DynamoDB table keyed by `article_id`.
///
/// The tag index only holds items that carry a `tag` attribute, the same way
/// a sparse global secondary index does.
#[derive(Default)]
pub struct InMemoryTable {
    items: Mutex<HashMap<String, Item>>,
    failing_deletes: Mutex<HashSet<String>>,
    fail_scans: AtomicBool,
    fail_reads: AtomicBool,
    queried_indexes: Mutex<Vec<String>>,
}

impl InMemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deletes of this id fail with a throttling error.
    pub fn fail_delete_of(&self, id: &str) {
        self.failing_deletes.lock().unwrap().insert(id.to_string());
    }

    pub fn fail_scans(&self) {
        self.fail_scans.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn raw_item(&self, id: &str) -> Option<Item> {
        self.items.lock().unwrap().get(id).cloned()
    }

    pub fn insert_raw(&self, item: Item) {
        let id = key_of(&item).expect("raw item needs article_id");
        self.items.lock().unwrap().insert(id, item);
    }

    pub fn queried_indexes(&self) -> Vec<String> {
        self.queried_indexes.lock().unwrap().clone()
    }
}

fn key_of(item: &Item) -> Option<String> {
    match item.get("article_id") {
        Some(AttributeValue::S(id)) => Some(id.clone()),
        _ => None,
    }
}

fn has_tag(item: &Item, tag: &str) -> bool {
    match item.get("tags") {
        Some(AttributeValue::L(values)) => values
            .iter()
            .any(|v| matches!(v, AttributeValue::S(s) if s == tag)),
        Some(AttributeValue::Ss(values)) => values.iter().any(|s| s == tag),
        _ => false,
    }
}

fn partition_is(item: &Item, tag: &str) -> bool {
    matches!(item.get("tag"), Some(AttributeValue::S(t)) if t == tag)
}

fn scan_matches(item: &Item, predicate: &TagPredicate) -> bool {
    has_tag(item, predicate.tag())
        && !(predicate.is_outside_partition() && partition_is(item, predicate.tag()))
}

#[async_trait]
impl DynamoTable for InMemoryTable {
    async fn put_item(&self, item: Item) -> Result<(), DynamoClientError> {
        let id = key_of(&item).ok_or_else(|| {
            DynamoClientError::InvalidInput("missing key attribute article_id".into())
        })?;
        self.items.lock().unwrap().insert(id, item);
        Ok(())
    }

    async fn get_item(&self, key: Item) -> Result<Option<Item>, DynamoClientError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DynamoClientError::Unavailable("connection reset".into()));
        }
        let id = key_of(&key)
            .ok_or_else(|| DynamoClientError::InvalidInput("missing key".into()))?;
        Ok(self.items.lock().unwrap().get(&id).cloned())
    }

    async fn delete_item(&self, key: Item) -> Result<(), DynamoClientError> {
        let id = key_of(&key)
            .ok_or_else(|| DynamoClientError::InvalidInput("missing key".into()))?;
        if self.failing_deletes.lock().unwrap().contains(&id) {
            return Err(DynamoClientError::Throttled(format!("delete of {id} throttled")));
        }
        self.items.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn scan(&self, predicate: Option<&TagPredicate>) -> Result<ScanPage, DynamoClientError> {
        if self.fail_scans.load(Ordering::SeqCst) {
            return Err(DynamoClientError::Unavailable("scan timed out".into()));
        }
        let items = self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| predicate.is_none_or(|p| scan_matches(item, p)))
            .cloned()
            .collect();
        Ok(ScanPage {
            items,
            truncated: false,
        })
    }

    async fn query_index(
        &self,
        index_name: &str,
        predicate: &TagPredicate,
    ) -> Result<Vec<Item>, DynamoClientError> {
        self.queried_indexes
            .lock()
            .unwrap()
            .push(index_name.to_string());
        let tag = predicate.tag();
        Ok(self
            .items
            .lock()
            .unwrap()
            .values()
            .filter(|item| partition_is(item, tag))
            .filter(|item| has_tag(item, tag))
            .cloned()
            .collect())
    }
}
