use std::collections::BTreeMap;
use std::sync::Arc;

use rand::seq::IndexedRandom;
use tokio::sync::RwLock;

use crate::models::{Category, Fortune};

/// Fixed-at-startup fortune catalog. Ids are sequential and never recycled,
/// so iteration over the id-keyed map preserves insertion order.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    fortunes: BTreeMap<i64, Fortune>,
    next_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                fortunes: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All fortunes in insertion order.
    pub async fn all(&self) -> Vec<Fortune> {
        self.inner.read().await.fortunes.values().cloned().collect()
    }

    pub async fn by_category(&self, category: Category) -> Vec<Fortune> {
        self.inner
            .read()
            .await
            .fortunes
            .values()
            .filter(|f| f.category == category)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> Option<Fortune> {
        self.inner.read().await.fortunes.get(&id).cloned()
    }

    /// Uniform draw over the full set, or over the matching subset when a
    /// category filter is given. `None` when the candidate set is empty.
    pub async fn random(&self, category: Option<Category>) -> Option<Fortune> {
        let candidates = match category {
            Some(category) => self.by_category(category).await,
            None => self.all().await,
        };
        candidates.choose(&mut rand::rng()).cloned()
    }

    /// Assigns the next sequential id and appends. No duplicate-message
    /// check.
    pub async fn create(&self, message: impl Into<String>, category: Category) -> Fortune {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let fortune = Fortune {
            id,
            message: message.into(),
            category,
        };
        inner.fortunes.insert(id, fortune.clone());
        fortune
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.fortunes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.fortunes.is_empty()
    }
}
