use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::warn;

use crate::models::{Fortune, SavedFortune};
use crate::store::Catalog;

/// A ledger row joined against the catalog, as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    pub fortune: Fortune,
    pub saved_at: DateTime<Utc>,
}

/// Per-user saved-fortune ledger. Keyed by synthetic id with a monotonic
/// counter that never resets or recycles.
#[derive(Clone)]
pub struct Ledger {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    entries: BTreeMap<i64, SavedFortune>,
    next_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                entries: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the user's ledger rows against the catalog. A row whose
    /// `fortune_id` no longer resolves is skipped and logged rather than
    /// aborting the whole listing.
    pub async fn list_for_user(&self, user_id: i64, catalog: &Catalog) -> Vec<SavedEntry> {
        let rows: Vec<SavedFortune> = self
            .inner
            .read()
            .await
            .entries
            .values()
            .filter(|sf| sf.user_id == user_id)
            .cloned()
            .collect();

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            match catalog.get(row.fortune_id).await {
                Some(fortune) => out.push(SavedEntry {
                    fortune,
                    saved_at: row.saved_at,
                }),
                None => warn!(
                    saved_id = row.id,
                    fortune_id = row.fortune_id,
                    "skipping saved fortune whose catalog entry is missing"
                ),
            }
        }
        out
    }

    /// Records a bookmark. Fortune existence is the caller's concern; this
    /// layer only assigns the id and stamps the save time.
    pub async fn save(&self, user_id: i64, fortune_id: i64) -> SavedFortune {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let saved = SavedFortune {
            id,
            user_id,
            fortune_id,
            saved_at: Utc::now(),
        };
        inner.entries.insert(id, saved.clone());
        saved
    }

    /// True iff a record existed and was removed.
    pub async fn delete(&self, id: i64) -> bool {
        self.inner.write().await.entries.remove(&id).is_some()
    }

    /// Removes every entry belonging to the user; other users' entries are
    /// untouched. Always reports success.
    pub async fn clear_for_user(&self, user_id: i64) -> bool {
        self.inner
            .write()
            .await
            .entries
            .retain(|_, sf| sf.user_id != user_id);
        true
    }
}
