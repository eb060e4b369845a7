use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::User;

/// Account store backing the request-identity check.
#[derive(Clone)]
pub struct Users {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl Default for Users {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl Users {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: i64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub async fn create(&self, username: impl Into<String>, password: impl Into<String>) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id,
            username: username.into(),
            password: password.into(),
        };
        inner.users.insert(id, user.clone());
        user
    }
}
