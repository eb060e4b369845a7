pub mod catalog;
pub mod ledger;
pub mod seed;
pub mod users;

pub use catalog::Catalog;
pub use ledger::{Ledger, SavedEntry};
pub use users::Users;

/// Process-lifetime state bundle. Constructed once at startup and handed to
/// request handlers through axum state; no ambient singletons.
#[derive(Clone, Default)]
pub struct Store {
    pub catalog: Catalog,
    pub ledger: Ledger,
    pub users: Users,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store populated with the fixed fortune catalog and the demo
    /// user.
    pub async fn seeded() -> Self {
        let store = Self::new();
        seed::apply(&store).await;
        store
    }
}
