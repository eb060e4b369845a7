use serde::Serialize;

/// An account that owns saved fortunes. The password is stored for parity
/// with the persisted schema but never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}
