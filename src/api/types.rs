use serde::Deserialize;

/// Body of `POST /api/fortunes`. Fields are optional so validation can
/// report missing ones per field instead of failing at deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateFortuneRequest {
    pub message: Option<String>,
    pub category: Option<String>,
}

/// Body of `POST /api/saved-fortunes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFortuneRequest {
    pub fortune_id: Option<i64>,
}

/// Query of `GET /api/fortunes/random`.
#[derive(Debug, Deserialize)]
pub struct RandomParams {
    pub category: Option<String>,
}
