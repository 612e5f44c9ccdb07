use mongodb::bson::{doc, Bson, Document};
use serde::Deserialize;
use serde_json::Value;
use service_core::error::AppError;

use super::json::json_to_bson;

pub const TOTAL_LIKE_COUNT: &str = "totalLikeCount";

/// Body of `PATCH /artifacts/all/:id`.
///
/// Every field is written on each update, so a field missing from the request
/// overwrites the stored value with `null`. Values are not type-checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactUpdate {
    #[serde(default)]
    pub artifacts_name: Value,
    #[serde(default)]
    pub fee: Value,
    #[serde(default)]
    pub user_email: Value,
    #[serde(default)]
    pub user_name: Value,
    #[serde(default, rename = "type")]
    pub kind: Value,
    #[serde(default)]
    pub create: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub discover: Value,
    #[serde(default)]
    pub discover_by: Value,
    #[serde(default)]
    pub location: Value,
}

impl ArtifactUpdate {
    /// Builds the `$set` payload.
    pub fn into_set_document(self) -> Result<Document, AppError> {
        let fields = [
            ("artifacts_name", self.artifacts_name),
            ("fee", self.fee),
            ("user_email", self.user_email),
            ("user_name", self.user_name),
            ("type", self.kind),
            ("create", self.create),
            ("description", self.description),
            ("discover", self.discover),
            ("discover_by", self.discover_by),
            ("location", self.location),
        ];

        let mut set = Document::new();
        for (key, value) in fields {
            set.insert(key, json_to_bson(value)?);
        }
        Ok(set)
    }
}

/// Body of `PATCH /artifacts/all/:id/like`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LikeUpdate {
    #[serde(default)]
    pub count: Value,
}

impl LikeUpdate {
    pub fn into_set_document(self) -> Result<Document, AppError> {
        Ok(doc! { TOTAL_LIKE_COUNT: json_to_bson(self.count)? })
    }
}

/// Query string of `GET /artifacts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// Filter on the top-level `email` field. Without a query parameter this
    /// matches documents whose `email` is null or absent.
    pub fn into_filter(self) -> Document {
        doc! { "email": Bson::from(self.email) }
    }
}
