//! Conversion between request/response JSON and stored BSON.
//!
//! Stored documents are schema-less, so handlers move `bson::Document`s
//! around rather than typed structs. Responses render ObjectIds as plain hex
//! strings and datetimes as RFC 3339; everything else uses relaxed extended
//! JSON, which for ordinary values is plain JSON.

use mongodb::bson::{Bson, Document};
use serde_json::Value;
use service_core::error::AppError;

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

pub fn documents_to_json(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(document_to_json).collect())
}

pub fn json_to_bson(value: Value) -> Result<Bson, AppError> {
    Bson::try_from(value)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Unsupported JSON value: {}", e)))
}

/// Converts a request body into an insertable document. Only JSON objects map
/// onto documents.
pub fn json_to_document(value: Value) -> Result<Document, AppError> {
    match json_to_bson(value)? {
        Bson::Document(doc) => Ok(doc),
        other => Err(AppError::BadRequest(anyhow::anyhow!(
            "Expected a JSON object, got {:?}",
            other.element_type()
        ))),
    }
}
