use mongodb::bson::Document;
use serde::Deserialize;
use serde_json::Value;
use service_core::error::AppError;

use super::json::json_to_bson;

/// Body of `POST /users`. Only these three fields are persisted; anything
/// else in the request is dropped. Values are stored as sent, absent fields
/// as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub email: Value,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub photo: Value,
}

impl NewUser {
    pub fn into_document(self) -> Result<Document, AppError> {
        let mut doc = Document::new();
        doc.insert("email", json_to_bson(self.email)?);
        doc.insert("name", json_to_bson(self.name)?);
        doc.insert("photo", json_to_bson(self.photo)?);
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;
    use serde_json::json;

    #[test]
    fn test_extra_fields_are_dropped() {
        let user: NewUser = serde_json::from_value(json!({
            "email": "ada@example.com",
            "name": "Ada",
            "photo": "https://example.com/ada.png",
            "role": "admin"
        }))
        .unwrap();

        let doc = user.into_document().unwrap();
        assert_eq!(doc.len(), 3);
        assert!(!doc.contains_key("role"));
    }

    #[test]
    fn test_missing_fields_are_stored_as_null() {
        let user: NewUser = serde_json::from_value(json!({ "email": "ada@example.com" })).unwrap();

        let doc = user.into_document().unwrap();
        assert_eq!(doc.get("name"), Some(&Bson::Null));
        assert_eq!(doc.get("photo"), Some(&Bson::Null));
    }

    #[test]
    fn test_values_are_not_type_checked() {
        let user: NewUser =
            serde_json::from_value(json!({ "email": 123, "name": { "first": "Ada" } })).unwrap();

        let doc = user.into_document().unwrap();
        assert_eq!(doc.get("email"), Some(&Bson::Int32(123)));
        assert_eq!(doc.get_document("name").unwrap().get_str("first").unwrap(), "Ada");
    }
}
