pub mod artifact;
pub mod json;
pub mod results;
pub mod user;

pub use artifact::{ArtifactUpdate, EmailQuery, LikeUpdate, TOTAL_LIKE_COUNT};
pub use json::{document_to_json, documents_to_json, json_to_document};
pub use results::{DeleteResponse, InsertResponse, UpdateResponse};
pub use user::NewUser;
