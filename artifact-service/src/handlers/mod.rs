pub mod artifacts;
pub mod health;
pub mod users;

pub use artifacts::{
    artifacts_by_email, create_artifact, delete_artifact, get_artifact, like_artifact,
    list_artifacts, most_liked_artifacts, update_artifact,
};
pub use health::{health_check, readiness_check, root};
pub use users::{create_user, list_users};
