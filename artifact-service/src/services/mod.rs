pub mod database;

pub use database::{
    ArtifactsDb, DbHandle, ARTIFACTS_COLLECTION, MOST_LIKED_LIMIT, USERS_COLLECTION,
};
