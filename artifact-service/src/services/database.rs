use crate::models::TOTAL_LIKE_COUNT;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{ClientOptions, FindOptions, ServerApi, ServerApiVersion},
    results::{DeleteResult, InsertOneResult, UpdateResult},
    Client as MongoClient, Collection, Database,
};
use secrecy::{ExposeSecret, SecretString};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub const USERS_COLLECTION: &str = "users";
pub const ARTIFACTS_COLLECTION: &str = "artifacts";
pub const MOST_LIKED_LIMIT: i64 = 6;

/// Handle to the artifacts database. Cloning shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct ArtifactsDb {
    client: MongoClient,
    db: Database,
}

impl ArtifactsDb {
    /// Builds a client pinned to Stable API v1. No server round-trip happens
    /// here; use [`ArtifactsDb::ping`] to check connectivity.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Creating MongoDB client");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB ping failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Closes the connection pool. Other clones of this handle stop working.
    pub async fn shutdown(self) {
        tracing::info!("Closing MongoDB client");
        self.client.shutdown().await;
    }

    pub fn users(&self) -> Collection<Document> {
        self.db.collection(USERS_COLLECTION)
    }

    pub fn artifacts(&self) -> Collection<Document> {
        self.db.collection(ARTIFACTS_COLLECTION)
    }

    pub async fn list_users(&self) -> Result<Vec<Document>, AppError> {
        collect(self.users(), doc! {}, None, "users").await
    }

    pub async fn insert_user(&self, user: Document) -> Result<InsertOneResult, AppError> {
        self.users()
            .insert_one(user, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert user: {}", e);
                AppError::from(e)
            })
    }

    pub async fn list_artifacts(&self) -> Result<Vec<Document>, AppError> {
        collect(self.artifacts(), doc! {}, None, "artifacts").await
    }

    /// Top artifacts by `totalLikeCount`, highest first.
    pub async fn most_liked_artifacts(&self) -> Result<Vec<Document>, AppError> {
        let options = FindOptions::builder()
            .sort(doc! { TOTAL_LIKE_COUNT: -1 })
            .limit(MOST_LIKED_LIMIT)
            .build();

        collect(self.artifacts(), doc! {}, Some(options), "most liked artifacts").await
    }

    pub async fn find_artifacts(&self, filter: Document) -> Result<Vec<Document>, AppError> {
        collect(self.artifacts(), filter, None, "artifacts by filter").await
    }

    pub async fn find_artifact(&self, id: ObjectId) -> Result<Option<Document>, AppError> {
        self.artifacts()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(artifact_id = %id, "Failed to find artifact: {}", e);
                AppError::from(e)
            })
    }

    pub async fn insert_artifact(&self, artifact: Document) -> Result<InsertOneResult, AppError> {
        self.artifacts()
            .insert_one(artifact, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert artifact: {}", e);
                AppError::from(e)
            })
    }

    /// Applies `$set` to a single artifact. A missing id matches nothing and
    /// is not an error.
    pub async fn set_artifact_fields(
        &self,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateResult, AppError> {
        self.artifacts()
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| {
                tracing::error!(artifact_id = %id, "Failed to update artifact: {}", e);
                AppError::from(e)
            })
    }

    pub async fn delete_artifact(&self, id: ObjectId) -> Result<DeleteResult, AppError> {
        self.artifacts()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(artifact_id = %id, "Failed to delete artifact: {}", e);
                AppError::from(e)
            })
    }
}

/// Store handle shared by every request. The client is created on first use;
/// a failed creation is retried on the next call.
#[derive(Clone)]
pub struct DbHandle {
    cell: Arc<OnceCell<ArtifactsDb>>,
    uri: SecretString,
    database: String,
}

impl DbHandle {
    pub fn new(uri: SecretString, database: String) -> Self {
        Self {
            cell: Arc::new(OnceCell::new()),
            uri,
            database,
        }
    }

    pub async fn get(&self) -> Result<&ArtifactsDb, AppError> {
        self.cell
            .get_or_try_init(|| ArtifactsDb::connect(self.uri.expose_secret(), &self.database))
            .await
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.get().await?.ping().await
    }

    /// Closes the client if one was ever created.
    pub async fn shutdown(&self) {
        if let Some(db) = self.cell.get() {
            db.clone().shutdown().await;
        }
    }
}

async fn collect(
    collection: Collection<Document>,
    filter: Document,
    options: Option<FindOptions>,
    what: &str,
) -> Result<Vec<Document>, AppError> {
    let cursor = collection.find(filter, options).await.map_err(|e| {
        tracing::error!("Failed to list {}: {}", what, e);
        AppError::from(e)
    })?;

    cursor.try_collect().await.map_err(|e| {
        tracing::error!("Failed to collect {}: {}", what, e);
        AppError::from(e)
    })
}
