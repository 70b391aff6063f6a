//! MongoDB sink
//!
//! Wraps a driver client scoped to one import run. The client is created by
//! [`MongoStore::connect`] and released by [`MongoStore::shutdown`].

use std::time::Duration;

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, FindOptions, InsertManyOptions};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use super::{LogSink, validate_collection_name, validate_database_name};
use crate::config::StorageConfig;
use crate::error::{ImportError, Result};
use crate::models::LogDocument;

/// Handle to one MongoDB collection
#[derive(Debug)]
pub struct MongoStore {
    client: Client,
    collection: Collection<LogDocument>,
    database_name: String,
    collection_name: String,
}

impl MongoStore {
    /// Create a client for `storage.uri` and bind it to `database.collection`
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation rather than here.
    pub async fn connect(
        storage: &StorageConfig,
        database: &str,
        collection: &str,
    ) -> Result<Self> {
        validate_database_name(database)?;
        validate_collection_name(collection)?;

        let mut options = ClientOptions::parse(&storage.uri)
            .await
            .map_err(|e| ImportError::storage("Invalid MongoDB connection string", e))?;
        options.app_name = Some(storage.app_name.clone());
        options.connect_timeout = Some(Duration::from_secs(storage.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(storage.server_selection_timeout_secs));

        debug!(
            "MongoDB client options: hosts={:?}, app_name={}, connect_timeout={}s, server_selection_timeout={}s",
            options.hosts,
            storage.app_name,
            storage.connect_timeout_secs,
            storage.server_selection_timeout_secs
        );

        let client = Client::with_options(options)
            .map_err(|e| ImportError::storage("Failed to create MongoDB client", e))?;
        let handle = client.database(database).collection::<LogDocument>(collection);

        info!("Using MongoDB collection {}.{}", database, collection);

        Ok(Self {
            client,
            collection: handle,
            database_name: database.to_string(),
            collection_name: collection.to_string(),
        })
    }

    /// Read every document in the collection, oldest insert first
    pub async fn fetch_all(&self) -> Result<Vec<LogDocument>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();
        let cursor = self.collection.find(None, options).await?;
        let documents = cursor.try_collect().await?;
        Ok(documents)
    }

    /// Number of documents in the collection
    pub async fn count(&self) -> Result<u64> {
        Ok(self.collection.count_documents(None, None).await?)
    }

    /// Drop the target collection
    pub async fn drop_collection(&self) -> Result<()> {
        self.collection.drop(None).await?;
        Ok(())
    }

    /// Close the client and its connection pool
    pub async fn shutdown(self) {
        debug!("Shutting down MongoDB client for {}", self.target());
        let Self {
            client, collection, ..
        } = self;
        drop(collection);
        client.shutdown().await;
    }
}

impl LogSink for MongoStore {
    async fn insert_batch(&self, documents: Vec<LogDocument>) -> Result<usize> {
        // The driver rejects an empty insert_many.
        if documents.is_empty() {
            return Ok(0);
        }

        let options = InsertManyOptions::builder().ordered(true).build();
        let result = self
            .collection
            .insert_many(documents, options)
            .await
            .map_err(|e| {
                ImportError::storage(format!("insert_many into {} failed", self.target()), e)
            })?;

        Ok(result.inserted_ids.len())
    }

    fn target(&self) -> String {
        format!("{}.{}", self.database_name, self.collection_name)
    }
}
