//! Document store client.
//!
//! One `MongoStore` is built at startup from configuration and injected
//! into the repository adapters. The underlying driver pools connections
//! internally, so the handle is cheap to clone and shared read/write across
//! all workers; its lifetime is the process lifetime.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::domain::ports::{StoreError, StoreHealth};

/// Connection settings for the document store.
///
/// # Example
///
/// ```
/// use collecthub_backend::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017", "collecthub");
/// assert_eq!(config.database_name(), "collecthub");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    connection_string: String,
    database_name: String,
}

impl StoreConfig {
    /// Create a configuration from a connection string and database name.
    pub fn new(connection_string: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            database_name: database_name.into(),
        }
    }

    /// Get the connection string.
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Get the database name.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// Shared handle to the document database.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build the client and select the configured database.
    ///
    /// The driver connects lazily; an unreachable store surfaces on the
    /// first operation (or via [`StoreHealth::ping`]), not here.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` when the connection string cannot
    /// be parsed.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.connection_string())
            .await
            .map_err(|err| StoreError::connection(err.to_string()))?;
        options.app_name = Some("collecthub".to_owned());

        let client = Client::with_options(options)
            .map_err(|err| StoreError::connection(err.to_string()))?;
        Ok(Self {
            database: client.database(config.database_name()),
        })
    }

    /// Typed handle to a logical collection.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}

#[async_trait]
impl StoreHealth for MongoStore {
    async fn ping(&self) -> Result<Duration, StoreError> {
        let started = Instant::now();
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::connection(err.to_string()))?;
        Ok(started.elapsed())
    }
}
