//! Remote document-store adapter.
//!
//! The remote side is modeled as two flat document collections (`worklogs`
//! and `projects`) keyed by user id. Documents carry the client-generated
//! id, so every write is an idempotent upsert: replaying a push never
//! creates duplicates.

pub mod json_dir;

use crate::errors::AppResult;
use serde_json::Value;

pub const WORKLOGS: &str = "worklogs";
pub const PROJECTS: &str = "projects";

/// Document-collection reads/writes for one user's data.
pub trait RemoteStore {
    /// Idempotent upsert of one document by its client-generated id.
    fn put(&self, collection: &str, id: &str, document: &Value) -> AppResult<()>;

    /// All documents in a collection, in unspecified order.
    fn get_all(&self, collection: &str) -> AppResult<Vec<Value>>;

    /// Ids of all documents currently in a collection.
    fn list_ids(&self, collection: &str) -> AppResult<Vec<String>>;

    /// Remove one document; removing an absent id is not an error.
    fn delete(&self, collection: &str, id: &str) -> AppResult<()>;
}
