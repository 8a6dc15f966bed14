//! Food Store
//!
//! Abstract interface to the remote collection of food records.
//! Implementations: HTTP against the hosted mock API, and in-memory.

mod http;
mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{FoodPayload, FoodRecord};

pub use http::HttpFoodStore;
pub use memory::{MemoryFoodStore, StoreOp};

/// CRUD over the food collection.
///
/// Ids are assigned by the store, never by the caller. Futures are not `Send`
/// so browser fetch can back them.
#[async_trait(?Send)]
pub trait FoodStore {
    /// Whole collection in store order, optionally narrowed by a name substring
    async fn list(&self, name_filter: Option<&str>) -> StoreResult<Vec<FoodRecord>>;

    /// Create a record; the store echoes it back with `id` and `createdAt`
    async fn create(&self, payload: &FoodPayload) -> StoreResult<FoodRecord>;

    /// Replace every writable field of an existing record
    async fn update(&self, id: &str, payload: &FoodPayload) -> StoreResult<FoodRecord>;

    /// Delete by id
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
