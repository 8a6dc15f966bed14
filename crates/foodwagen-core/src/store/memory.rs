//! In-Memory Food Store
//!
//! Behaves like the hosted mock API: sequential string ids, `createdAt`
//! stamps, case-insensitive name filtering and 404 for unknown ids. Every
//! request is journaled and failures can be switched on.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use super::FoodStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{FoodPayload, FoodRecord};

/// A request as seen by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    List(Option<String>),
    Create(String),
    Update(String),
    Delete(String),
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<FoodRecord>,
    next_id: u64,
    journal: Vec<StoreOp>,
    failure: Option<StoreError>,
}

#[derive(Debug, Default)]
pub struct MemoryFoodStore {
    inner: Mutex<Inner>,
}

impl MemoryFoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with records, ids assigned in order
    pub fn with_records(payloads: impl IntoIterator<Item = FoodPayload>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for payload in payloads {
                let record = inner.insert(&payload);
                log::debug!("[memory] seeded {}", record.id);
            }
        }
        store
    }

    /// Every later request fails with `error` until cleared
    pub fn fail_with(&self, error: StoreError) {
        self.lock().failure = Some(error);
    }

    pub fn recover(&self) {
        self.lock().failure = None;
    }

    pub fn journal(&self) -> Vec<StoreOp> {
        self.lock().journal.clone()
    }

    pub fn records(&self) -> Vec<FoodRecord> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn begin(&mut self, op: StoreOp) -> StoreResult<()> {
        self.journal.push(op);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn insert(&mut self, payload: &FoodPayload) -> FoodRecord {
        self.next_id += 1;
        let record = FoodRecord {
            id: self.next_id.to_string(),
            name: payload.name.clone(),
            avatar: payload.avatar.clone(),
            rating: payload.rating.clone(),
            open: payload.open,
            logo: payload.logo.clone(),
            price: payload.price.clone(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        self.records.push(record.clone());
        record
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::Status(404))
    }
}

#[async_trait(?Send)]
impl FoodStore for MemoryFoodStore {
    async fn list(&self, name_filter: Option<&str>) -> StoreResult<Vec<FoodRecord>> {
        let filter = name_filter.filter(|f| !f.is_empty()).map(str::to_lowercase);
        let mut inner = self.lock();
        inner.begin(StoreOp::List(filter.clone()))?;
        Ok(inner
            .records
            .iter()
            .filter(|r| match &filter {
                Some(needle) => r.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create(&self, payload: &FoodPayload) -> StoreResult<FoodRecord> {
        let mut inner = self.lock();
        inner.begin(StoreOp::Create(payload.name.clone()))?;
        Ok(inner.insert(payload))
    }

    async fn update(&self, id: &str, payload: &FoodPayload) -> StoreResult<FoodRecord> {
        let mut inner = self.lock();
        inner.begin(StoreOp::Update(id.to_string()))?;
        let index = inner.position(id)?;
        let record = &mut inner.records[index];
        record.name = payload.name.clone();
        record.avatar = payload.avatar.clone();
        record.rating = payload.rating.clone();
        record.open = payload.open;
        record.logo = payload.logo.clone();
        record.price = payload.price.clone();
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut inner = self.lock();
        inner.begin(StoreOp::Delete(id.to_string()))?;
        let index = inner.position(id)?;
        inner.records.remove(index);
        Ok(())
    }
}
