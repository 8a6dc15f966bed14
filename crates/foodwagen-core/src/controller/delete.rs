//! Delete Controller
//!
//! Confirmation dialog state for removing one record.

use super::{Ticket, TicketCounter};
use crate::error::{StoreError, StoreResult};
use crate::models::FoodRecord;
use crate::store::FoodStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub ticket: Ticket,
    pub id: String,
}

impl DeleteRequest {
    pub async fn send(&self, store: &dyn FoodStore) -> StoreResult<()> {
        store.delete(&self.id).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    /// Dialog stays open on the same record
    Failed(StoreError),
    /// The record was removed after the dialog closed or moved on
    DeletedAfterClose(String),
    /// The dialog closed or moved on and the delete failed
    Stale,
}

impl DeleteOutcome {
    /// True when the record is gone from the store
    pub fn removed(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_) | DeleteOutcome::DeletedAfterClose(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteController {
    target: Option<FoodRecord>,
    deleting: bool,
    tickets: TicketCounter,
}

impl DeleteController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&FoodRecord> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn open(&mut self, record: FoodRecord) {
        self.tickets.invalidate();
        self.target = Some(record);
        self.deleting = false;
    }

    pub fn close(&mut self) {
        self.tickets.invalidate();
        self.target = None;
        self.deleting = false;
    }

    /// `None` when there is nothing to delete or a delete is in flight
    pub fn begin_delete(&mut self) -> Option<DeleteRequest> {
        if self.deleting {
            return None;
        }
        let id = self.target.as_ref()?.id.clone();
        self.deleting = true;
        Some(DeleteRequest {
            ticket: self.tickets.issue(),
            id,
        })
    }

    pub fn finish_delete(&mut self, request: &DeleteRequest, result: StoreResult<()>) -> DeleteOutcome {
        if !self.deleting || !self.tickets.is_current(request.ticket) {
            return match result {
                Ok(()) => {
                    log::info!("[delete] food {} deleted after its dialog closed", request.id);
                    DeleteOutcome::DeletedAfterClose(request.id.clone())
                }
                Err(e) => {
                    log::debug!("[delete] dropping stale delete failure: {}", e);
                    DeleteOutcome::Stale
                }
            };
        }
        self.deleting = false;
        match result {
            Ok(()) => {
                let id = self.target.take().map(|r| r.id).unwrap_or_default();
                log::info!("[delete] deleted food {}", id);
                DeleteOutcome::Deleted(id)
            }
            Err(e) => {
                log::error!("Error deleting food: {}", e);
                DeleteOutcome::Failed(e)
            }
        }
    }

    /// Deletes the current target. `None` when nothing was sent.
    pub async fn remove(&mut self, store: &dyn FoodStore) -> Option<DeleteOutcome> {
        let request = self.begin_delete()?;
        let result = request.send(store).await;
        Some(self.finish_delete(&request, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodPayload;
    use crate::store::{MemoryFoodStore, StoreOp};

    fn seeded() -> MemoryFoodStore {
        MemoryFoodStore::with_records([FoodPayload {
            name: "Dumplings".to_string(),
            rating: "4.7".to_string(),
            avatar: "https://img.test/d.png".to_string(),
            logo: "https://img.test/l.png".to_string(),
            open: true,
            price: "6.5".to_string(),
        }])
    }

    #[tokio::test]
    async fn test_remove_without_target_sends_nothing() {
        let store = seeded();
        let mut dialog = DeleteController::new();
        assert_eq!(dialog.remove(&store).await, None);
        assert!(store.journal().is_empty());
    }

    #[tokio::test]
    async fn test_remove_deletes_and_closes() {
        let store = seeded();
        let record = store.records()[0].clone();
        let mut dialog = DeleteController::new();
        dialog.open(record.clone());

        assert_eq!(dialog.remove(&store).await, Some(DeleteOutcome::Deleted(record.id.clone())));
        assert!(!dialog.is_open());
        assert!(store.records().is_empty());
        assert_eq!(store.journal(), vec![StoreOp::Delete(record.id)]);
    }

    #[tokio::test]
    async fn test_failed_delete_stays_open_for_retry() {
        let store = seeded();
        let record = store.records()[0].clone();
        let mut dialog = DeleteController::new();
        dialog.open(record.clone());

        store.fail_with(StoreError::Network("offline".to_string()));
        let outcome = dialog.remove(&store).await;
        assert_eq!(outcome, Some(DeleteOutcome::Failed(StoreError::Network("offline".to_string()))));
        assert_eq!(dialog.target(), Some(&record));
        assert!(!dialog.is_deleting());

        store.recover();
        assert!(matches!(dialog.remove(&store).await, Some(DeleteOutcome::Deleted(_))));
    }

    #[test]
    fn test_in_flight_delete_blocks_second_request() {
        let mut dialog = DeleteController::new();
        dialog.open(FoodRecord {
            id: "1".to_string(),
            ..FoodRecord::default()
        });
        let request = dialog.begin_delete().unwrap();
        assert!(dialog.begin_delete().is_none());

        dialog.close();
        let outcome = dialog.finish_delete(&request, Err(StoreError::Status(500)));
        assert_eq!(outcome, DeleteOutcome::Stale);
        assert!(!outcome.removed());
    }

    #[tokio::test]
    async fn test_delete_landing_after_close_is_still_reported() {
        let store = seeded();
        let record = store.records()[0].clone();
        let mut dialog = DeleteController::new();
        dialog.open(record.clone());
        let request = dialog.begin_delete().unwrap();

        dialog.close();
        let result = request.send(&store).await;
        let outcome = dialog.finish_delete(&request, result);

        assert_eq!(outcome, DeleteOutcome::DeletedAfterClose(record.id));
        assert!(outcome.removed());
        assert!(store.records().is_empty());
        assert!(!dialog.is_open());
        assert!(!dialog.is_deleting());
    }
}
