//! Listing Controller
//!
//! Holds the last successfully fetched collection and the loading flag.

use super::{Ticket, TicketCounter};
use crate::error::{StoreError, StoreResult};
use crate::models::FoodRecord;
use crate::store::FoodStore;

/// A read to issue against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: Ticket,
    pub filter: Option<String>,
}

impl LoadRequest {
    pub async fn send(&self, store: &dyn FoodStore) -> StoreResult<Vec<FoodRecord>> {
        store.list(self.filter.as_deref()).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// List replaced with this many records
    Replaced(usize),
    /// Read failed; the previous list is still shown
    Kept(StoreError),
    /// A newer load superseded this one
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListingController {
    foods: Vec<FoodRecord>,
    loading: bool,
    filter: Option<String>,
    tickets: TicketCounter,
}

impl Default for ListingController {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingController {
    /// Starts out loading: the first read is issued on mount.
    pub fn new() -> Self {
        Self {
            foods: Vec::new(),
            loading: true,
            filter: None,
            tickets: TicketCounter::default(),
        }
    }

    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Filter of the most recent load
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Marks loading and issues a read. Empty filter text means no filter.
    pub fn begin_load(&mut self, filter: Option<String>) -> LoadRequest {
        let filter = filter.filter(|f| !f.is_empty());
        self.loading = true;
        self.filter = filter.clone();
        LoadRequest {
            ticket: self.tickets.issue(),
            filter,
        }
    }

    /// Applies a read result. Failures leave the list untouched.
    pub fn finish_load(&mut self, ticket: Ticket, result: StoreResult<Vec<FoodRecord>>) -> LoadOutcome {
        if !self.tickets.is_current(ticket) {
            log::debug!("[listing] dropping stale load result");
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(foods) => {
                let count = foods.len();
                log::debug!("[listing] loaded {} foods", count);
                self.foods = foods;
                LoadOutcome::Replaced(count)
            }
            Err(e) => {
                log::error!("Error fetching foods: {}", e);
                LoadOutcome::Kept(e)
            }
        }
    }

    /// `begin_load` + store read + `finish_load`
    pub async fn load(&mut self, store: &dyn FoodStore, filter: Option<String>) -> LoadOutcome {
        let request = self.begin_load(filter);
        let result = request.send(store).await;
        self.finish_load(request.ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodPayload;
    use crate::store::{MemoryFoodStore, StoreOp};

    fn payload(name: &str, price: &str) -> FoodPayload {
        FoodPayload {
            name: name.to_string(),
            rating: "4.0".to_string(),
            avatar: "https://img.test/a.png".to_string(),
            logo: "https://img.test/l.png".to_string(),
            open: true,
            price: price.to_string(),
        }
    }

    #[test]
    fn test_new_controller_is_loading() {
        let listing = ListingController::new();
        assert!(listing.is_loading());
        assert!(listing.is_empty());
    }

    #[tokio::test]
    async fn test_load_keeps_store_order() {
        let store = MemoryFoodStore::with_records([payload("Tacos", "3"), payload("Burger", "8"), payload("Apple Pie", "4")]);
        let mut listing = ListingController::new();

        assert_eq!(listing.load(&store, None).await, LoadOutcome::Replaced(3));
        assert!(!listing.is_loading());
        let names: Vec<_> = listing.foods().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Tacos", "Burger", "Apple Pie"]);
    }

    #[tokio::test]
    async fn test_search_passes_filter_and_empty_search_does_not() {
        let store = MemoryFoodStore::with_records([payload("Tacos", "3"), payload("Fish Tacos", "6"), payload("Burger", "8")]);
        let mut listing = ListingController::new();

        assert_eq!(listing.load(&store, Some("taco".to_string())).await, LoadOutcome::Replaced(2));
        assert_eq!(listing.filter(), Some("taco"));

        assert_eq!(listing.load(&store, Some(String::new())).await, LoadOutcome::Replaced(3));
        assert_eq!(listing.filter(), None);

        assert_eq!(
            store.journal(),
            vec![StoreOp::List(Some("taco".to_string())), StoreOp::List(None)]
        );
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        let store = MemoryFoodStore::with_records([payload("Tacos", "3"), payload("Burger", "8")]);
        let mut listing = ListingController::new();
        listing.load(&store, None).await;
        let before = listing.foods().to_vec();

        store.fail_with(StoreError::Network("offline".to_string()));
        let outcome = listing.load(&store, None).await;

        assert_eq!(outcome, LoadOutcome::Kept(StoreError::Network("offline".to_string())));
        assert_eq!(listing.foods(), before.as_slice());
        assert!(!listing.is_loading());
    }

    #[test]
    fn test_stale_result_is_ignored() {
        let mut listing = ListingController::new();
        let first = listing.begin_load(Some("pizza".to_string()));
        let second = listing.begin_load(None);

        let stale = listing.finish_load(first.ticket, Ok(Vec::new()));
        assert_eq!(stale, LoadOutcome::Stale);
        assert!(listing.is_loading(), "newer load still in flight");

        let fresh = listing.finish_load(second.ticket, Ok(Vec::new()));
        assert_eq!(fresh, LoadOutcome::Replaced(0));
        assert!(!listing.is_loading());
    }
}
