//! FoodWagen Core
//!
//! Layered domain for the storefront:
//! - models: food records, drafts and write payloads
//! - validation: draft form rules
//! - store: remote food store abstraction (HTTP + in-memory)
//! - controller: listing, form and delete state machines

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod number;
pub mod store;
pub mod validation;

pub use config::ApiConfig;
pub use controller::{
    DeleteController, DeleteOutcome, FormController, FormMode, FormPhase, ListingController,
    LoadOutcome, SubmitOutcome, SubmitRejected, Ticket,
};
pub use error::{StoreError, StoreResult};
pub use models::{DraftForm, FoodPayload, FoodRecord, FormField, InputKind, RestaurantStatus};
pub use store::{FoodStore, HttpFoodStore, MemoryFoodStore, StoreOp};
pub use validation::{validate, FormErrors};
