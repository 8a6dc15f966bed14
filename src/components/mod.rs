//! UI Components
//!
//! Storefront page sections, cards and dialogs.

mod delete_food_modal;
mod food_card;
mod food_form_modal;
mod food_grid;
mod footer;
mod header;
mod hero;
mod modal_frame;

pub use delete_food_modal::DeleteFoodModal;
pub use food_card::FoodCard;
pub use food_form_modal::FoodFormModal;
pub use food_grid::FoodGrid;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use modal_frame::ModalFrame;
