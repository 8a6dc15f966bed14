//! Draft Form Validation
//!
//! Every rule runs; errors accumulate per field.

use std::collections::BTreeMap;

use crate::models::{DraftForm, FormField, RestaurantStatus};
use crate::number::parse_number;

pub const FOOD_NAME_REQUIRED: &str = "Food Name is required";
pub const FOOD_RATING_NOT_NUMBER: &str = "Food Rating must be a number";
pub const FOOD_IMAGE_REQUIRED: &str = "Food Image URL is required";
pub const RESTAURANT_NAME_REQUIRED: &str = "Restaurant Name is required";
pub const RESTAURANT_LOGO_REQUIRED: &str = "Restaurant Logo URL is required";
pub const RESTAURANT_STATUS_INVALID: &str = "Restaurant Status must be 'Open Now' or 'Closed'";
pub const FOOD_PRICE_REQUIRED: &str = "Food Price is required";
pub const FOOD_PRICE_NOT_POSITIVE: &str = "Food Price must be a positive number";

/// Field-level error messages. Empty means the draft may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    messages: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Drops one field's message, leaving the rest
    pub fn clear(&mut self, field: FormField) {
        self.messages.remove(&field);
    }
}

/// Checks a draft against the storefront rules.
///
/// Ratings are only required to be numeric; values outside 0..=5 pass.
pub fn validate(draft: &DraftForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if is_blank(&draft.food_name) {
        errors.insert(FormField::FoodName, FOOD_NAME_REQUIRED);
    }

    if is_blank(&draft.food_rating) || parse_number(&draft.food_rating).is_none() {
        errors.insert(FormField::FoodRating, FOOD_RATING_NOT_NUMBER);
    }

    if is_blank(&draft.food_image) {
        errors.insert(FormField::FoodImage, FOOD_IMAGE_REQUIRED);
    }

    if is_blank(&draft.restaurant_name) {
        errors.insert(FormField::RestaurantName, RESTAURANT_NAME_REQUIRED);
    }

    if is_blank(&draft.restaurant_logo) {
        errors.insert(FormField::RestaurantLogo, RESTAURANT_LOGO_REQUIRED);
    }

    if RestaurantStatus::from_label(&draft.restaurant_status).is_none() {
        errors.insert(FormField::RestaurantStatus, RESTAURANT_STATUS_INVALID);
    }

    if is_blank(&draft.food_price) {
        errors.insert(FormField::FoodPrice, FOOD_PRICE_REQUIRED);
    } else if !matches!(parse_number(&draft.food_price), Some(price) if price >= 0.0) {
        errors.insert(FormField::FoodPrice, FOOD_PRICE_NOT_POSITIVE);
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
