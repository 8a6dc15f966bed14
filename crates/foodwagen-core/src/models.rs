//! Food Models
//!
//! Data structures matching the remote food store, plus the draft form that
//! exists only while an add/edit dialog is open.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::number;

/// One meal listing as stored remotely.
///
/// `rating` and `price` are numbers carried as text; nothing guarantees they
/// are well-formed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub avatar: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rating: String,
    #[serde(default)]
    pub open: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub logo: String,
    #[serde(rename = "Price", default, deserialize_with = "lenient_text")]
    pub price: String,
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_text")]
    pub created_at: String,
}

impl FoodRecord {
    /// Price with two decimals, e.g. `12.50`
    pub fn display_price(&self) -> String {
        number::format_fixed(&self.price, 2)
    }

    /// Rating with one decimal, e.g. `4.5`
    pub fn display_rating(&self) -> String {
        number::format_fixed(&self.rating, 1)
    }

    pub fn status(&self) -> RestaurantStatus {
        RestaurantStatus::from_open(self.open)
    }
}

/// Accepts a string, number, bool or null where text is expected.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Body of a create (POST) or full replacement (PUT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPayload {
    pub name: String,
    pub rating: String,
    pub avatar: String,
    pub logo: String,
    pub open: bool,
    #[serde(rename = "Price")]
    pub price: String,
}

/// Restaurant open/closed selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantStatus {
    OpenNow,
    Closed,
}

impl RestaurantStatus {
    pub const ALL: [RestaurantStatus; 2] = [RestaurantStatus::OpenNow, RestaurantStatus::Closed];

    pub fn label(&self) -> &'static str {
        match self {
            RestaurantStatus::OpenNow => "Open Now",
            RestaurantStatus::Closed => "Closed",
        }
    }

    /// Short text shown on cards
    pub fn badge(&self) -> &'static str {
        match self {
            RestaurantStatus::OpenNow => "Open",
            RestaurantStatus::Closed => "Closed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn from_open(open: bool) -> Self {
        if open { RestaurantStatus::OpenNow } else { RestaurantStatus::Closed }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, RestaurantStatus::OpenNow)
    }
}

/// How a draft field is edited on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    Text,
    Number { step: &'static str, min: &'static str, max: Option<&'static str> },
    StatusSelect,
}

/// The seven draft fields, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    FoodName,
    FoodRating,
    FoodImage,
    FoodPrice,
    RestaurantName,
    RestaurantLogo,
    RestaurantStatus,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::FoodName,
        FormField::FoodRating,
        FormField::FoodImage,
        FormField::FoodPrice,
        FormField::RestaurantName,
        FormField::RestaurantLogo,
        FormField::RestaurantStatus,
    ];

    /// Form key, also used as the input `name`
    pub fn key(&self) -> &'static str {
        match self {
            FormField::FoodName => "food_name",
            FormField::FoodRating => "food_rating",
            FormField::FoodImage => "food_image",
            FormField::FoodPrice => "food_price",
            FormField::RestaurantName => "restaurant_name",
            FormField::RestaurantLogo => "restaurant_logo",
            FormField::RestaurantStatus => "restaurant_status",
        }
    }

    /// DOM id of the inline error paragraph
    pub fn error_id(&self) -> String {
        format!("{}-error", self.key().replace('_', "-"))
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::FoodName => "Food name",
            FormField::FoodRating => "Food rating",
            FormField::FoodImage => "Food image (link)",
            FormField::FoodPrice => "Food price",
            FormField::RestaurantName => "Restaurant name",
            FormField::RestaurantLogo => "Restaurant logo (link)",
            FormField::RestaurantStatus => "Restaurant status (open/close)",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            FormField::FoodRating => InputKind::Number { step: "0.1", min: "0", max: Some("5") },
            FormField::FoodPrice => InputKind::Number { step: "0.01", min: "0", max: None },
            FormField::RestaurantStatus => InputKind::StatusSelect,
            _ => InputKind::Text,
        }
    }
}

/// Component-local form state. All fields are raw text as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub food_name: String,
    pub food_rating: String,
    pub food_image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub restaurant_status: String,
    pub food_price: String,
}

impl DraftForm {
    /// Projects a stored record into draft shape for editing.
    ///
    /// Records carry no restaurant name, so the food name stands in for it.
    pub fn from_record(record: &FoodRecord) -> Self {
        Self {
            food_name: record.name.clone(),
            food_rating: record.rating.clone(),
            food_image: record.avatar.clone(),
            restaurant_name: record.name.clone(),
            restaurant_logo: record.logo.clone(),
            restaurant_status: record.status().label().to_string(),
            food_price: record.price.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FoodName => &self.food_name,
            FormField::FoodRating => &self.food_rating,
            FormField::FoodImage => &self.food_image,
            FormField::FoodPrice => &self.food_price,
            FormField::RestaurantName => &self.restaurant_name,
            FormField::RestaurantLogo => &self.restaurant_logo,
            FormField::RestaurantStatus => &self.restaurant_status,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FoodName => &mut self.food_name,
            FormField::FoodRating => &mut self.food_rating,
            FormField::FoodImage => &mut self.food_image,
            FormField::FoodPrice => &mut self.food_price,
            FormField::RestaurantName => &mut self.restaurant_name,
            FormField::RestaurantLogo => &mut self.restaurant_logo,
            FormField::RestaurantStatus => &mut self.restaurant_status,
        };
        *slot = value;
    }

    /// Write body for this draft. `restaurant_name` is not part of it.
    pub fn to_payload(&self) -> FoodPayload {
        FoodPayload {
            name: self.food_name.clone(),
            rating: self.food_rating.clone(),
            avatar: self.food_image.clone(),
            logo: self.restaurant_logo.clone(),
            open: self.restaurant_status == RestaurantStatus::OpenNow.label(),
            price: self.food_price.clone(),
        }
    }
}
