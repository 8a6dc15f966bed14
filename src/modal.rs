//! Modal Selection
//!
//! Which dialog is open. At most one at a time.

use foodwagen_core::FoodRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveModal {
    #[default]
    None,
    AddFood,
    EditFood(FoodRecord),
    DeleteFood(FoodRecord),
}

/// What the add/edit dialog should show
#[derive(Debug, Clone, PartialEq)]
pub enum FormRequest {
    Create,
    Edit(FoodRecord),
}

impl ActiveModal {
    pub fn form_request(&self) -> Option<FormRequest> {
        match self {
            ActiveModal::AddFood => Some(FormRequest::Create),
            ActiveModal::EditFood(record) => Some(FormRequest::Edit(record.clone())),
            _ => None,
        }
    }

    pub fn delete_target(&self) -> Option<FoodRecord> {
        match self {
            ActiveModal::DeleteFood(record) => Some(record.clone()),
            _ => None,
        }
    }
}
