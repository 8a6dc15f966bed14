//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::rc::Rc;

use foodwagen_core::FoodStore;
use leptos::prelude::*;

/// App-wide handle to the food store
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    store: StoredValue<Rc<dyn FoodStore>, LocalStorage>,
}

impl StorefrontContext {
    pub fn new(store: impl FoodStore + 'static) -> Self {
        let store: Rc<dyn FoodStore> = Rc::new(store);
        Self {
            store: StoredValue::new_local(store),
        }
    }

    pub fn store(&self) -> Rc<dyn FoodStore> {
        self.store.get_value()
    }
}

pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}
