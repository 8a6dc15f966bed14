//! FoodWagen Frontend App
//!
//! Landing page: header, hero search, featured meals grid, footer, and the
//! add/edit/delete dialogs.

use foodwagen_core::{FoodRecord, HttpFoodStore, ListingController};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteFoodModal, FoodFormModal, FoodGrid, Footer, Header, Hero};
use crate::context::StorefrontContext;
use crate::modal::ActiveModal;

#[component]
pub fn App() -> impl IntoView {
    let ctx = StorefrontContext::new(HttpFoodStore::default());
    provide_context(ctx);

    // State
    let listing = RwSignal::new(ListingController::new());
    let (active_modal, set_active_modal) = signal(ActiveModal::None);

    // Read the collection; failures keep whatever is on screen
    let load = move |filter: Option<String>| {
        let Some(request) = listing.try_update(|l| l.begin_load(filter)) else {
            return;
        };
        let store = ctx.store();
        spawn_local(async move {
            let result = request.send(&*store).await;
            listing.try_update(|l| l.finish_load(request.ticket, result));
        });
    };

    // Load on mount
    Effect::new(move |_| load(None));

    let form_request = Memo::new(move |_| active_modal.with(|m| m.form_request()));
    let delete_target = Memo::new(move |_| active_modal.with(|m| m.delete_target()));

    let close_modal = Callback::new(move |_: ()| set_active_modal.set(ActiveModal::None));
    let refresh = Callback::new(move |_: ()| load(None));
    let after_mutation = Callback::new(move |_: ()| {
        load(None);
        set_active_modal.set(ActiveModal::None);
    });

    view! {
        <div class="page">
            <Header on_add=move |_: ()| set_active_modal.set(ActiveModal::AddFood) />

            <Hero on_search=move |term: String| load(Some(term)) />

            <FoodGrid
                foods=Signal::derive(move || listing.with(|l| l.foods().to_vec()))
                loading=Signal::derive(move || listing.with(|l| l.is_loading()))
                on_edit=move |food: FoodRecord| set_active_modal.set(ActiveModal::EditFood(food))
                on_delete=move |food: FoodRecord| set_active_modal.set(ActiveModal::DeleteFood(food))
            />

            <Footer />

            <FoodFormModal
                request=form_request
                on_close=close_modal
                on_saved=after_mutation
                on_refresh=refresh
            />
            <DeleteFoodModal
                target=delete_target
                on_close=close_modal
                on_deleted=after_mutation
                on_refresh=refresh
            />
        </div>
    }
}
