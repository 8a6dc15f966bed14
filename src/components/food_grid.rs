//! Featured Meals Grid
//!
//! Loading, empty and populated states of the listing.

use foodwagen_core::FoodRecord;
use leptos::prelude::*;

use super::FoodCard;

#[component]
pub fn FoodGrid(
    #[prop(into)] foods: Signal<Vec<FoodRecord>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_edit: Callback<FoodRecord>,
    #[prop(into)] on_delete: Callback<FoodRecord>,
) -> impl IntoView {
    let is_empty = move || foods.with(|f| f.is_empty());

    view! {
        <section class="featured">
            <div class="container">
                <h2 class="section-title">"Featured Meals"</h2>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="grid-status">
                                <div class="spinner"></div>
                                <p class="loading">"Loading meals..."</p>
                            </div>
                        }.into_any()
                    } else if is_empty() {
                        view! {
                            <div class="grid-status">
                                <div class="empty-state-message">"No items available"</div>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            // every refresh rebuilds the cards; edited records keep their id
                            <div class="food-grid">
                                {foods.get().into_iter().map(|food| view! {
                                    <FoodCard food=food on_edit=on_edit on_delete=on_delete />
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}

                // no paging on the store side yet; the button is a placeholder
                <Show when=move || !is_empty()>
                    <div class="load-more">
                        <button class="btn btn-primary">"Load more"</button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
