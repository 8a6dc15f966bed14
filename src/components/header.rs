//! Header Component

use leptos::prelude::*;

/// Top bar with brand and the "Add Meal" action
#[component]
pub fn Header(#[prop(into)] on_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-row">
                <div class="brand">
                    <div class="brand-mark">"🍔"</div>
                    <span class="brand-name">"FoodWagen"</span>
                </div>
                <button class="btn btn-primary btn-pill" on:click=move |_| on_add.run(())>
                    "Add Meal"
                </button>
            </div>
        </header>
    }
}
