//! Hero Section
//!
//! Headline, delivery/pickup toggle and the meal search form.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeliveryMode {
    Delivery,
    Pickup,
}

impl DeliveryMode {
    fn label(&self) -> &'static str {
        match self {
            DeliveryMode::Delivery => "Delivery",
            DeliveryMode::Pickup => "Pickup",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            DeliveryMode::Delivery => "🏍",
            DeliveryMode::Pickup => "🛍",
        }
    }
}

/// Hero banner. `on_search` receives the raw search text.
#[component]
pub fn Hero(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let (search_term, set_search_term) = signal(String::new());
    // presentational only; the listing does not depend on it
    let (delivery_mode, set_delivery_mode) = signal(DeliveryMode::Delivery);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(search_term.get());
    };

    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div>
                    <h1 class="hero-title">"Are you starving?"</h1>
                    <p class="hero-subtitle">"Within a few clicks, find meals that are accessible near you"</p>

                    <div class="search-card">
                        <div class="delivery-toggle">
                            {[DeliveryMode::Delivery, DeliveryMode::Pickup].into_iter().map(|mode| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || if delivery_mode.get() == mode { "toggle-btn active" } else { "toggle-btn" }
                                        on:click=move |_| set_delivery_mode.set(mode)
                                    >
                                        <span class="toggle-icon">{mode.icon()}</span>
                                        {mode.label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <form class="search-form" on:submit=submit>
                            <input
                                id="search-bar"
                                type="text"
                                class="search-input"
                                placeholder="What do you like to eat today?"
                                prop:value=move || search_term.get()
                                on:input=move |ev| set_search_term.set(event_target_value(&ev))
                            />
                            <button type="submit" class="btn btn-accent">"Find Meal"</button>
                        </form>
                    </div>
                </div>

                <div class="hero-art">
                    <img src="/img.png" alt="Delicious food bowl" class="hero-image" />
                </div>
            </div>
        </section>
    }
}
