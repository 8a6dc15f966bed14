//! Food Card Component

use foodwagen_core::FoodRecord;
use leptos::prelude::*;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn image_or_placeholder(url: &str) -> String {
    if url.is_empty() { PLACEHOLDER_IMAGE.to_string() } else { url.to_string() }
}

/// One meal with its actions menu
#[component]
pub fn FoodCard(
    food: FoodRecord,
    #[prop(into)] on_edit: Callback<FoodRecord>,
    #[prop(into)] on_delete: Callback<FoodRecord>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let price = food.display_price();
    let rating = food.display_rating();
    let status = food.status();
    let status_class = if status.is_open() { "restaurant-status open" } else { "restaurant-status closed" };

    let edit_food = food.clone();
    let delete_food = food.clone();

    view! {
        <div class="food-card">
            <div class="food-card-media">
                <img src=image_or_placeholder(&food.avatar) alt=food.name.clone() class="food-image" />
                <div class="price-badge">"$" {price.clone()}</div>
                <div class="card-menu">
                    <button
                        class="card-menu-btn"
                        title="Actions"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "⋮"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="card-menu-items">
                            <button
                                class="card-menu-item"
                                on:click={
                                    let edit_food = edit_food.clone();
                                    move |_| {
                                        set_menu_open.set(false);
                                        on_edit.run(edit_food.clone());
                                    }
                                }
                            >
                                "Edit Food"
                            </button>
                            <button
                                class="card-menu-item danger"
                                on:click={
                                    let delete_food = delete_food.clone();
                                    move |_| {
                                        set_menu_open.set(false);
                                        on_delete.run(delete_food.clone());
                                    }
                                }
                            >
                                "Delete Food"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="food-card-body">
                <div class="food-card-heading">
                    <img src=image_or_placeholder(&food.logo) alt="Restaurant logo" class="restaurant-logo" />
                    <div>
                        <h3 class="restaurant-name">{food.name.clone()}</h3>
                        <div class="rating-row">
                            <span class="star">"★"</span>
                            <span class="restaurant-rating">{rating}</span>
                        </div>
                    </div>
                </div>
                <div class="food-card-footer">
                    <span class="restaurant-price">"$" {price}</span>
                    <span class=status_class>{status.badge()}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_uses_placeholder() {
        assert_eq!(image_or_placeholder(""), "/placeholder.svg");
        assert_eq!(image_or_placeholder("https://img.test/a.png"), "https://img.test/a.png");
    }
}
