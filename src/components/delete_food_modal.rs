//! Delete Food Dialog

use foodwagen_core::{DeleteController, DeleteOutcome, FoodRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalFrame;
use crate::context::use_storefront;

/// Confirmation before removing `target`
#[component]
pub fn DeleteFoodModal(
    #[prop(into)] target: Signal<Option<FoodRecord>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_deleted: Callback<()>,
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    let ctx = use_storefront();
    let dialog = RwSignal::new(DeleteController::new());

    Effect::new(move |_| match target.get() {
        Some(record) => dialog.update(|d| d.open(record)),
        None => dialog.update(|d| d.close()),
    });

    let deleting = move || dialog.with(|d| d.is_deleting());

    let confirm = move |_| {
        let Some(request) = dialog.try_update(|d| d.begin_delete()).flatten() else {
            return;
        };
        let store = ctx.store();
        spawn_local(async move {
            let result = request.send(&*store).await;
            match dialog.try_update(|d| d.finish_delete(&request, result)) {
                Some(DeleteOutcome::Deleted(_)) => on_deleted.run(()),
                Some(DeleteOutcome::DeletedAfterClose(_)) => on_refresh.run(()),
                _ => {}
            }
        });
    };

    view! {
        <ModalFrame
            open=Signal::derive(move || target.with(|t| t.is_some()))
            title="Delete Meal".to_string()
            on_close=on_close
        >
            <div class="delete-body">
                <p class="delete-text">
                    "Are you sure you want to delete this meal? Actions cannot be reversed."
                </p>
                <div class="modal-actions">
                    <button class="btn btn-primary" disabled=deleting on:click=confirm>
                        {move || if deleting() { "Deleting..." } else { "Yes" }}
                    </button>
                    <button class="btn btn-outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </ModalFrame>
    }
}
