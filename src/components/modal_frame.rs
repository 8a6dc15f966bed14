//! Modal Frame Component
//!
//! Backdrop plus centered dialog box shared by the add/edit and delete dialogs.

use leptos::prelude::*;

/// Dialog shell. Clicking the backdrop closes it; clicks inside do not.
#[component]
pub fn ModalFrame(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_class = format!("modal {}", class);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class=dialog_class.clone()
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 class="modal-title">{move || title.get()}</h2>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
