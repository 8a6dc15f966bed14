//! Add/Edit Food Dialog
//!
//! One form in two modes: create posts a new record, edit replaces an
//! existing one. Field errors render inline under each input.

use foodwagen_core::{FormController, FormField, InputKind, RestaurantStatus, SubmitOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ModalFrame;
use crate::context::use_storefront;
use crate::modal::FormRequest;

#[component]
pub fn FoodFormModal(
    #[prop(into)] request: Signal<Option<FormRequest>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
    /// Runs when a write lands after the dialog was closed
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    let ctx = use_storefront();
    let form = RwSignal::new(FormController::new());

    // Open, reopen or discard the draft whenever the request changes
    Effect::new(move |_| match request.get() {
        Some(FormRequest::Create) => form.update(|f| f.open_create()),
        Some(FormRequest::Edit(record)) => form.update(|f| f.open_edit(&record)),
        None => form.update(|f| f.close()),
    });

    let is_edit = Signal::derive(move || form.with(|f| f.is_edit()));
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(rejected)) => {
                log::debug!("[form] submit rejected: {:?}", rejected);
                return;
            }
            None => return,
        };
        let store = ctx.store();
        spawn_local(async move {
            let result = submission.send(&*store).await;
            match form.try_update(|f| f.finish_submit(submission.ticket, result)) {
                Some(SubmitOutcome::Saved(_)) => on_saved.run(()),
                Some(SubmitOutcome::SavedAfterClose(_)) => on_refresh.run(()),
                _ => {}
            }
        });
    };

    let title = Signal::derive(move || {
        if is_edit.get() { "Edit Meal".to_string() } else { "Add a meal".to_string() }
    });

    view! {
        <ModalFrame
            open=Signal::derive(move || request.with(|r| r.is_some()))
            title=title
            on_close=on_close
            class="food-form-modal"
        >
            <form class="food-form" on:submit=submit>
                {FormField::ALL.into_iter().map(|field| view! {
                    <FieldInput form=form field=field is_edit=is_edit />
                }).collect_view()}

                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || match (is_edit.get(), submitting.get()) {
                            (false, false) => "Add",
                            (false, true) => "Adding...",
                            (true, false) => "Save",
                            (true, true) => "Saving...",
                        }}
                    </button>
                    <button type="button" class="btn btn-outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

/// One draft field: label (edit mode), control and inline error
#[component]
fn FieldInput(
    form: RwSignal<FormController>,
    field: FormField,
    #[prop(into)] is_edit: Signal<bool>,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let placeholder = move || (!is_edit.get()).then(|| field.label());

    let control = match field.input_kind() {
        InputKind::Text => view! {
            <input
                type="text"
                class="form-input"
                name=field.key()
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.update(|f| f.edit_field(field, event_target_value(&ev)))
            />
        }
        .into_any(),
        InputKind::Number { step, min, max } => view! {
            <input
                type="number"
                class="form-input"
                name=field.key()
                step=step
                min=min
                max=max
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.update(|f| f.edit_field(field, event_target_value(&ev)))
            />
        }
        .into_any(),
        InputKind::StatusSelect => view! {
            <select
                class="form-input"
                name=field.key()
                on:change=move |ev| form.update(|f| f.edit_field(field, event_target_value(&ev)))
            >
                <option value="" disabled=true prop:selected=move || value().is_empty()>
                    {field.label()}
                </option>
                {RestaurantStatus::ALL.into_iter().map(|status| view! {
                    <option value=status.label() prop:selected=move || value() == status.label()>
                        {move || status_option_text(status, is_edit.get())}
                    </option>
                }).collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <Show when=move || is_edit.get()>
                <label class="form-label">{field.label()}</label>
            </Show>
            {control}
            {move || form.with(|f| f.error(field).map(str::to_string)).map(|message| view! {
                <p id=field.error_id() class="field-error">{message}</p>
            })}
        </div>
    }
}

/// Create mode lists the labels; edit mode uses short lowercase words.
fn status_option_text(status: RestaurantStatus, is_edit: bool) -> &'static str {
    match (status, is_edit) {
        (_, false) => status.label(),
        (RestaurantStatus::OpenNow, true) => "open",
        (RestaurantStatus::Closed, true) => "close",
    }
}
