//! Create/Edit Form Controller
//!
//! Idle → Editing → Submitting → Saved, falling back to Editing on failure.

use super::{Ticket, TicketCounter};
use crate::error::{StoreError, StoreResult};
use crate::models::{DraftForm, FoodPayload, FoodRecord, FormField};
use crate::store::FoodStore;
use crate::validation::{validate, FormErrors};

/// Which write a submission turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// POST a new record
    Create,
    /// PUT over the record with this id
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing,
    Submitting,
    Saved,
}

/// Why a submit attempt did not reach the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Field errors; now shown beside their inputs
    Invalid(FormErrors),
    /// A submission is already in flight
    Busy,
    /// The form is not open
    Closed,
}

/// A validated write ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub mode: FormMode,
    pub payload: FoodPayload,
}

impl Submission {
    pub async fn send(&self, store: &dyn FoodStore) -> StoreResult<FoodRecord> {
        match &self.mode {
            FormMode::Create => store.create(&self.payload).await,
            FormMode::Edit { id } => store.update(id, &self.payload).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(FoodRecord),
    /// Write failed; the draft is kept for another try
    Failed(StoreError),
    /// The write landed after the form was closed or reopened. The form is
    /// left alone but the listing is out of date.
    SavedAfterClose(FoodRecord),
    /// The form was closed or reopened and the write failed
    Stale,
}

impl SubmitOutcome {
    /// True when the store now holds the submitted record
    pub fn wrote(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_) | SubmitOutcome::SavedAfterClose(_))
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    phase: FormPhase,
    draft: DraftForm,
    errors: FormErrors,
    tickets: TicketCounter,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            phase: FormPhase::Idle,
            draft: DraftForm::default(),
            errors: FormErrors::default(),
            tickets: TicketCounter::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn value(&self, field: FormField) -> &str {
        self.draft.get(field)
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Opens an empty draft for a new record
    pub fn open_create(&mut self) {
        self.reset(FormMode::Create, DraftForm::default());
    }

    /// Opens a draft pre-filled from `record`
    pub fn open_edit(&mut self, record: &FoodRecord) {
        self.reset(
            FormMode::Edit { id: record.id.clone() },
            DraftForm::from_record(record),
        );
    }

    /// Discards the draft; any in-flight write becomes stale
    pub fn close(&mut self) {
        self.reset(FormMode::Create, DraftForm::default());
        self.phase = FormPhase::Idle;
    }

    /// Stores new text for a field and drops that field's error without
    /// re-validating.
    pub fn edit_field(&mut self, field: FormField, value: String) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Validates the draft and, if clean, moves to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        match self.phase {
            FormPhase::Idle | FormPhase::Saved => return Err(SubmitRejected::Closed),
            FormPhase::Submitting => return Err(SubmitRejected::Busy),
            FormPhase::Editing => {}
        }

        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.phase = FormPhase::Submitting;
        Ok(Submission {
            ticket: self.tickets.issue(),
            mode: self.mode.clone(),
            payload: self.draft.to_payload(),
        })
    }

    /// Applies the store's answer to a submission.
    pub fn finish_submit(&mut self, ticket: Ticket, result: StoreResult<FoodRecord>) -> SubmitOutcome {
        if self.phase != FormPhase::Submitting || !self.tickets.is_current(ticket) {
            return match result {
                Ok(record) => {
                    log::info!("[form] food {} saved after its form closed", record.id);
                    SubmitOutcome::SavedAfterClose(record)
                }
                Err(e) => {
                    log::debug!("[form] dropping stale submit failure: {}", e);
                    SubmitOutcome::Stale
                }
            };
        }
        match result {
            Ok(record) => {
                log::info!("[form] saved food {}", record.id);
                self.draft = DraftForm::default();
                self.errors = FormErrors::default();
                self.phase = FormPhase::Saved;
                SubmitOutcome::Saved(record)
            }
            Err(e) => {
                match self.mode {
                    FormMode::Create => log::error!("Error adding food: {}", e),
                    FormMode::Edit { .. } => log::error!("Error updating food: {}", e),
                }
                self.phase = FormPhase::Editing;
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// `begin_submit` + one store write + `finish_submit`
    pub async fn submit(&mut self, store: &dyn FoodStore) -> Result<SubmitOutcome, SubmitRejected> {
        let submission = self.begin_submit()?;
        let result = submission.send(store).await;
        Ok(self.finish_submit(submission.ticket, result))
    }

    fn reset(&mut self, mode: FormMode, draft: DraftForm) {
        self.tickets.invalidate();
        self.mode = mode;
        self.draft = draft;
        self.errors = FormErrors::default();
        self.phase = FormPhase::Editing;
    }
}
