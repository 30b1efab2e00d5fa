//! Form renderer: turns a stored field list into a fillable form.
//!
//! Answers live in their own map, independent of the builder's preview
//! values. Submitting writes `{ "data": answers }` to storage.
//!
//! Required fields are enforced the same way for every control: text-like
//! fields need a non-empty string, checkboxes must be ticked, and radio
//! groups need a choice. A submit with unanswered required fields writes
//! nothing and reports which fields are missing.

use crate::control::Control;
use fb_core::FieldId;
use fb_core::model::FieldValue;
use fb_core::storage::{self, FieldRecord, KeyValueStore, Submission};
use serde::Serialize;

/// Confirmation shown after every accepted submit.
pub const SUBMIT_CONFIRMATION: &str = "Form submitted successfully!";

/// One row of the rendered form: a caption and its control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormControl {
    pub id: FieldId,
    pub label: String,
    #[serde(flatten)]
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    Submitted { message: &'static str },
    Blocked { missing: Vec<FieldId> },
}

#[derive(Debug, Clone, Default)]
pub struct FormRenderer {
    fields: Vec<FieldRecord>,
    answers: Submission,
}

impl FormRenderer {
    /// Load the field list saved by the builder. Absent or unreadable data
    /// yields an empty form that can still be submitted.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let fields = storage::load_fields(store);
        log::debug!("form renderer loaded {} field(s)", fields.len());
        Self::from_records(fields)
    }

    pub fn from_records(fields: Vec<FieldRecord>) -> Self {
        Self {
            fields,
            answers: Submission::default(),
        }
    }

    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }

    /// Rows of the form in stored order, each showing its current answer.
    pub fn controls(&self) -> Vec<FormControl> {
        self.fields
            .iter()
            .map(|record| FormControl {
                id: record.id,
                label: record.label.clone(),
                control: Control::for_record(record, self.answer(record.id)),
            })
            .collect()
    }

    pub fn answer(&self, id: FieldId) -> Option<&FieldValue> {
        self.answers.data.get(id.as_str())
    }

    /// Record an answer. Strings for radio fields are stored as choices.
    pub fn handle_input_change(&mut self, id: FieldId, value: FieldValue) {
        let value = match self.fields.iter().find(|f| f.id == id) {
            Some(record) => value.keyed_to(&record.kind),
            None => value,
        };
        self.answers.data.insert(id.as_str().to_string(), value);
    }

    /// Required fields that have no answer yet, in form order.
    pub fn missing_required(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| !self.answer(f.id).is_some_and(FieldValue::is_answered))
            .map(|f| f.id)
            .collect()
    }

    /// Submit the form. A failed storage write is logged but still reported
    /// as a successful submit.
    pub fn handle_submit<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> SubmitOutcome {
        let missing = self.missing_required();
        if !missing.is_empty() {
            log::debug!("submit blocked by {} required field(s)", missing.len());
            return SubmitOutcome::Blocked { missing };
        }
        if let Err(e) = storage::write_submission(store, &self.answers) {
            log::warn!("submission not stored: {e}");
        }
        SubmitOutcome::Submitted {
            message: SUBMIT_CONFIRMATION,
        }
    }
}
