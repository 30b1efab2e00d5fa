//! Control descriptors: which input control a field renders as.
//!
//! One policy serves both the builder's live preview and the fillable form,
//! so a field looks and behaves the same in both places.
//!
//! | Kind | Control |
//! |------|---------|
//! | text, email, phone, number, date | single-line input of that type |
//! | textarea | multi-line input |
//! | checkbox | single toggle, label inline |
//! | radio | one toggle per option, exclusive group named by field id |
//! | anything else | single-line text input |

use fb_core::FieldId;
use fb_core::model::{FieldValue, FormField};
use fb_core::registry::FieldKind;
use fb_core::storage::FieldRecord;
use serde::Serialize;

/// Rows of a textarea in the fillable form.
pub const TEXTAREA_ROWS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "camelCase")]
pub enum Control {
    #[serde(rename_all = "camelCase")]
    Input {
        input_type: &'static str,
        placeholder: String,
        value: String,
        required: bool,
    },
    #[serde(rename_all = "camelCase")]
    TextArea {
        placeholder: String,
        value: String,
        rows: u32,
        required: bool,
    },
    #[serde(rename_all = "camelCase")]
    Checkbox {
        /// Caption drawn beside the box.
        inline_label: String,
        checked: bool,
        required: bool,
    },
    #[serde(rename_all = "camelCase")]
    RadioGroup {
        /// Exclusive group name; the owning field's id.
        name: String,
        options: Vec<RadioOption>,
        required: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioOption {
    pub label: String,
    pub checked: bool,
}

/// The attributes a control is built from, borrowed from either a placed
/// field or a stored record.
struct Parts<'a> {
    id: FieldId,
    kind: &'a FieldKind,
    label: &'a str,
    placeholder: &'a str,
    options: &'a [String],
    required: bool,
    value: Option<&'a FieldValue>,
}

impl Control {
    /// Control for a field on the builder canvas, showing its preview value.
    pub fn for_field(field: &FormField) -> Self {
        Self::build(Parts {
            id: field.id,
            kind: &field.kind,
            label: &field.label,
            placeholder: &field.placeholder,
            options: &field.options,
            required: field.required,
            value: field.value.as_ref(),
        })
    }

    /// Control for a stored field in the fillable form, showing `answer`.
    /// The record's own preview value is deliberately ignored.
    pub fn for_record(record: &FieldRecord, answer: Option<&FieldValue>) -> Self {
        Self::build(Parts {
            id: record.id,
            kind: &record.kind,
            label: &record.label,
            placeholder: &record.placeholder,
            options: &record.options,
            required: record.required,
            value: answer,
        })
    }

    fn build(parts: Parts<'_>) -> Self {
        let text = || {
            parts
                .value
                .and_then(FieldValue::as_str)
                .unwrap_or_default()
                .to_string()
        };
        match parts.kind {
            FieldKind::Textarea => Control::TextArea {
                placeholder: parts.placeholder.to_string(),
                value: text(),
                rows: TEXTAREA_ROWS,
                required: parts.required,
            },
            FieldKind::Checkbox => Control::Checkbox {
                inline_label: parts.label.to_string(),
                checked: matches!(parts.value, Some(FieldValue::Checked(true))),
                required: parts.required,
            },
            FieldKind::Radio => Control::RadioGroup {
                name: parts.id.as_str().to_string(),
                options: parts
                    .options
                    .iter()
                    .map(|option| RadioOption {
                        label: option.clone(),
                        checked: is_chosen(parts.value, option),
                    })
                    .collect(),
                required: parts.required,
            },
            kind => Control::Input {
                input_type: input_type(kind),
                placeholder: parts.placeholder.to_string(),
                value: text(),
                required: parts.required,
            },
        }
    }
}

/// HTML input type for single-line kinds.
pub fn input_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Phone => "tel",
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        _ => "text",
    }
}

fn is_chosen(value: Option<&FieldValue>, option: &str) -> bool {
    match value {
        Some(FieldValue::Choice(chosen)) => chosen == option,
        Some(FieldValue::Many(chosen)) => chosen.iter().any(|c| c == option),
        _ => false,
    }
}
