//! Persisted wire format and the key-value store seam.
//!
//! The builder writes its field list under [`FIELDS_KEY`]; the form renderer
//! reads it back and writes answers under [`SUBMISSION_KEY`]. Geometry is a
//! builder concern and is not part of the persisted record.

use crate::id::FieldId;
use crate::model::{FieldValue, FormField, Options};
use crate::registry::FieldKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Storage key of the serialized field list.
pub const FIELDS_KEY: &str = "fieldsData";
/// Storage key of the last form submission.
pub const SUBMISSION_KEY: &str = "submitedForm";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("malformed `{key}` payload: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key-value store, modelled on the browser's `Storage` interface.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for native use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─── Field list ──────────────────────────────────────────────────────────

/// One persisted field: `{ id, type, label, required, placeholder, options, value }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub options: Options,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl From<&FormField> for FieldRecord {
    fn from(field: &FormField) -> Self {
        Self {
            id: field.id,
            kind: field.kind.clone(),
            label: field.label.clone(),
            required: field.required,
            placeholder: field.placeholder.clone(),
            options: field.options.clone(),
            value: field.value.clone(),
        }
    }
}

/// Serialize the builder's field list under [`FIELDS_KEY`].
pub fn save_fields<S: KeyValueStore + ?Sized>(
    store: &mut S,
    fields: &[FormField],
) -> Result<(), StorageError> {
    let records: Vec<FieldRecord> = fields.iter().map(FieldRecord::from).collect();
    let json = serde_json::to_string(&records).map_err(|source| StorageError::Encode {
        key: FIELDS_KEY,
        source,
    })?;
    store.set_item(FIELDS_KEY, &json)?;
    log::debug!("saved {} field(s) to `{FIELDS_KEY}`", records.len());
    Ok(())
}

/// Read the stored field list. An absent key is an empty list; a payload
/// that does not parse is an error.
pub fn read_fields<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<FieldRecord>, StorageError> {
    let Some(json) = store.get_item(FIELDS_KEY)? else {
        return Ok(Vec::new());
    };
    let mut records: Vec<FieldRecord> =
        serde_json::from_str(&json).map_err(|source| StorageError::Malformed {
            key: FIELDS_KEY,
            source,
        })?;
    for record in &mut records {
        record.value = record.value.take().map(|v| v.keyed_to(&record.kind));
    }
    Ok(records)
}

/// Like [`read_fields`], but any failure degrades to an empty list.
pub fn load_fields<S: KeyValueStore + ?Sized>(store: &S) -> Vec<FieldRecord> {
    read_fields(store).unwrap_or_else(|e| {
        log::warn!("ignoring stored fields: {e}");
        Vec::new()
    })
}

// ─── Submissions ─────────────────────────────────────────────────────────

/// A form submission snapshot: `{ "data": { <fieldId>: value } }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Submission {
    pub data: BTreeMap<String, FieldValue>,
}

/// Write a submission under [`SUBMISSION_KEY`], replacing any previous one.
pub fn write_submission<S: KeyValueStore + ?Sized>(
    store: &mut S,
    submission: &Submission,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(submission).map_err(|source| StorageError::Encode {
        key: SUBMISSION_KEY,
        source,
    })?;
    store.set_item(SUBMISSION_KEY, &json)
}

/// Read back the last submission, if any.
pub fn read_submission<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<Submission>, StorageError> {
    store
        .get_item(SUBMISSION_KEY)?
        .map(|json| {
            serde_json::from_str(&json).map_err(|source| StorageError::Malformed {
                key: SUBMISSION_KEY,
                source,
            })
        })
        .transpose()
}
