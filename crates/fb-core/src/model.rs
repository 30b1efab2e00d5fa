//! Core data model for placed form fields.
//!
//! A form is a flat, ordered list of `FormField`s. List order is insertion
//! order and doubles as z-order: later fields are drawn on top. Fields are
//! positioned freely in canvas-local pixels; there is no layout solver.

use crate::id::FieldId;
use crate::registry::{FieldKind, FieldType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

// ─── Geometry ────────────────────────────────────────────────────────────

/// Minimum width a resize may commit.
pub const MIN_FIELD_WIDTH: f32 = 100.0;
/// Minimum height a resize may commit.
pub const MIN_FIELD_HEIGHT: f32 = 30.0;
/// Width of a freshly dropped field.
pub const DEFAULT_FIELD_WIDTH: f32 = 150.0;
/// Height of a freshly dropped field (all kinds except textarea).
pub const DEFAULT_FIELD_HEIGHT: f32 = 40.0;
/// Height of a freshly dropped textarea.
pub const TEXTAREA_FIELD_HEIGHT: f32 = 100.0;
/// Horizontal nudge applied to the drop point so the field lands under the cursor.
pub const DROP_NUDGE_X: f32 = 33.0;

/// A point in pixels. Whether it is viewport or canvas-local depends on the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    pub fn minus(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Shrink on every side by `by`. Never produces a negative size.
    pub fn inset(&self, by: f32) -> Rect {
        Rect::new(
            self.x + by,
            self.y + by,
            (self.width - 2.0 * by).max(0.0),
            (self.height - 2.0 * by).max(0.0),
        )
    }
}

// ─── Values ──────────────────────────────────────────────────────────────

/// A field's current value, keyed by field kind so its shape is known
/// statically: text-like kinds hold `Text`, checkbox holds `Checked`, radio
/// holds `Choice` (single-select; empty means nothing chosen).
///
/// `Many` is only produced when reading stored data that carries a list of
/// selections; nothing in the builder writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    Choice(String),
    Many(Vec<String>),
}

/// The JSON shape of a value: string, boolean, or array of strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Whether this value shape belongs to `kind`.
    pub fn fits(&self, kind: &FieldKind) -> bool {
        match (self, kind) {
            (FieldValue::Checked(_), FieldKind::Checkbox) => true,
            (FieldValue::Choice(_) | FieldValue::Many(_), FieldKind::Radio) => true,
            (FieldValue::Text(_), FieldKind::Checkbox | FieldKind::Radio) => false,
            (FieldValue::Text(_), _) => true,
            _ => false,
        }
    }

    /// Re-tag a value read from the wire for the field kind it belongs to.
    /// Strings on radio fields are choices; everything else is unchanged.
    pub fn keyed_to(self, kind: &FieldKind) -> FieldValue {
        match (self, kind) {
            (FieldValue::Text(s), FieldKind::Radio) => FieldValue::Choice(s),
            (other, _) => other,
        }
    }

    /// Whether the value counts as an answer for required-field checks.
    pub fn is_answered(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => !s.is_empty(),
            FieldValue::Checked(on) => *on,
            FieldValue::Many(items) => !items.is_empty(),
        }
    }

    /// Human-readable rendering used by the property panel summary.
    pub fn summary(value: Option<&FieldValue>) -> String {
        match value {
            None => "Empty".to_string(),
            Some(FieldValue::Checked(on)) => on.to_string(),
            Some(FieldValue::Many(items)) if !items.is_empty() => items.join(", "),
            Some(FieldValue::Text(s) | FieldValue::Choice(s)) if !s.is_empty() => s.clone(),
            Some(_) => "Empty".to_string(),
        }
    }

    /// The string payload, if this is a text or choice value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => serializer.serialize_str(s),
            FieldValue::Checked(on) => serializer.serialize_bool(*on),
            FieldValue::Many(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    /// Strings come back as `Text`; use [`FieldValue::keyed_to`] once the
    /// owning field's kind is known.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match WireValue::deserialize(deserializer)? {
            WireValue::Bool(on) => FieldValue::Checked(on),
            WireValue::Str(s) => FieldValue::Text(s),
            WireValue::List(items) => FieldValue::Many(items),
        })
    }
}

// ─── Fields ──────────────────────────────────────────────────────────────

/// Option list of a radio field. Two inline slots cover the seeded defaults.
pub type Options = SmallVec<[String; 2]>;

/// A field placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub required: bool,
    pub placeholder: String,
    pub options: Options,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl FormField {
    /// Instantiate a palette entry at a canvas-local position.
    pub fn from_type(id: FieldId, field_type: &FieldType, at: Point) -> Self {
        let kind = field_type.kind.clone();
        Self {
            id,
            label: field_type.label.to_string(),
            x: at.x,
            y: at.y,
            width: DEFAULT_FIELD_WIDTH,
            height: kind.default_height(),
            required: false,
            placeholder: format!("Enter {}", field_type.label.to_lowercase()),
            options: kind.default_options(),
            value: Some(kind.default_value()),
            kind,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Merge a patch into this field. Unspecified attributes are left as-is.
    ///
    /// A value whose shape does not fit this field's kind is dropped; the
    /// rest of the patch still applies.
    pub fn apply(&mut self, patch: FieldPatch) {
        let FieldPatch {
            label,
            placeholder,
            required,
            options,
            x,
            y,
            width,
            height,
            value,
        } = patch;

        if let Some(label) = label {
            self.label = label;
        }
        if let Some(placeholder) = placeholder {
            self.placeholder = placeholder;
        }
        if let Some(required) = required {
            self.required = required;
        }
        if let Some(options) = options {
            self.options = options;
        }
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if let Some(value) = value {
            if value.fits(&self.kind) {
                self.value = Some(value);
            } else {
                log::debug!(
                    "dropping {value:?} for {} field {}",
                    self.kind,
                    self.id.as_str()
                );
            }
        }
    }
}

/// A partial set of field attributes. `None` means "leave unchanged".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Options>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub value: Option<FieldValue>,
}

impl FieldPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn value(value: FieldValue) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}
