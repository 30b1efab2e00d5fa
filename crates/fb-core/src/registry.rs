//! Field registry: the static catalog of field kinds the palette offers.
//!
//! The registry is the only place that knows a kind's defaults — the height,
//! option seed, and starting value a freshly dropped field receives.

use crate::model::{DEFAULT_FIELD_HEIGHT, FieldValue, Options, TEXTAREA_FIELD_HEIGHT};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::smallvec;
use std::fmt;

/// The kind of a placed field. Serialized as its lowercase tag (`"radio"`).
///
/// `Unknown` only appears for records loaded from storage whose tag is not in
/// the registry; such fields render as plain text inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Phone,
    Number,
    Checkbox,
    Radio,
    Date,
    Unknown(String),
}

impl FieldKind {
    /// The wire tag of this kind.
    pub fn tag(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Date => "date",
            FieldKind::Unknown(tag) => tag,
        }
    }

    /// Parse a wire tag. Never fails: unrecognized tags become `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => FieldKind::Text,
            "textarea" => FieldKind::Textarea,
            "email" => FieldKind::Email,
            "phone" => FieldKind::Phone,
            "number" => FieldKind::Number,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            "date" => FieldKind::Date,
            other => FieldKind::Unknown(other.to_string()),
        }
    }

    /// Whether the placeholder property means anything for this kind.
    pub fn has_placeholder(&self) -> bool {
        !matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }

    /// Height of a freshly dropped field.
    pub fn default_height(&self) -> f32 {
        match self {
            FieldKind::Textarea => TEXTAREA_FIELD_HEIGHT,
            _ => DEFAULT_FIELD_HEIGHT,
        }
    }

    /// Options a freshly dropped field starts with. Only radio has any.
    pub fn default_options(&self) -> Options {
        match self {
            FieldKind::Radio => smallvec!["Option 1".to_string(), "Option 2".to_string()],
            _ => Options::new(),
        }
    }

    /// Preview value a freshly dropped field starts with.
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Checkbox => FieldValue::Checked(false),
            FieldKind::Radio => FieldValue::Choice(String::new()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FieldKind::from_tag(&s))
    }
}

/// A palette entry: a field kind and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldType {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: &'static str,
}

static FIELD_TYPES: [FieldType; 8] = [
    FieldType {
        kind: FieldKind::Text,
        label: "Text Input",
    },
    FieldType {
        kind: FieldKind::Textarea,
        label: "Text Area",
    },
    FieldType {
        kind: FieldKind::Email,
        label: "Email",
    },
    FieldType {
        kind: FieldKind::Phone,
        label: "Phone",
    },
    FieldType {
        kind: FieldKind::Number,
        label: "Number",
    },
    FieldType {
        kind: FieldKind::Checkbox,
        label: "Checkbox",
    },
    FieldType {
        kind: FieldKind::Radio,
        label: "Radio Button",
    },
    FieldType {
        kind: FieldKind::Date,
        label: "Date",
    },
];

/// All palette entries, in display order.
pub fn list() -> &'static [FieldType] {
    &FIELD_TYPES
}

/// Find the palette entry for a wire tag.
pub fn lookup(tag: &str) -> Option<&'static FieldType> {
    FIELD_TYPES.iter().find(|t| t.kind.tag() == tag)
}
