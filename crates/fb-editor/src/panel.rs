//! Property panel for the selected field.
//!
//! The panel is a view plus a set of edits. It never holds field data of its
//! own: the view is rebuilt from the editor on demand and every edit is
//! turned into a patch for [`CanvasEditor::update_field`].

use crate::canvas::CanvasEditor;
use fb_core::FieldId;
use fb_core::model::{FieldPatch, FieldValue, FormField};
use fb_core::registry::FieldKind;
use serde::Serialize;

/// Snapshot of what the panel shows for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    /// `None` when the kind has no placeholder (checkbox, radio).
    pub placeholder: Option<String>,
    pub required: bool,
    /// Editable option strings; `None` unless the field is a radio.
    pub options: Option<Vec<String>>,
    pub value_summary: String,
    /// `[a, b]` rendering of the options, present only when there are any.
    pub options_summary: Option<String>,
}

impl PanelView {
    pub fn of(field: &FormField) -> Self {
        Self {
            id: field.id,
            kind: field.kind.tag().to_string(),
            label: field.label.clone(),
            placeholder: field
                .kind
                .has_placeholder()
                .then(|| field.placeholder.clone()),
            required: field.required,
            options: (field.kind == FieldKind::Radio).then(|| field.options.to_vec()),
            value_summary: FieldValue::summary(field.value.as_ref()),
            options_summary: (!field.options.is_empty())
                .then(|| format!("[{}]", field.options.join(", "))),
        }
    }

    /// View of the selected field, or `None` when nothing is selected.
    pub fn for_selection(editor: &CanvasEditor) -> Option<Self> {
        editor.selected_field().map(Self::of)
    }
}

/// An edit made in the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEdit {
    Label(String),
    Placeholder(String),
    Required(bool),
    /// Replace the text of the option at `index`.
    OptionText { index: usize, text: String },
    /// Append `Option N`, N being the new option count.
    AddOption,
}

impl PanelEdit {
    /// The patch this edit makes to `field`, or `None` if the edit does not
    /// apply (placeholder on a checkbox, options on a text field, an option
    /// index past the end).
    pub fn patch_for(self, field: &FormField) -> Option<FieldPatch> {
        let patch = match self {
            PanelEdit::Label(label) => FieldPatch {
                label: Some(label),
                ..FieldPatch::default()
            },
            PanelEdit::Placeholder(placeholder) if field.kind.has_placeholder() => FieldPatch {
                placeholder: Some(placeholder),
                ..FieldPatch::default()
            },
            PanelEdit::Required(required) => FieldPatch {
                required: Some(required),
                ..FieldPatch::default()
            },
            PanelEdit::OptionText { index, text }
                if field.kind == FieldKind::Radio && index < field.options.len() =>
            {
                let mut options = field.options.clone();
                options[index] = text;
                FieldPatch {
                    options: Some(options),
                    ..FieldPatch::default()
                }
            }
            PanelEdit::AddOption if field.kind == FieldKind::Radio => {
                let mut options = field.options.clone();
                options.push(format!("Option {}", options.len() + 1));
                FieldPatch {
                    options: Some(options),
                    ..FieldPatch::default()
                }
            }
            _ => return None,
        };
        Some(patch)
    }
}

/// Apply a panel edit to the selected field. Returns `true` if it changed
/// anything.
pub fn apply_edit(editor: &mut CanvasEditor, edit: PanelEdit) -> bool {
    let Some(field) = editor.selected_field() else {
        return false;
    };
    let id = field.id;
    let Some(patch) = edit.patch_for(field) else {
        log::debug!("panel edit does not apply to {} field {id}", field.kind);
        return false;
    };
    editor.update_field(id, patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::model::Point;
    use fb_core::registry;
    use pretty_assertions::assert_eq;

    fn editor_with(tag: &str) -> CanvasEditor {
        let mut editor = CanvasEditor::new();
        editor.create_field(registry::lookup(tag).unwrap(), Point::new(100.0, 100.0));
        editor
    }

    #[test]
    fn placeholder_is_hidden_for_choice_kinds() {
        let editor = editor_with("checkbox");
        let view = PanelView::for_selection(&editor).unwrap();
        assert_eq!(view.placeholder, None);
        assert_eq!(view.options, None);
        assert_eq!(view.value_summary, "false");

        let editor = editor_with("phone");
        let view = PanelView::for_selection(&editor).unwrap();
        assert_eq!(view.placeholder.as_deref(), Some("Enter phone"));
        assert_eq!(view.value_summary, "Empty");
    }

    #[test]
    fn placeholder_edit_on_checkbox_is_ignored() {
        let mut editor = editor_with("checkbox");
        assert!(!apply_edit(&mut editor, PanelEdit::Placeholder("x".into())));
        assert_eq!(editor.fields()[0].placeholder, "Enter checkbox");
    }

    #[test]
    fn option_text_edit_replaces_in_place() {
        let mut editor = editor_with("radio");
        assert!(apply_edit(
            &mut editor,
            PanelEdit::OptionText {
                index: 1,
                text: "Maybe".into()
            }
        ));
        let view = PanelView::for_selection(&editor).unwrap();
        assert_eq!(view.options, Some(vec!["Option 1".into(), "Maybe".into()]));
        assert_eq!(view.options_summary.as_deref(), Some("[Option 1, Maybe]"));
        assert!(!apply_edit(
            &mut editor,
            PanelEdit::OptionText {
                index: 5,
                text: "nope".into()
            }
        ));
    }

    #[test]
    fn empty_strings_are_accepted() {
        let mut editor = editor_with("text");
        assert!(apply_edit(&mut editor, PanelEdit::Label(String::new())));
        assert_eq!(editor.fields()[0].label, "");
    }

    #[test]
    fn no_selection_means_no_edit() {
        let mut editor = editor_with("text");
        editor.select_field(None);
        assert!(PanelView::for_selection(&editor).is_none());
        assert!(!apply_edit(&mut editor, PanelEdit::Required(true)));
        assert!(!editor.fields()[0].required);
    }
}
