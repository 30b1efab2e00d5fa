//! Editor session: one canvas editor, its gesture tool, and the canvas
//! origin, driven by raw viewport-coordinate input.
//!
//! The session converts every pointer event to canvas-local coordinates
//! against the *current* origin, so scrolling the page mid-gesture keeps the
//! field under the pointer.

use crate::canvas::CanvasEditor;
use crate::gesture::{Gesture, GestureTool};
use crate::input::InputEvent;
use crate::panel::{self, PanelEdit, PanelView};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use fb_core::FieldId;
use fb_core::model::{FieldValue, Point, Rect};
use fb_core::registry;
use fb_core::storage::{self, KeyValueStore, StorageError};
use fb_render::control::Control;
use fb_render::hit::{content_rect, hit_test};
use serde::Serialize;

/// What the host page needs to lay out one field on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub id: FieldId,
    pub label: String,
    pub bounds: Rect,
    /// Where the live input control sits, inside the frame.
    pub content: Rect,
    pub selected: bool,
    pub control: Control,
}

#[derive(Default)]
pub struct EditorSession {
    editor: CanvasEditor,
    tool: GestureTool,
    /// Canvas top-left corner in viewport coordinates.
    origin: Point,
}

impl EditorSession {
    pub fn new(editor: CanvasEditor) -> Self {
        Self {
            editor,
            tool: GestureTool::new(),
            origin: Point::default(),
        }
    }

    pub fn editor(&self) -> &CanvasEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CanvasEditor {
        &mut self.editor
    }

    pub fn gesture(&self) -> Gesture {
        self.tool.state()
    }

    /// Update the canvas origin (e.g. after layout or scroll).
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn to_canvas(&self, viewport: Point) -> Point {
        viewport.minus(self.origin)
    }

    /// Feed one input event in viewport coordinates. Returns `true` if the
    /// field list, the selection, or the gesture state changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Key {
            key,
            ctrl,
            shift,
            alt,
            meta,
        } = event
        {
            return self.handle_key(key, *ctrl, *shift, *alt, *meta).is_some();
        }

        let local = event.translated(self.origin.x, self.origin.y);
        let hit = match local {
            InputEvent::PointerDown { x, y } => hit_test(self.editor.fields(), Point::new(x, y)),
            _ => None,
        };
        let before = self.tool.state();
        let mutations = self.tool.handle(&local, hit);
        let mut changed = before != self.tool.state();
        for mutation in mutations {
            changed |= self.editor.apply(mutation);
        }
        changed
    }

    /// Resolve and run a keyboard shortcut. Keys are ignored while a gesture
    /// is live. Returns the action that ran.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        if self.tool.is_active() {
            return None;
        }
        let action = ShortcutMap::resolve(key, ctrl, shift, alt, meta)?;
        match action {
            ShortcutAction::Delete => {
                let id = self.editor.selected()?;
                self.editor.delete_field(id);
            }
            ShortcutAction::Deselect => {
                self.editor.selected()?;
                self.editor.select_field(None);
            }
        }
        Some(action)
    }

    // ─── Palette ─────────────────────────────────────────────────────────

    /// Start dragging the palette entry with wire tag `tag`.
    /// Returns `false` for a tag the registry does not know.
    pub fn begin_palette_drag(&mut self, tag: &str) -> bool {
        match registry::lookup(tag) {
            Some(field_type) => {
                self.editor.begin_palette_drag(field_type);
                true
            }
            None => false,
        }
    }

    /// Drop the dragged palette entry at a viewport point.
    pub fn drop_palette(&mut self, viewport: Point) -> Option<FieldId> {
        let at = self.to_canvas(viewport);
        self.editor.drop_on_canvas(at)
    }

    // ─── Field content ───────────────────────────────────────────────────

    pub fn set_field_value(&mut self, id: FieldId, value: FieldValue) -> bool {
        self.editor.set_field_value(id, value)
    }

    pub fn panel(&self) -> Option<PanelView> {
        PanelView::for_selection(&self.editor)
    }

    pub fn edit_selected(&mut self, edit: PanelEdit) -> bool {
        panel::apply_edit(&mut self.editor, edit)
    }

    /// Layout of every field in z-order.
    pub fn field_views(&self) -> Vec<FieldView> {
        let selected = self.editor.selected();
        self.editor
            .fields()
            .iter()
            .map(|field| FieldView {
                id: field.id,
                label: field.label.clone(),
                bounds: field.bounds(),
                content: content_rect(field.bounds()),
                selected: selected == Some(field.id),
                control: Control::for_field(field),
            })
            .collect()
    }

    /// Persist the field list for the form renderer.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StorageError> {
        storage::save_fields(store, self.editor.fields())
    }
}
