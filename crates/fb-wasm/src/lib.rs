//! WASM bridge for Form Draft — exposes the Rust form engine to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The builder page drives an
//! [`FbCanvas`]; the fill-in page drives an [`FbForm`]. Both talk to
//! `window.localStorage` under the same keys.

mod render2d;
mod storage;

use fb_core::FieldId;
use fb_core::model::{FieldValue, Point};
use fb_core::registry;
use fb_editor::canvas::CanvasEditor;
use fb_editor::input::InputEvent;
use fb_editor::panel::PanelEdit;
use fb_editor::session::EditorSession;
use fb_editor::shortcuts::action_name;
use fb_render::form::{FormRenderer, SubmitOutcome};
use storage::LocalStorage;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Browser clock for field ids; `SystemTime` is unavailable on wasm32.
fn js_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// The palette entries as JSON: `[{"type":"text","label":"Text Input"}, ...]`.
#[wasm_bindgen]
pub fn palette_json() -> String {
    serde_json::to_string(registry::list()).unwrap_or_else(|_| "[]".to_string())
}

// ─── Builder ─────────────────────────────────────────────────────────────

/// The WASM-facing builder controller.
///
/// Holds the editor session. All interaction from the builder page goes
/// through this struct; pointer coordinates are viewport (`clientX/Y`).
#[wasm_bindgen]
pub struct FbCanvas {
    session: EditorSession,
    width: f64,
    height: f64,
    /// Dark mode flag — `false` = light (default), `true` = dark.
    dark_mode: bool,
}

#[wasm_bindgen]
impl FbCanvas {
    /// Create a new builder controller with the given canvas dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            session: EditorSession::new(CanvasEditor::with_clock(js_millis)),
            width,
            height,
            dark_mode: false,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Tell the engine where the canvas sits in the viewport
    /// (`getBoundingClientRect().left/top`). Call on layout and scroll.
    pub fn set_canvas_origin(&mut self, left: f32, top: f32) {
        self.session.set_canvas_origin(Point::new(left, top));
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    /// Paint field chrome to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = if self.dark_mode {
            render2d::CanvasTheme::dark()
        } else {
            render2d::CanvasTheme::light()
        };
        let editor = self.session.editor();
        render2d::render_fields(
            ctx,
            editor.fields(),
            editor.selected(),
            self.width,
            self.height,
            &theme,
        );
    }

    // ─── Palette ─────────────────────────────────────────────────────────

    /// `dragstart` on a palette entry. Returns `false` for an unknown tag.
    pub fn begin_palette_drag(&mut self, tag: &str) -> bool {
        self.session.begin_palette_drag(tag)
    }

    /// `dragend` without a drop on the canvas.
    pub fn cancel_palette_drag(&mut self) {
        self.session.editor_mut().cancel_palette_drag();
    }

    /// `drop` on the canvas. Returns the new field's id, or an empty string
    /// when no palette drag was active.
    pub fn drop_palette(&mut self, x: f32, y: f32) -> String {
        self.session
            .drop_palette(Point::new(x, y))
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    // ─── Pointer / keyboard ──────────────────────────────────────────────

    /// Handle pointer down. Returns true if a re-render is needed.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.session.handle(&InputEvent::from_pointer_down(x, y))
    }

    /// Handle pointer move. Returns true if a re-render is needed.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.session.handle(&InputEvent::from_pointer_move(x, y))
    }

    /// Handle pointer up. Returns true if a re-render is needed.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.session.handle(&InputEvent::from_pointer_up(x, y))
    }

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        match self.session.handle_key(key, ctrl, shift, alt, meta) {
            Some(action) => format!(r#"{{"changed":true,"action":"{}"}}"#, action_name(action)),
            None => r#"{"changed":false,"action":"none"}"#.to_string(),
        }
    }

    // ─── Selection / fields ──────────────────────────────────────────────

    /// Get the selected field id, or empty string if none.
    pub fn get_selected_id(&self) -> String {
        self.session
            .editor()
            .selected()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default()
    }

    /// Select a field by id; an empty string deselects.
    /// Returns `true` if the field was found (or the selection cleared).
    pub fn select_by_id(&mut self, field_id: &str) -> bool {
        let editor = self.session.editor_mut();
        if field_id.is_empty() {
            editor.select_field(None);
            return true;
        }
        match FieldId::lookup(field_id) {
            Some(id) if editor.field(id).is_some() => {
                editor.select_field(Some(id));
                true
            }
            _ => false,
        }
    }

    pub fn delete_field(&mut self, field_id: &str) -> bool {
        FieldId::lookup(field_id).is_some_and(|id| self.session.editor_mut().delete_field(id))
    }

    /// Preview input in a text-like field.
    pub fn set_text_value(&mut self, field_id: &str, value: &str) -> bool {
        self.set_preview(field_id, FieldValue::Text(value.to_string()))
    }

    /// Preview toggle of a checkbox field.
    pub fn set_checked(&mut self, field_id: &str, checked: bool) -> bool {
        self.set_preview(field_id, FieldValue::Checked(checked))
    }

    /// Preview choice in a radio field.
    pub fn set_choice(&mut self, field_id: &str, option: &str) -> bool {
        self.set_preview(field_id, FieldValue::Choice(option.to_string()))
    }

    /// Every field's layout and control as a JSON array, in z-order.
    pub fn fields_json(&self) -> String {
        serde_json::to_string(&self.session.field_views()).unwrap_or_else(|_| "[]".to_string())
    }

    // ─── Property panel ──────────────────────────────────────────────────

    /// The property panel for the selection as JSON, or `null`.
    pub fn panel_json(&self) -> String {
        serde_json::to_string(&self.session.panel()).unwrap_or_else(|_| "null".to_string())
    }

    pub fn set_label(&mut self, label: &str) -> bool {
        self.session.edit_selected(PanelEdit::Label(label.to_string()))
    }

    pub fn set_placeholder(&mut self, placeholder: &str) -> bool {
        self.session
            .edit_selected(PanelEdit::Placeholder(placeholder.to_string()))
    }

    pub fn set_required(&mut self, required: bool) -> bool {
        self.session.edit_selected(PanelEdit::Required(required))
    }

    pub fn set_option(&mut self, index: usize, text: &str) -> bool {
        self.session.edit_selected(PanelEdit::OptionText {
            index,
            text: text.to_string(),
        })
    }

    pub fn add_option(&mut self) -> bool {
        self.session.edit_selected(PanelEdit::AddOption)
    }

    // ─── Persistence ─────────────────────────────────────────────────────

    /// Save the field list for the form page. Returns `false` if storage
    /// is unavailable or the write failed.
    pub fn save(&self) -> bool {
        let result = LocalStorage::open().and_then(|mut store| self.session.save(&mut store));
        if let Err(e) = &result {
            log::warn!("fields not saved: {e}");
        }
        result.is_ok()
    }
}

// ─── Form page ───────────────────────────────────────────────────────────

/// The WASM-facing fill-in form controller.
#[wasm_bindgen]
pub struct FbForm {
    renderer: FormRenderer,
}

#[wasm_bindgen]
impl FbForm {
    /// Load the saved field list. Missing storage or data yields an empty
    /// form that can still be submitted.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();
        let renderer = match LocalStorage::open() {
            Ok(store) => FormRenderer::load(&store),
            Err(e) => {
                log::warn!("form opened without storage: {e}");
                FormRenderer::default()
            }
        };
        Self { renderer }
    }

    /// Form rows as JSON: `[{"id","label","control",...}]`.
    pub fn controls_json(&self) -> String {
        serde_json::to_string(&self.renderer.controls()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn set_text(&mut self, field_id: &str, value: &str) {
        self.answer(field_id, FieldValue::Text(value.to_string()));
    }

    pub fn set_checked(&mut self, field_id: &str, checked: bool) {
        self.answer(field_id, FieldValue::Checked(checked));
    }

    pub fn set_choice(&mut self, field_id: &str, option: &str) {
        self.answer(field_id, FieldValue::Choice(option.to_string()));
    }

    /// Submit the form. On success the confirmation is shown with
    /// `window.alert`. Returns the outcome as JSON:
    /// `{"outcome":"submitted","message":"..."}` or
    /// `{"outcome":"blocked","missing":["field_..."]}`.
    pub fn submit(&self) -> String {
        let outcome = match LocalStorage::open() {
            Ok(mut store) => self.renderer.handle_submit(&mut store),
            Err(e) => {
                log::warn!("submitting without storage: {e}");
                self.renderer.handle_submit(&mut fb_core::MemoryStore::new())
            }
        };
        if let SubmitOutcome::Submitted { message } = &outcome
            && let Some(window) = web_sys::window()
            && window.alert_with_message(message).is_err()
        {
            log::debug!("confirmation dialog suppressed");
        }
        serde_json::to_string(&outcome)
            .unwrap_or_else(|_| r#"{"outcome":"submitted"}"#.to_string())
    }

    /// Go back to the builder via history navigation.
    pub fn back(&self) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok())
            && history.back().is_err()
        {
            log::debug!("history.back() failed");
        }
    }
}

impl FbCanvas {
    fn set_preview(&mut self, field_id: &str, value: FieldValue) -> bool {
        FieldId::lookup(field_id).is_some_and(|id| self.session.set_field_value(id, value))
    }
}

impl FbForm {
    /// Ids from the page that were never loaded are dropped.
    fn answer(&mut self, field_id: &str, value: FieldValue) {
        match FieldId::lookup(field_id) {
            Some(id) => self.renderer.handle_input_change(id, value),
            None => log::debug!("answer for unknown field {field_id:?} ignored"),
        }
    }
}

impl Default for FbForm {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Panic hook and console logging ──────────────────────────────────────

/// Most verbose level forwarded to the browser console. Storage problems
/// are reported at warn, so warn always gets through.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            wasm_logger::init(wasm_logger::Config::new(console_log_level()));
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Form Draft WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
