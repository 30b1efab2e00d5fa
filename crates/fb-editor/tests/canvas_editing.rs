//! Integration tests: canvas editing through the editor session
//! (fb-editor ↔ fb-render hit testing ↔ fb-core model).

use fb_core::FieldId;
use fb_core::model::*;
use fb_core::registry;
use fb_editor::canvas::CanvasEditor;
use fb_editor::gesture::Gesture;
use fb_editor::input::InputEvent;
use fb_editor::panel::{PanelEdit, PanelView};
use fb_editor::session::EditorSession;
use pretty_assertions::assert_eq;

fn session() -> EditorSession {
    EditorSession::new(CanvasEditor::new())
}

fn drop_field(session: &mut EditorSession, tag: &str, x: f32, y: f32) -> FieldId {
    assert!(session.begin_palette_drag(tag));
    session
        .drop_palette(Point::new(x, y))
        .expect("palette drop should create a field")
}

fn field(session: &EditorSession, id: FieldId) -> FormField {
    session.editor().field(id).cloned().expect("field exists")
}

// ─── Creation ───────────────────────────────────────────────────────────

#[test]
fn checkbox_drop_uses_registry_defaults() {
    let mut s = session();
    let id = drop_field(&mut s, "checkbox", 100.0, 50.0);
    let f = field(&s, id);

    assert_eq!((f.x, f.y, f.width, f.height), (67.0, 50.0, 150.0, 40.0));
    assert_eq!(f.value, Some(FieldValue::Checked(false)));
    assert!(f.options.is_empty());
    assert_eq!(s.editor().selected(), Some(id));
}

#[test]
fn drop_point_is_measured_from_canvas_origin() {
    let mut s = session();
    s.set_canvas_origin(Point::new(280.0, 90.0));
    let id = drop_field(&mut s, "text", 380.0, 140.0);
    let f = field(&s, id);
    assert_eq!((f.x, f.y), (67.0, 50.0));
}

#[test]
fn created_ids_are_pairwise_distinct() {
    let mut editor = CanvasEditor::with_clock(|| 1_800_000_000_000);
    let mut ids: Vec<FieldId> = registry::list()
        .iter()
        .cycle()
        .take(40)
        .map(|t| editor.create_field(t, Point::new(100.0, 100.0)))
        .collect();
    let total = ids.len();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), total);
}

// ─── Radio options ──────────────────────────────────────────────────────

#[test]
fn radio_add_option_appends_numbered_entry() {
    let mut s = session();
    let id = drop_field(&mut s, "radio", 200.0, 200.0);
    assert_eq!(field(&s, id).options.to_vec(), vec!["Option 1", "Option 2"]);

    assert!(s.edit_selected(PanelEdit::AddOption));
    assert_eq!(
        field(&s, id).options.to_vec(),
        vec!["Option 1", "Option 2", "Option 3"]
    );
}

// ─── Drag ───────────────────────────────────────────────────────────────

#[test]
fn body_drag_moves_field_and_releases() {
    let mut s = session();
    let id = drop_field(&mut s, "text", 133.0, 100.0); // frame at (100,100) 150×40
    s.editor_mut().select_field(None);

    // Grab the left border ring, 2px in from the frame edge.
    assert!(s.handle(&InputEvent::from_pointer_down(102.0, 120.0)));
    assert_eq!(s.editor().selected(), Some(id));
    assert!(matches!(s.gesture(), Gesture::Dragging { .. }));

    s.handle(&InputEvent::from_pointer_move(152.0, 170.0));
    let f = field(&s, id);
    assert_eq!((f.x, f.y), (150.0, 150.0));

    s.handle(&InputEvent::from_pointer_up(152.0, 170.0));
    assert_eq!(s.gesture(), Gesture::Idle);

    // After release, moves no longer touch the field.
    s.handle(&InputEvent::from_pointer_move(400.0, 400.0));
    let f = field(&s, id);
    assert_eq!((f.x, f.y), (150.0, 150.0));
}

#[test]
fn drag_never_commits_negative_positions() {
    let mut s = session();
    let id = drop_field(&mut s, "text", 133.0, 100.0);
    s.handle(&InputEvent::from_pointer_down(102.0, 120.0));
    for (x, y) in [(50.0, 60.0), (-300.0, 10.0), (5.0, -500.0), (-1.0, -1.0)] {
        s.handle(&InputEvent::from_pointer_move(x, y));
        let f = field(&s, id);
        assert!(f.x >= 0.0 && f.y >= 0.0, "({}, {}) escaped the canvas", f.x, f.y);
    }
    let f = field(&s, id);
    assert_eq!((f.x, f.y), (0.0, 0.0));
}

#[test]
fn pressing_the_input_selects_without_dragging() {
    let mut s = session();
    let id = drop_field(&mut s, "text", 133.0, 100.0);
    s.editor_mut().select_field(None);

    s.handle(&InputEvent::from_pointer_down(150.0, 120.0));
    assert_eq!(s.editor().selected(), Some(id));
    assert_eq!(s.gesture(), Gesture::Idle);

    s.handle(&InputEvent::from_pointer_move(300.0, 300.0));
    assert_eq!(field(&s, id).bounds(), Rect::new(100.0, 100.0, 150.0, 40.0));
}

#[test]
fn pressing_empty_canvas_deselects() {
    let mut s = session();
    drop_field(&mut s, "text", 133.0, 100.0);
    assert!(s.handle(&InputEvent::from_pointer_down(600.0, 500.0)));
    assert_eq!(s.editor().selected(), None);
}

// ─── Resize ─────────────────────────────────────────────────────────────

#[test]
fn resize_clamps_height_to_minimum() {
    let mut s = session();
    // Frame at (50,110) 150×40: the handle covers (192..200, 142..150).
    let id = drop_field(&mut s, "email", 83.0, 110.0);
    // Scroll the page: canvas (196, 146) is now viewport (200, 150).
    s.set_canvas_origin(Point::new(4.0, 4.0));
    let other = drop_field(&mut s, "text", 600.0, 600.0);
    s.editor_mut().select_field(Some(other));

    assert!(s.handle(&InputEvent::from_pointer_down(200.0, 150.0)));
    assert!(matches!(s.gesture(), Gesture::Resizing { .. }));
    assert_eq!(s.editor().selected(), Some(other), "resize must not select");

    s.handle(&InputEvent::from_pointer_move(280.0, 130.0));
    let f = field(&s, id);
    assert_eq!((f.width, f.height), (230.0, 30.0));
    assert_eq!((f.x, f.y), (50.0, 110.0), "resize must not move");

    s.handle(&InputEvent::from_pointer_up(280.0, 130.0));
    assert_eq!(s.gesture(), Gesture::Idle);
}

#[test]
fn resize_never_commits_below_minimums() {
    let mut s = session();
    let id = drop_field(&mut s, "textarea", 133.0, 100.0); // (100,100) 150×100
    s.handle(&InputEvent::from_pointer_down(246.0, 196.0));
    for (x, y) in [(0.0, 0.0), (150.0, 140.0), (-999.0, 500.0), (700.0, -20.0)] {
        s.handle(&InputEvent::from_pointer_move(x, y));
        let f = field(&s, id);
        assert!(f.width >= MIN_FIELD_WIDTH, "width {}", f.width);
        assert!(f.height >= MIN_FIELD_HEIGHT, "height {}", f.height);
    }
}

// ─── Delete ─────────────────────────────────────────────────────────────

#[test]
fn delete_button_removes_exactly_one_field() {
    let mut s = session();
    let keep = drop_field(&mut s, "text", 133.0, 300.0);
    let gone = drop_field(&mut s, "text", 133.0, 100.0); // (100,100) 150×40
    assert_eq!(s.editor().selected(), Some(gone));

    assert!(s.handle(&InputEvent::from_pointer_down(250.0, 96.0)));
    assert_eq!(s.editor().fields().len(), 1);
    assert!(s.editor().field(gone).is_none());
    assert!(s.editor().field(keep).is_some());
    assert_eq!(s.editor().selected(), None);
    assert_eq!(s.gesture(), Gesture::Idle);
}

#[test]
fn deleting_is_idempotent_and_keeps_unrelated_selection() {
    let mut editor = CanvasEditor::new();
    let a = editor.create_field(registry::lookup("text").unwrap(), Point::default());
    let b = editor.create_field(registry::lookup("date").unwrap(), Point::default());
    assert_eq!(editor.selected(), Some(b));

    assert!(editor.delete_field(a));
    assert_eq!(editor.selected(), Some(b));
    assert!(!editor.delete_field(a));
    assert_eq!(editor.fields().len(), 1);
}

#[test]
fn delete_key_removes_selected_field() {
    let mut s = session();
    let id = drop_field(&mut s, "number", 133.0, 100.0);
    assert!(s.handle(&InputEvent::Key {
        key: "Delete".into(),
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    }));
    assert!(s.editor().field(id).is_none());
    assert!(s.handle_key("Escape", false, false, false, false).is_none());
}

// ─── Update funnel ──────────────────────────────────────────────────────

#[test]
fn update_with_partial_patch_leaves_the_rest() {
    let mut editor = CanvasEditor::new();
    let id = editor.create_field(registry::lookup("radio").unwrap(), Point::new(90.0, 40.0));
    let before = editor.field(id).cloned().unwrap();

    assert!(editor.update_field(id, FieldPatch::size(300.0, 90.0)));
    let after = editor.field(id).cloned().unwrap();
    assert_eq!(
        after,
        FormField {
            width: 300.0,
            height: 90.0,
            ..before
        }
    );
}

#[test]
fn update_on_unknown_id_is_a_noop() {
    let mut editor = CanvasEditor::new();
    editor.create_field(registry::lookup("text").unwrap(), Point::default());
    let snapshot = editor.fields().to_vec();
    assert!(!editor.update_field(FieldId::intern("field_missing"), FieldPatch::position(1.0, 1.0)));
    assert_eq!(editor.fields(), snapshot.as_slice());
}

#[test]
fn preview_values_show_up_in_the_panel() {
    let mut s = session();
    let id = drop_field(&mut s, "radio", 133.0, 100.0);
    assert!(s.set_field_value(id, FieldValue::Choice("Option 2".into())));
    let view = s.panel().unwrap();
    assert_eq!(
        view,
        PanelView {
            id,
            kind: "radio".into(),
            label: "Radio Button".into(),
            placeholder: None,
            required: false,
            options: Some(vec!["Option 1".into(), "Option 2".into()]),
            value_summary: "Option 2".into(),
            options_summary: Some("[Option 1, Option 2]".into()),
        }
    );
}

#[test]
fn field_views_follow_z_order_and_selection() {
    let mut s = session();
    let a = drop_field(&mut s, "text", 133.0, 100.0);
    let b = drop_field(&mut s, "textarea", 333.0, 100.0);
    let views = s.field_views();
    assert_eq!(views.iter().map(|v| v.id).collect::<Vec<_>>(), vec![a, b]);
    assert!(!views[0].selected);
    assert!(views[1].selected);
    assert_eq!(views[0].content, Rect::new(110.0, 110.0, 130.0, 20.0));
}
