//! Integration tests: builder → storage → form renderer
//! (fb-editor ↔ fb-core storage ↔ fb-render form).

use fb_core::KeyValueStore;
use fb_core::model::{FieldValue, Point};
use fb_core::storage::{FIELDS_KEY, MemoryStore, SUBMISSION_KEY, read_submission};
use fb_editor::canvas::CanvasEditor;
use fb_editor::panel::PanelEdit;
use fb_editor::session::EditorSession;
use fb_render::form::{FormRenderer, SubmitOutcome};
use pretty_assertions::assert_eq;

fn build_contact_form() -> EditorSession {
    let mut s = EditorSession::new(CanvasEditor::new());
    for (tag, y) in [("text", 40.0), ("email", 120.0), ("radio", 200.0), ("checkbox", 320.0)] {
        assert!(s.begin_palette_drag(tag));
        s.drop_palette(Point::new(140.0, y)).unwrap();
    }
    // The checkbox is still selected; rename it, then grow the radio.
    assert!(s.edit_selected(PanelEdit::Label("Subscribe".into())));
    let radio = s.editor().fields()[2].id;
    s.editor_mut().select_field(Some(radio));
    assert!(s.edit_selected(PanelEdit::AddOption));
    s
}

#[test]
fn saved_fields_load_in_the_same_order() {
    let session = build_contact_form();
    let mut store = MemoryStore::new();
    session.save(&mut store).unwrap();

    let form = FormRenderer::load(&store);
    let built = session.editor().fields();
    let loaded = form.fields();

    assert_eq!(loaded.len(), built.len());
    for (b, l) in built.iter().zip(loaded) {
        assert_eq!(l.id, b.id);
        assert_eq!(l.kind, b.kind);
        assert_eq!(l.label, b.label);
        assert_eq!(l.options, b.options);
    }
    assert_eq!(
        loaded.iter().map(|f| f.label.as_str()).collect::<Vec<_>>(),
        vec!["Text Input", "Email", "Radio Button", "Subscribe"]
    );
    assert_eq!(loaded[2].options.len(), 3);
}

#[test]
fn builder_preview_values_do_not_leak_into_answers() {
    let mut session = build_contact_form();
    let text = session.editor().fields()[0].id;
    session.set_field_value(text, FieldValue::Text("typed in the builder".into()));
    let mut store = MemoryStore::new();
    session.save(&mut store).unwrap();

    let mut form = FormRenderer::load(&store);
    assert_eq!(form.answer(text), None);

    let email = form.fields()[1].id;
    form.handle_input_change(email, FieldValue::Text("ada@example.com".into()));
    assert!(matches!(form.handle_submit(&mut store), SubmitOutcome::Submitted { .. }));

    let submission = read_submission(&store).unwrap().unwrap();
    assert_eq!(submission.data.len(), 1);
    assert_eq!(
        submission.data.get(email.as_str()),
        Some(&FieldValue::Text("ada@example.com".into()))
    );
}

#[test]
fn missing_builder_data_renders_an_empty_submittable_form() {
    let mut store = MemoryStore::new();
    let form = FormRenderer::load(&store);
    assert!(form.fields().is_empty());
    assert_eq!(store.get_item(FIELDS_KEY).unwrap(), None);

    let outcome = form.handle_submit(&mut store);
    assert_eq!(
        outcome,
        SubmitOutcome::Submitted {
            message: "Form submitted successfully!"
        }
    );
    assert_eq!(
        store.get_item(SUBMISSION_KEY).unwrap().as_deref(),
        Some(r#"{"data":{}}"#)
    );
}
