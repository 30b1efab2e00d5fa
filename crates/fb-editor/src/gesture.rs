//! Pointer gestures on placed fields.
//!
//! A press on a field's body starts a move, a press on its resize handle
//! starts a resize; at most one gesture is live at a time and releasing the
//! pointer always returns to [`Gesture::Idle`]. All points are canvas-local.
//!
//! | Press on | Effect |
//! |----------|--------|
//! | empty canvas | deselect |
//! | body | select, start move |
//! | input control | select only |
//! | resize handle | start resize, selection untouched |
//! | delete button | delete the field |

use crate::canvas::CanvasMutation;
use crate::input::InputEvent;
use fb_core::FieldId;
use fb_core::model::{FieldPatch, MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH, Point, Rect};
use fb_render::hit::{Hit, HitPart};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving a field; `grab` is the pointer's offset from the field's
    /// top-left corner at press time.
    Dragging { id: FieldId, grab: Point },
    /// Resizing a field from its bottom-right handle.
    Resizing {
        id: FieldId,
        start: Point,
        start_width: f32,
        start_height: f32,
    },
}

/// Translates pointer input over hit-tested fields into canvas mutations.
#[derive(Debug, Default)]
pub struct GestureTool {
    state: Gesture,
}

impl GestureTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Gesture {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != Gesture::Idle
    }

    /// Start moving the field whose frame is `bounds`, grabbed at `pointer`.
    pub fn begin_drag(&mut self, id: FieldId, bounds: Rect, pointer: Point) {
        self.state = Gesture::Dragging {
            id,
            grab: pointer.minus(Point::new(bounds.x, bounds.y)),
        };
    }

    /// Start resizing the field whose frame is `bounds` from `pointer`.
    pub fn begin_resize(&mut self, id: FieldId, bounds: Rect, pointer: Point) {
        self.state = Gesture::Resizing {
            id,
            start: pointer,
            start_width: bounds.width,
            start_height: bounds.height,
        };
    }

    /// Geometry update for the live gesture at `pointer`, if any.
    pub fn move_to(&self, pointer: Point) -> Option<CanvasMutation> {
        match self.state {
            Gesture::Idle => None,
            Gesture::Dragging { id, grab } => Some(CanvasMutation::UpdateField {
                id,
                patch: FieldPatch::position(
                    (pointer.x - grab.x).max(0.0),
                    (pointer.y - grab.y).max(0.0),
                ),
            }),
            Gesture::Resizing {
                id,
                start,
                start_width,
                start_height,
            } => Some(CanvasMutation::UpdateField {
                id,
                patch: FieldPatch::size(
                    (start_width + (pointer.x - start.x)).max(MIN_FIELD_WIDTH),
                    (start_height + (pointer.y - start.y)).max(MIN_FIELD_HEIGHT),
                ),
            }),
        }
    }

    pub fn end(&mut self) {
        self.state = Gesture::Idle;
    }

    /// Handle a canvas-local pointer event, returning zero or more mutations.
    pub fn handle(&mut self, event: &InputEvent, hit: Option<Hit>) -> Vec<CanvasMutation> {
        match event {
            InputEvent::PointerDown { x, y } => {
                if self.is_active() {
                    log::trace!("press ignored during {:?}", self.state);
                    return vec![];
                }
                let pointer = Point::new(*x, *y);
                let Some(hit) = hit else {
                    return vec![CanvasMutation::Select { id: None }];
                };
                match hit.part {
                    HitPart::DeleteButton => vec![CanvasMutation::RemoveField { id: hit.id }],
                    HitPart::ResizeHandle => {
                        self.begin_resize(hit.id, hit.bounds, pointer);
                        vec![]
                    }
                    HitPart::Input => vec![CanvasMutation::Select { id: Some(hit.id) }],
                    HitPart::Body => {
                        self.begin_drag(hit.id, hit.bounds, pointer);
                        vec![CanvasMutation::Select { id: Some(hit.id) }]
                    }
                }
            }
            InputEvent::PointerMove { x, y } => {
                let mutation = self.move_to(Point::new(*x, *y));
                if let Some(m) = &mutation {
                    log::trace!("gesture frame {m:?}");
                }
                mutation.into_iter().collect()
            }
            InputEvent::PointerUp { .. } => {
                self.end();
                vec![]
            }
            InputEvent::Key { .. } => vec![],
        }
    }
}
