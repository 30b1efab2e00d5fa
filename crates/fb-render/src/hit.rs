//! Hit testing: point → field affordance lookup.
//!
//! Walks the field list back to front (last drawn = topmost) and reports
//! which part of which field sits under a canvas-local point. The part
//! decides what a press does: the delete button deletes, the resize handle
//! resizes, the inner control takes input, and only the body starts a move.

use fb_core::FieldId;
use fb_core::model::{FormField, Point, Rect};

/// Side of the square delete button.
pub const DELETE_BUTTON_SIZE: f32 = 24.0;
/// How far the delete button sticks out past the field's top-right corner.
pub const DELETE_BUTTON_OVERHANG: f32 = 8.0;
/// Side of the square resize handle in the bottom-right corner.
pub const RESIZE_HANDLE_SIZE: f32 = 8.0;
/// Border plus padding between the field frame and its input control.
pub const CONTENT_INSET: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    DeleteButton,
    ResizeHandle,
    Input,
    Body,
}

/// Result of a hit test: the field, the part under the point, and the
/// field's bounds at the time of the test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: FieldId,
    pub part: HitPart,
    pub bounds: Rect,
}

pub fn delete_button_rect(bounds: Rect) -> Rect {
    Rect::new(
        bounds.x + bounds.width + DELETE_BUTTON_OVERHANG - DELETE_BUTTON_SIZE,
        bounds.y - DELETE_BUTTON_OVERHANG,
        DELETE_BUTTON_SIZE,
        DELETE_BUTTON_SIZE,
    )
}

pub fn resize_handle_rect(bounds: Rect) -> Rect {
    Rect::new(
        bounds.x + bounds.width - RESIZE_HANDLE_SIZE,
        bounds.y + bounds.height - RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
    )
}

/// Area occupied by the field's input control.
pub fn content_rect(bounds: Rect) -> Rect {
    bounds.inset(CONTENT_INSET)
}

/// Find the topmost field affordance at `p`.
/// Returns `None` if the point is over empty canvas.
pub fn hit_test(fields: &[FormField], p: Point) -> Option<Hit> {
    fields.iter().rev().find_map(|field| {
        let bounds = field.bounds();
        let part = hit_part(bounds, p)?;
        Some(Hit {
            id: field.id,
            part,
            bounds,
        })
    })
}

fn hit_part(bounds: Rect, p: Point) -> Option<HitPart> {
    // The delete button overhangs the frame, so it is tested first.
    if delete_button_rect(bounds).contains(p) {
        Some(HitPart::DeleteButton)
    } else if resize_handle_rect(bounds).contains(p) {
        Some(HitPart::ResizeHandle)
    } else if content_rect(bounds).contains(p) {
        Some(HitPart::Input)
    } else if bounds.contains(p) {
        Some(HitPart::Body)
    } else {
        None
    }
}
