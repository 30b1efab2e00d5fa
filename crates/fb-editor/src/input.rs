//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and pen pointer events plus key presses into a
//! unified `InputEvent` enum consumed by the editor session.

/// A normalized input event from any pointing device or the keyboard.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved (mouse move, touch move, pen move).
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },

    /// Key press, `key` being the `KeyboardEvent.key` value.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Same event with its position shifted by `(-dx, -dy)`. Key events are
    /// returned unchanged.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        match self {
            Self::PointerDown { x, y } => Self::PointerDown {
                x: x - dx,
                y: y - dy,
            },
            Self::PointerMove { x, y } => Self::PointerMove {
                x: x - dx,
                y: y - dy,
            },
            Self::PointerUp { x, y } => Self::PointerUp {
                x: x - dx,
                y: y - dy,
            },
            key @ Self::Key { .. } => key.clone(),
        }
    }
}
