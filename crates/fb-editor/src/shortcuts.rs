//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The host page
//! should only forward keys that were not typed into an input control,
//! otherwise Backspace inside a text box would delete the whole field.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Delete the selected field.
    Delete,
    /// Clear the selection.
    Deselect,
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"Delete"`, `"Escape"`).
    /// Returns `None` if the key combo has no binding. Any command modifier
    /// (Ctrl/⌘/Alt) disables the bindings so browser shortcuts pass through.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        _shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        if ctrl || alt || meta {
            return None;
        }
        match key {
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }
}

/// Stable name of an action, as reported to the host page.
pub fn action_name(action: ShortcutAction) -> &'static str {
    match action {
        ShortcutAction::Delete => "delete",
        ShortcutAction::Deselect => "deselect",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_keys() {
        assert_eq!(
            ShortcutMap::resolve("Delete", false, false, false, false),
            Some(ShortcutAction::Delete)
        );
        assert_eq!(
            ShortcutMap::resolve("Backspace", false, true, false, false),
            Some(ShortcutAction::Delete)
        );
    }

    #[test]
    fn escape_deselects() {
        assert_eq!(
            ShortcutMap::resolve("Escape", false, false, false, false),
            Some(ShortcutAction::Deselect)
        );
    }

    #[test]
    fn command_modifiers_pass_through() {
        assert_eq!(ShortcutMap::resolve("Backspace", false, false, false, true), None);
        assert_eq!(ShortcutMap::resolve("Delete", true, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("z", false, false, false, false), None);
    }
}
