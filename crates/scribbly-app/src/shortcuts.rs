//! Keyboard shortcut registry and documentation.

use scribbly_core::{ColorMode, ShapeMode};
use winit::keyboard::{Key, NamedKey};

use crate::ui::UiAction;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+S").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("F", false, false, "Toggle fullscreen"),
            Shortcut::new("Delete", false, false, "Clear the canvas"),
            Shortcut::new("Backspace", false, false, "Clear the canvas"),
            Shortcut::new("R", false, false, "Rainbow color"),
            Shortcut::new("1", false, false, "Line brush"),
            Shortcut::new("2", false, false, "Star stamp"),
            Shortcut::new("3", false, false, "Moon stamp"),
            Shortcut::new("4", false, false, "Heart stamp"),
            Shortcut::new("5", false, false, "Smiley stamp"),
            Shortcut::new("6", false, false, "Square stamp"),
            Shortcut::new("7", false, false, "Triangle stamp"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }

    /// Action bound to a pressed key, if any.
    pub fn action_for(key: &Key) -> Option<UiAction> {
        match key {
            Key::Named(NamedKey::Delete | NamedKey::Backspace) => Some(UiAction::ClearAll),
            Key::Character(c) => {
                let c = c.to_lowercase();
                match c.as_str() {
                    "f" => Some(UiAction::ToggleFullscreen),
                    "r" => Some(UiAction::SetColor(ColorMode::Rainbow)),
                    digit => {
                        let index = digit.parse::<usize>().ok()?.checked_sub(1)?;
                        ShapeMode::ALL.get(index).copied().map(UiAction::SetShape)
                    }
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(Shortcut::new("S", true, true, "").format(), "Ctrl+Shift+S");
        assert_eq!(Shortcut::new("F", false, false, "").format(), "F");
    }

    #[test]
    fn test_digit_keys_select_shapes_in_order() {
        for (i, shape) in ShapeMode::ALL.iter().enumerate() {
            let key = Key::Character((i + 1).to_string().into());
            assert_eq!(ShortcutRegistry::action_for(&key), Some(UiAction::SetShape(*shape)));
        }
        assert_eq!(ShortcutRegistry::action_for(&Key::Character("8".into())), None);
        assert_eq!(ShortcutRegistry::action_for(&Key::Character("0".into())), None);
    }

    #[test]
    fn test_named_and_letter_keys() {
        assert_eq!(
            ShortcutRegistry::action_for(&Key::Named(NamedKey::Backspace)),
            Some(UiAction::ClearAll)
        );
        assert_eq!(
            ShortcutRegistry::action_for(&Key::Character("F".into())),
            Some(UiAction::ToggleFullscreen)
        );
        assert_eq!(
            ShortcutRegistry::action_for(&Key::Character("r".into())),
            Some(UiAction::SetColor(ColorMode::Rainbow))
        );
        assert_eq!(ShortcutRegistry::action_for(&Key::Named(NamedKey::Enter)), None);
    }
}
