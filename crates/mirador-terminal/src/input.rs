//! Key handling: mapping terminal events onto dashboard actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User-facing controls, one per carousel/view operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// Refresh the active dashboard immediately.
    RefreshNow,
    /// Switch to the next dashboard.
    NextDashboard,
    /// Switch to the previous dashboard.
    PreviousDashboard,
    /// Key is not bound.
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn action_for(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::F(5) => Action::RefreshNow,
        KeyCode::Char('n') | KeyCode::Right | KeyCode::Tab => Action::NextDashboard,
        KeyCode::Char('p') | KeyCode::Left | KeyCode::BackTab => Action::PreviousDashboard,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(action_for(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(action_for(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_refresh_bindings() {
        assert_eq!(action_for(key(KeyCode::Char('r'))), Action::RefreshNow);
        assert_eq!(action_for(key(KeyCode::F(5))), Action::RefreshNow);
    }

    #[test]
    fn test_navigation_bindings() {
        assert_eq!(action_for(key(KeyCode::Char('n'))), Action::NextDashboard);
        assert_eq!(action_for(key(KeyCode::Right)), Action::NextDashboard);
        assert_eq!(action_for(key(KeyCode::Tab)), Action::NextDashboard);
        assert_eq!(action_for(key(KeyCode::Char('p'))), Action::PreviousDashboard);
        assert_eq!(action_for(key(KeyCode::Left)), Action::PreviousDashboard);
        assert_eq!(action_for(key(KeyCode::BackTab)), Action::PreviousDashboard);
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(key(KeyCode::Char('z'))), Action::None);
    }
}
