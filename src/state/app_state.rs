//! Application state definitions

use super::forms::{FieldName, SupportForm};

/// Focusable element of the support form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Tag,
    Description,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Name,
        Focus::Email,
        Focus::Tag,
        Focus::Description,
        Focus::Submit,
    ];

    fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[idx - 1]
        }
    }

    /// The form field under focus, if any
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Name => Some(FieldName::Name),
            Self::Email => Some(FieldName::Email),
            Self::Tag => Some(FieldName::Tag),
            Self::Description => Some(FieldName::Description),
            Self::Submit => None,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: SupportForm,
    pub focus: Focus,
}

impl AppState {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_starts_on_name() {
        assert_eq!(AppState::default().focus, Focus::Name);
    }

    #[test]
    fn test_next_focus_wraps() {
        let mut state = AppState::default();
        let mut seen = vec![state.focus];
        for _ in 0..5 {
            state.next_focus();
            seen.push(state.focus);
        }
        assert_eq!(
            seen,
            vec![
                Focus::Name,
                Focus::Email,
                Focus::Tag,
                Focus::Description,
                Focus::Submit,
                Focus::Name,
            ]
        );
    }

    #[test]
    fn test_prev_focus_wraps() {
        let mut state = AppState::default();
        state.prev_focus();
        assert_eq!(state.focus, Focus::Submit);
        state.prev_focus();
        assert_eq!(state.focus, Focus::Description);
    }

    #[test]
    fn test_focus_field_mapping() {
        assert_eq!(Focus::Tag.field(), Some(FieldName::Tag));
        assert_eq!(Focus::Description.field(), Some(FieldName::Description));
        assert_eq!(Focus::Submit.field(), None);
    }
}
