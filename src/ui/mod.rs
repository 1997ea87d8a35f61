//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = layout::create_layout(frame.area());

    layout::draw_hero(frame, page.hero);
    forms::draw_support_form(frame, page.card, app);
    layout::draw_footer(frame, page.footer);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::launcher::MockNavigator;
    use crate::state::{FieldName, FormStatus};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(100)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        let mut nav = MockNavigator::new();
        nav.expect_navigate().returning(|_| Ok(()));
        App::with_navigator(TuiConfig::default(), Box::new(nav))
    }

    #[test]
    fn test_renders_page_copy_and_placeholders() {
        let screen = render(&app());
        assert!(screen.contains("Support Tawba"));
        assert!(screen.contains("Contact support"));
        assert!(screen.contains("Enter your name"));
        assert!(screen.contains("name@example.com"));
        assert!(screen.contains("General issue"));
        assert!(screen.contains("Submit request"));
        assert!(screen.contains("Made with care to support the Tawba community."));
    }

    #[test]
    fn test_renders_status_message() {
        let mut app = app();
        let mut nav = MockNavigator::new();
        nav.expect_navigate().never();
        let _ = app.state.form.submit(&mut nav);
        assert_eq!(app.state.form.status(), Some(FormStatus::Incomplete));

        let screen = render(&app);
        assert!(screen.contains("Please complete all fields before submitting."));
    }

    #[test]
    fn test_renders_typed_values() {
        let mut app = app();
        app.state.form.update_field(FieldName::Name, "Sara");
        app.state
            .form
            .update_field(FieldName::Description, "first line\nsecond line");

        let screen = render(&app);
        assert!(screen.contains("Sara"));
        assert!(screen.contains("first line"));
        assert!(screen.contains("second line"));
        assert!(!screen.contains("Enter your name"));
    }
}
