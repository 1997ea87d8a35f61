//! Application state and core logic

use crate::config::TuiConfig;
use crate::launcher::{Navigator, SystemNavigator};
use crate::state::{next_tag, prev_tag, AppState, FieldName, Focus, MailtoLink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Hand-off target for composed mailto: links
    navigator: Box<dyn Navigator>,
    config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Most recently submitted request
    pub last_link: Option<MailtoLink>,
}

impl App {
    /// Create a new App instance using the system URI handler
    pub fn new(config: TuiConfig) -> Self {
        let navigator = SystemNavigator::new(config.launcher.clone());
        Self::with_navigator(config, Box::new(navigator))
    }

    pub fn with_navigator(config: TuiConfig, navigator: Box<dyn Navigator>) -> Self {
        Self {
            state: AppState::default(),
            navigator,
            config,
            quit: false,
            copy_message: None,
            last_link: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.copy_message = None;

        let ctrl = is_control_chord(key.modifiers);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('y')
                if !alt && key.modifiers.contains(crate::platform::COPY_MODIFIER) =>
            {
                self.copy_last_link()
            }
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            _ => match self.state.focus {
                Focus::Tag => self.handle_tag_key(key),
                // The button is disabled while the form is incomplete
                Focus::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
                        && self.state.form.is_valid()
                    {
                        self.submit();
                    }
                }
                focus => {
                    if let Some(field) = focus.field() {
                        self.handle_text_key(field, key);
                    }
                }
            },
        }
    }

    /// Handle keys while a text field has focus
    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Char(c) if !is_control_chord(key.modifiers) => form.push_char(field, c),
            KeyCode::Backspace => form.pop_char(field),
            KeyCode::Enter if field.is_multiline() => form.push_char(field, '\n'),
            // Enter in a single-line field submits, as in an HTML form
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Handle keys while the tag selector has focus
    fn handle_tag_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let current = form.value(FieldName::Tag);
        let tag = match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => prev_tag(current),
            KeyCode::Right | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char(' ') => {
                next_tag(current)
            }
            _ => return,
        };
        form.update_field(FieldName::Tag, tag);
    }

    /// Submit the form and remember the composed link
    fn submit(&mut self) {
        match self.state.form.submit(self.navigator.as_mut()) {
            Ok(link) => {
                if self.config.copy_link_on_submit() {
                    self.copy_link(&link.uri);
                }
                self.last_link = Some(link);
            }
            Err(err) => tracing::debug!("Submission refused: {err}"),
        }
    }

    /// Copy the last composed link to the clipboard
    fn copy_last_link(&mut self) {
        match self.last_link.as_ref().map(|link| link.uri.clone()) {
            Some(uri) => self.copy_link(&uri),
            None => self.copy_message = Some("Nothing to copy yet".to_string()),
        }
    }

    fn copy_link(&mut self, uri: &str) {
        match copy_to_clipboard(uri) {
            Ok(()) => self.copy_message = Some("Link copied".to_string()),
            Err(err) => {
                tracing::warn!("Failed to copy link: {err}");
                self.copy_message = Some("Could not copy link".to_string());
            }
        }
    }
}

/// Ctrl without Alt. AltGr arrives as Ctrl+Alt on Windows and still types.
fn is_control_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
