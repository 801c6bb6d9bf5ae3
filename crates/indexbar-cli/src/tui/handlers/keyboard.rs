//! Keyboard event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::App;
use crate::tui::directory::OTHER_KEY;

/// Rows moved per arrow key press
const LINE_STEP: isize = 1;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }
        let code = key_event.code;
        let modifiers = key_event.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.reload_directory(),
                _ => {}
            }
            return;
        }

        let page = self.visible_rows().saturating_sub(1).max(1) as isize;
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.scroll_by(-LINE_STEP),
            KeyCode::Down => self.scroll_by(LINE_STEP),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Home => self.scroll_to_line(0),
            KeyCode::End => {
                self.bar.provider_mut().scroll_mut().scroll_to_end();
                self.bar.on_scroll();
            }
            KeyCode::Tab => {
                let sticky = !self.bar.config().sticky;
                tracing::info!(sticky, "Sticky headers toggled");
                self.bar.set_sticky(sticky);
            }
            KeyCode::Char(c) if c.is_alphanumeric() => {
                let key: String = c.to_uppercase().collect();
                self.jump_from_keyboard(&key);
            }
            KeyCode::Char(c) if c.to_string() == OTHER_KEY => {
                self.jump_from_keyboard(OTHER_KEY);
            }
            _ => {}
        }
    }

    fn jump_from_keyboard(&mut self, key: &str) {
        if !self.bar.jump_to(key) {
            tracing::debug!(key, "No section for key");
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use indexbar_core::IndexBarConfig;

    use crate::tui::app::{App, MarkerSource};
    use crate::tui::directory::Directory;

    fn create_test_app() -> App {
        // A: header 0, B: header 3, C: header 6; eleven lines in a 4-row list
        let directory = Directory::from_entries([
            "Ada", "Alan", "Barbara", "Brian", "Claude", "Cora", "Cyd", "Cleo",
        ]);
        let mut app = App::new(IndexBarConfig::default(), directory, MarkerSource::Groups);
        app.bar.attach();
        app.draw_for_test(30, 7);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_letter_jumps_to_group() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.bar.provider().scroll().offset, 6);
        app.drain_bar_events();
        assert_eq!(app.last_selected.as_deref(), Some("C · 4 entries"));
    }

    #[test]
    fn test_unknown_letter_is_noop() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.bar.provider().scroll().offset, 0);
        assert!(!app.drain_bar_events());
    }

    #[test]
    fn test_arrow_scroll_updates_anchor() {
        let mut app = create_test_app();
        assert_eq!(app.bar.active_anchor(), Some("A"));
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.bar.active_anchor(), Some("B"));
        press(&mut app, KeyCode::Home);
        assert_eq!(app.bar.active_anchor(), Some("A"));
    }

    #[test]
    fn test_tab_toggles_sticky() {
        let mut app = create_test_app();
        assert!(app.bar.config().sticky);
        press(&mut app, KeyCode::Tab);
        assert!(!app.bar.config().sticky);
        assert!(app.bar.sections().iter().all(|s| !s.visual_state().is_pinned()));
    }

    #[test]
    fn test_ctrl_r_reloads_data_file() {
        let temp = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("people.toml");
        std::fs::write(&path, "entries = [\"Xena\", \"Yuri\"]\n").unwrap();

        let mut app = create_test_app().with_data_path(Some(path));
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.bar.sections().len(), 2);
        assert_eq!(app.bar.config().index_list, vec!["X", "Y"]);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = create_test_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
