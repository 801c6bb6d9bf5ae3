//! Mouse event handling
//!
//! Wheel scrolling over the list, scrollbar click/drag, and tap or drag
//! selection on the index sidebar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;
use crate::tui::components::scrollbars::offset_for_click;

/// Rows moved per wheel notch
const WHEEL_STEP: isize = 3;

impl App {
    /// Handle mouse events for scrolling, clicking, and sidebar drags
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.handle_wheel(mouse.column, mouse.row, WHEEL_STEP),
            MouseEventKind::ScrollUp => self.handle_wheel(mouse.column, mouse.row, -WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.handle_drag(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.handle_mouse_up();
            }
            _ => {}
        }
    }

    fn handle_wheel(&mut self, x: u16, y: u16, delta: isize) {
        if !self.layout.in_list(x, y) && !self.layout.in_scrollbar(x, y) {
            return;
        }
        let scroll = self.bar.provider().scroll();
        let can_move = if delta < 0 {
            scroll.can_scroll_up()
        } else {
            scroll.can_scroll_down()
        };
        if can_move {
            self.scroll_by(delta);
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) {
        if self.layout.in_sidebar(x, y) {
            self.bar.touch_start(x as f64, y as f64);
            self.sidebar_drag = true;
            self.pending_tap = Some((x, y));
            return;
        }
        if self.layout.in_scrollbar(x, y) {
            self.layout.dragging_scrollbar = true;
            self.scroll_to_track(y);
        }
    }

    fn handle_drag(&mut self, x: u16, y: u16) {
        if self.layout.dragging_scrollbar {
            self.scroll_to_track(y);
            return;
        }
        if !self.sidebar_drag {
            return;
        }
        let key = self.sidebar_key_at(x, y);
        let outcome = self.bar.touch_move(x as f64, y as f64, key.as_deref());
        // Any movement turns the press into a drag
        self.pending_tap = None;
        if let Some(key) = outcome.jump {
            tracing::debug!(key = %key, vertical = outcome.prevent_default, "Sidebar drag jump");
        }
    }

    fn handle_mouse_up(&mut self) {
        self.layout.dragging_scrollbar = false;
        self.sidebar_drag = false;
        if let Some((x, y)) = self.pending_tap.take() {
            let key = self.layout.marker_at(x, y).map(str::to_string);
            self.bar.tap(key.as_deref());
        }
    }

    /// Jump the list to the position of a scrollbar track click
    fn scroll_to_track(&mut self, y: u16) {
        let Some(area) = self.layout.scrollbar_area else {
            return;
        };
        let total = self.bar.provider().total_lines();
        let offset = offset_for_click(y, area, total, self.visible_rows());
        self.scroll_to_line(offset);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use indexbar_core::IndexBarConfig;

    use crate::tui::app::{App, MarkerSource};
    use crate::tui::directory::Directory;

    fn create_test_app() -> App {
        let directory = Directory::from_entries([
            "Ada", "Alan", "Barbara", "Brian", "Claude", "Cora", "Cyd", "Cleo", "Dana",
        ]);
        let mut app = App::new(IndexBarConfig::default(), directory, MarkerSource::Groups);
        app.bar.attach();
        app.draw_for_test(30, 10);
        app
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_mouse_event(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn marker_row(app: &App, key: &str) -> u16 {
        app.layout
            .markers
            .iter()
            .find(|slot| slot.key == key)
            .map(|slot| slot.row)
            .expect("marker drawn")
    }

    fn sidebar_column(app: &App) -> u16 {
        app.layout.sidebar_area.expect("sidebar laid out").x + 1
    }

    #[test]
    fn test_tap_on_marker_jumps() {
        let mut app = create_test_app();
        let x = sidebar_column(&app);
        let y = marker_row(&app, "B");

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), x, y);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), x, y);

        assert_eq!(app.bar.provider().scroll().offset, 3);
        assert_eq!(app.bar.active_anchor(), Some("B"));
        assert!(app.drain_bar_events());
        assert_eq!(app.last_selected.as_deref(), Some("B · 2 entries"));
    }

    #[test]
    fn test_vertical_drag_jumps_once_per_marker() {
        let mut app = create_test_app();
        let x = sidebar_column(&app);
        let a = marker_row(&app, "A");

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), x, a);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), x, a + 1);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), x, a + 1);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), x, a + 2);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), x, a + 2);

        let events = app.bar.poll_events();
        assert_eq!(events.len(), 2);
        assert_eq!(app.bar.active_anchor(), Some("C"));
        // The release after a drag is not a tap
        assert!(app.pending_tap.is_none());
    }

    #[test]
    fn test_drag_off_sidebar_resolves_no_key() {
        let mut app = create_test_app();
        let x = sidebar_column(&app);
        let a = marker_row(&app, "A");

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), x, a);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 2, a + 1);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 2, a + 1);

        assert!(app.bar.poll_events().is_empty());
        assert_eq!(app.bar.provider().scroll().offset, 0);
    }

    #[test]
    fn test_wheel_scrolls_list() {
        let mut app = create_test_app();
        let area = app.layout.list_area.expect("list laid out");

        mouse(&mut app, MouseEventKind::ScrollDown, area.x, area.y);
        assert_eq!(app.bar.provider().scroll().offset, 3);
        assert_eq!(app.bar.active_anchor(), Some("B"));

        // Wheel over the sidebar does nothing
        let x = sidebar_column(&app);
        mouse(&mut app, MouseEventKind::ScrollUp, x, area.y);
        assert_eq!(app.bar.provider().scroll().offset, 3);
    }

    #[test]
    fn test_scrollbar_click_scrolls_to_end() {
        let mut app = create_test_app();
        let track = app.layout.scrollbar_area.expect("scrollbar laid out");
        let bottom = track.y + track.height - 1;

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), track.x, bottom);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), track.x, bottom);

        let geometry = app.bar.provider();
        assert_eq!(geometry.scroll().offset, geometry.scroll().max_scroll);
        assert_eq!(app.bar.active_anchor(), Some("C"));
    }

    #[test]
    fn test_crowded_sidebar_keeps_every_marker() {
        let mut app = App::new(
            IndexBarConfig::default(),
            Directory::sample(),
            MarkerSource::Groups,
        );
        app.bar.attach();
        app.draw_for_test(80, 24);

        let list_rows = app.layout.list_area.expect("list laid out").height as usize;
        let keys: Vec<String> = app.layout.markers.iter().map(|s| s.key.clone()).collect();
        assert!(keys.len() > list_rows);
        assert_eq!(keys, app.directory.keys());

        let other = app
            .layout
            .markers
            .iter()
            .find(|slot| slot.key == "#")
            .cloned()
            .expect("marker drawn");
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), other.col, other.row);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), other.col, other.row);

        assert!(app.drain_bar_events());
        assert_eq!(app.last_selected.as_deref(), Some("# · 1 entry"));
    }

    #[test]
    fn test_input_ignored_while_detached() {
        let mut app = create_test_app();
        app.bar.detach();
        let x = sidebar_column(&app);
        let y = marker_row(&app, "C");

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), x, y);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), x, y);
        assert!(app.bar.poll_events().is_empty());
    }
}
