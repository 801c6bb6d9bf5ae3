//! Main application state and event loop

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use indexbar_core::gesture::TouchTracker;
use indexbar_core::{IndexBar, IndexBarConfig, IndexBarEvent, SectionMount};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders},
    Frame, Terminal,
};

use super::components::{
    render_list_scrollbar, render_section_list, render_sidebar, render_status_bar, SIDEBAR_WIDTH,
};
use super::directory::Directory;
use super::geometry::{TerminalGeometry, HEADER_ROWS};
use super::state::LayoutState;
use super::themes::Theme;

/// Idle wake-up interval when no terminal events arrive
const TICK: Duration = Duration::from_millis(250);

/// Where the sidebar markers come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MarkerSource {
    /// One marker per directory group
    #[default]
    Groups,
    /// The configured `index_list` as-is
    Config,
}

/// Directory browser with an index sidebar
pub struct App {
    pub(crate) bar: IndexBar<TerminalGeometry>,
    pub(crate) directory: Directory,
    markers: MarkerSource,
    /// File the directory was loaded from, for Ctrl+R reloads
    data_path: Option<PathBuf>,
    /// Keeps every group registered with the bar
    mounts: Vec<SectionMount<usize>>,
    pub(crate) layout: LayoutState,
    pub(crate) theme: Theme,
    /// Value of the last select event
    pub(crate) last_selected: Option<String>,
    /// Sidebar cell where the left button went down; a release without a
    /// drag turns into a tap
    pub(crate) pending_tap: Option<(u16, u16)>,
    /// Left button went down on the sidebar and has not been released
    pub(crate) sidebar_drag: bool,
    pub(crate) should_quit: bool,
    pub(crate) needs_redraw: bool,
}

impl App {
    pub fn new(config: IndexBarConfig, directory: Directory, markers: MarkerSource) -> Self {
        let geometry = TerminalGeometry::new(&directory);
        // Terminal rows are coarse: any vertical step counts as a drag
        let mut bar = IndexBar::with_touch(config, geometry, TouchTracker::with_min_distance(0.0));
        if markers == MarkerSource::Groups {
            bar.set_index_list(directory.keys());
        }
        let mounts = mount_sections(&bar, &directory);
        let mut theme = Theme::default();
        theme.set_highlight(bar.config().highlight_color.as_deref());
        tracing::info!(
            groups = directory.groups.len(),
            entries = directory.entry_count(),
            "Directory mounted"
        );

        Self {
            bar,
            directory,
            markers,
            data_path: None,
            mounts,
            layout: LayoutState::new(),
            theme,
            last_selected: None,
            pending_tap: None,
            sidebar_drag: false,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        self.data_path = path;
        self
    }

    /// Re-read the data file, keeping the current directory on failure
    pub(crate) fn reload_directory(&mut self) {
        let Some(path) = self.data_path.as_deref() else {
            return;
        };
        match Directory::load(path) {
            Ok(directory) => {
                tracing::info!(path = %path.display(), "Directory reloaded");
                self.set_directory(directory);
            }
            Err(e) => tracing::warn!(error = %e, "Directory reload failed"),
        }
    }

    /// Swap in new directory data, remounting every group
    pub fn set_directory(&mut self, directory: Directory) {
        self.mounts.clear();
        self.bar.provider_mut().set_content(&directory);
        if self.markers == MarkerSource::Groups {
            self.bar.set_index_list(directory.keys());
        }
        self.mounts = mount_sections(&self.bar, &directory);
        self.directory = directory;
        // Fresh mounts carry no visual state and the offset may have been
        // clamped; resync now since the marker list may be unchanged
        self.bar.on_scroll();
        self.needs_redraw = true;
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.bar.attach();
        let result = self.main_loop(&mut terminal).await;
        self.bar.detach();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
                // Rendering complete: run any refresh deferred by a marker change
                self.bar.on_render_complete();
                if self.drain_bar_events() {
                    self.needs_redraw = true;
                }
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                        None => break,
                    }
                }
                _ = tokio::time::sleep(TICK) => {}
            }

            if self.drain_bar_events() {
                self.needs_redraw = true;
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.handle_key(key);
                self.needs_redraw = true;
            }
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                self.needs_redraw = true;
            }
            Event::Resize(_, _) => {
                self.needs_redraw = true;
            }
            _ => {}
        }
    }

    /// Collect select events from the bar. Returns true if any arrived.
    pub(crate) fn drain_bar_events(&mut self) -> bool {
        let events = self.bar.poll_events();
        let any = !events.is_empty();
        for event in events {
            match event {
                IndexBarEvent::Select(value) => {
                    tracing::info!(selected = %value, "Section selected");
                    self.last_selected = Some(value);
                }
            }
        }
        any
    }

    /// Scroll the list and let the bar resync
    pub(crate) fn scroll_by(&mut self, delta: isize) {
        let scroll = self.bar.provider_mut().scroll_mut();
        if delta < 0 {
            scroll.scroll_up(delta.unsigned_abs());
        } else {
            scroll.scroll_down(delta as usize);
        }
        self.bar.on_scroll();
    }

    pub(crate) fn scroll_to_line(&mut self, line: usize) {
        self.bar.provider_mut().scroll_mut().scroll_to_line(line);
        self.bar.on_scroll();
    }

    /// Visible list height in rows
    pub(crate) fn visible_rows(&self) -> usize {
        self.layout.list_area.map(|a| a.height as usize).unwrap_or(0)
    }

    /// Draw one frame
    pub(crate) fn ui(&mut self, f: &mut Frame) {
        let [main_area, status_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .areas(f.area());

        let title = format!(
            " Directory · {} entries ",
            self.directory.entry_count()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border_color))
            .title(title)
            .title_style(Style::default().fg(self.theme.title_color));
        let inner = block.inner(main_area);
        f.render_widget(block, main_area);

        let [list_area, scrollbar_area, sidebar_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(SIDEBAR_WIDTH),
            ])
            .areas(inner);

        self.update_viewport(list_area);

        let geometry = self.bar.provider();
        render_section_list(
            f.buffer_mut(),
            list_area,
            &self.directory,
            geometry,
            &self.bar.sections(),
            &self.theme,
        );
        render_list_scrollbar(
            f.buffer_mut(),
            scrollbar_area,
            geometry.scroll().offset,
            geometry.total_lines(),
            list_area.height as usize,
            &self.theme,
        );
        // Sidebar stacks above the pinned headers, so it is drawn last
        let markers = self.bar.markers();
        self.layout.markers = render_sidebar(f.buffer_mut(), sidebar_area, &markers, &self.theme);

        render_status_bar(
            f,
            status_area,
            &self.theme,
            self.bar.active_anchor(),
            self.last_selected.as_deref(),
            self.bar.config().sticky,
        );

        self.layout.list_area = Some(list_area);
        self.layout.scrollbar_area = Some(scrollbar_area);
        self.layout.sidebar_area = Some(sidebar_area);
    }

    /// Resize counts as a scroll event for the bar
    fn update_viewport(&mut self, list_area: Rect) {
        let viewport = (!list_area.is_empty()).then_some(list_area);
        if self.bar.provider_mut().set_viewport(viewport) {
            tracing::debug!(?viewport, "List viewport changed");
            self.bar.on_scroll();
        }
    }
}

/// Register every directory group with the bar, in document order
fn mount_sections(
    bar: &IndexBar<TerminalGeometry>,
    directory: &Directory,
) -> Vec<SectionMount<usize>> {
    let registrar = bar.registrar();
    directory
        .groups
        .iter()
        .enumerate()
        .filter_map(|(i, group)| {
            registrar.register(&group.key, &group.title, i, HEADER_ROWS as f64)
        })
        .collect()
}

#[cfg(test)]
impl App {
    /// Render one frame into an in-memory terminal
    pub(crate) fn draw_for_test(&mut self, width: u16, height: u16) {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|f| self.ui(f)).expect("draw frame");
        self.bar.on_render_complete();
    }
}
