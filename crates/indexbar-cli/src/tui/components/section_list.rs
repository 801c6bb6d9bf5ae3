//! Section list component
//!
//! Renders the visible directory rows, then overlays the pinned group
//! headers reported by the index bar's sticky state.

use indexbar_core::SectionRegistry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::directory::Directory;
use crate::tui::geometry::{RowKind, TerminalGeometry};
use crate::tui::themes::Theme;

/// Left padding for entry rows
const ENTRY_INDENT: u16 = 3;

/// Render the list rows and sticky headers into `area`
pub fn render_section_list(
    buf: &mut Buffer,
    area: Rect,
    directory: &Directory,
    geometry: &TerminalGeometry,
    sections: &SectionRegistry<usize>,
    theme: &Theme,
) {
    if area.is_empty() {
        return;
    }

    let offset = geometry.scroll().offset;
    let header_style = header_style(theme);
    let entry_style = Style::default().fg(theme.text_color).bg(theme.bg_color);

    for y in 0..area.height {
        let row = Rect::new(area.x, area.y + y, area.width, 1);
        buf.set_style(row, entry_style);
        match geometry.row_kind(offset + y as usize) {
            Some(RowKind::Header(group)) => {
                if let Some(group) = directory.groups.get(group) {
                    render_header(buf, row, &group.title, header_style);
                }
            }
            Some(RowKind::Entry { group, entry }) => {
                let text = directory
                    .groups
                    .get(group)
                    .and_then(|g| g.entries.get(entry));
                if let Some(text) = text {
                    let width = area.width.saturating_sub(ENTRY_INDENT) as usize;
                    buf.set_stringn(area.x + ENTRY_INDENT, row.y, text, width, entry_style);
                }
            }
            None => {}
        }
    }

    // Sticky overlay: the active header, plus the displaced one during hand-off
    for section in sections.iter() {
        let state = section.visual_state();
        if !state.active {
            continue;
        }
        let Some(row) = pinned_row(state.pinned_top, area) else {
            continue;
        };
        let Some(group) = directory.groups.get(section.origin) else {
            continue;
        };
        let x = state
            .pinned_left
            .map_or(area.x, |left| (left.max(0.0) as u16).max(area.x));
        let width = state
            .pinned_width
            .map_or(area.width, |w| w.max(0.0) as u16)
            .min(area.right().saturating_sub(x));
        render_header(
            buf,
            Rect::new(x, row, width, 1),
            &group.title,
            header_style.add_modifier(Modifier::BOLD),
        );
    }
}

/// Screen row of a pinned header, when it falls inside the list area
fn pinned_row(pinned_top: Option<f64>, area: Rect) -> Option<u16> {
    let top = pinned_top?.floor();
    if top < area.y as f64 || top >= area.bottom() as f64 {
        return None;
    }
    Some(top as u16)
}

fn header_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.header_fg_color)
        .bg(theme.header_bg_color)
}

fn render_header(buf: &mut Buffer, row: Rect, title: &str, style: Style) {
    if row.is_empty() {
        return;
    }
    buf.set_style(row, style);
    buf.set_stringn(
        row.x + 1,
        row.y,
        title,
        row.width.saturating_sub(1) as usize,
        style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::geometry::HEADER_ROWS;
    use indexbar_core::{IndexBar, IndexBarConfig};

    fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
        (area.x..area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_pinned_row_bounds() {
        let area = Rect::new(0, 2, 10, 5);
        assert_eq!(pinned_row(Some(2.0), area), Some(2));
        assert_eq!(pinned_row(Some(6.9), area), Some(6));
        assert_eq!(pinned_row(Some(7.0), area), None);
        assert_eq!(pinned_row(Some(1.0), area), None);
        assert_eq!(pinned_row(None, area), None);
    }

    #[test]
    fn test_sticky_header_overlays_first_row() {
        let directory = Directory::from_entries(["Amy", "Ann", "Ava", "Ben", "Bo"]);
        let area = Rect::new(0, 0, 20, 3);
        let mut geometry = TerminalGeometry::new(&directory);
        geometry.set_viewport(Some(area));

        let mut bar = IndexBar::new(IndexBarConfig::default(), geometry);
        let registrar = bar.registrar();
        let _mounts: Vec<_> = directory
            .groups
            .iter()
            .enumerate()
            .filter_map(|(i, g)| registrar.register(&g.key, &g.title, i, HEADER_ROWS as f64))
            .collect();
        bar.attach();

        // Row 0 would show "Ann"; the pinned A header covers it
        bar.provider_mut().scroll_mut().scroll_to_line(2);
        bar.on_scroll();

        let mut buf = Buffer::empty(area);
        render_section_list(
            &mut buf,
            area,
            &directory,
            bar.provider(),
            &bar.sections(),
            &Theme::default(),
        );
        assert_eq!(row_text(&buf, area, 0), " A · 3 entries");
        assert_eq!(row_text(&buf, area, 1), "   Ava");
        assert_eq!(row_text(&buf, area, 2), " B · 2 entries");
    }
}
