//! Scrollbar rendering
//!
//! 1-char wide, filled track with thumb inside.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::tui::themes::Theme;

/// Scrollbar renderer (Buffer-based)
///
/// Visual: ░ (track) and █ (thumb)
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so stale glyphs vanish when the scrollbar is not needed
    for y in 0..area.height {
        if let Some(cell) = buf.cell_mut((area.x, area.y + y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    if total <= visible || area.height == 0 {
        return;
    }

    let (thumb_pos, thumb_size) = thumb_geometry(area.height as usize, offset, total, visible);

    for y in 0..area.height as usize {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Thumb position and size within a track of `height` cells (minimum size 2)
fn thumb_geometry(height: usize, offset: usize, total: usize, visible: usize) -> (usize, usize) {
    let thumb_size = ((visible as f32 / total as f32) * height as f32)
        .max(2.0)
        .min(height as f32)
        .round() as usize;

    let max_offset = total.saturating_sub(visible);
    let thumb_pos = if max_offset > 0 {
        ((offset as f32 / max_offset as f32) * height.saturating_sub(thumb_size) as f32).round()
            as usize
    } else {
        0
    };
    (thumb_pos, thumb_size)
}

/// Scroll offset for a click on the track at `click_y`
pub fn offset_for_click(click_y: u16, area: Rect, total: usize, visible: usize) -> usize {
    let max_offset = total.saturating_sub(visible);
    if max_offset == 0 || area.height == 0 {
        return 0;
    }
    let relative_y = click_y.saturating_sub(area.y) as f32;
    let height = area.height.saturating_sub(1).max(1) as f32;
    (((relative_y / height) * max_offset as f32).round() as usize).min(max_offset)
}

/// Scrollbar for the directory list
pub fn render_list_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total_lines: usize,
    visible_height: usize,
    theme: &Theme,
) {
    render_scrollbar(
        buf,
        area,
        offset,
        total_lines,
        visible_height,
        theme.dim_color,
        theme.scrollbar_bg_color,
    );
}
