use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Overflow;

/// Width of the right-aligned heading column; values start right after it.
pub const HEADING_WIDTH: u16 = 10;
/// Blank columns kept at the right edge after a value.
pub const MARGIN_WIDTH: u16 = 2;

const HEADINGS: [&str; 3] = ["Title: ", "Artist: ", "Album: "];

/// White on blue, used by the title bar and the progress line.
pub fn bar_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Blue)
}

fn heading_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Rows of the title, artist and album lines, centered vertically.
pub fn field_rows(area: Rect) -> [u16; 3] {
    let first = area.y + (area.height / 2).saturating_sub(1);
    [first, first.saturating_add(1), first.saturating_add(2)]
}

/// Columns available to a field value.
pub fn value_width(area: Rect) -> usize {
    usize::from(area.width.saturating_sub(HEADING_WIDTH + MARGIN_WIDTH))
}

/// Draw the static decoration: the title bar and the three headings.
pub fn draw_chrome(buf: &mut Buffer, area: Rect, label: &str) {
    if area.is_empty() {
        return;
    }

    let title_style = bar_style().add_modifier(Modifier::BOLD);
    let blank = " ".repeat(usize::from(area.width));
    put(buf, area, area.x, area.y, &blank, title_style);

    let label = fit(label, usize::from(area.width), Overflow::Clip);
    let offset = (area.width / 2).saturating_sub(label.width() as u16 / 2);
    put(buf, area, area.x + offset, area.y, &label, title_style);

    for (heading, row) in HEADINGS.iter().zip(field_rows(area)) {
        let text = format!("{:>width$}", heading, width = usize::from(HEADING_WIDTH));
        put(buf, area, area.x, row, &text, heading_style());
    }
}

/// Write the track fields next to their headings.
pub fn draw_track(
    buf: &mut Buffer,
    area: Rect,
    title: &str,
    artist: &str,
    album: &str,
    overflow: Overflow,
) {
    let max = value_width(area);
    for (value, row) in [title, artist, album].into_iter().zip(field_rows(area)) {
        put(
            buf,
            area,
            area.x + HEADING_WIDTH,
            row,
            &fit(value, max, overflow),
            Style::default(),
        );
    }
}

/// Write the progress line on the last row.
pub fn draw_progress_bar(buf: &mut Buffer, area: Rect, line: &str) {
    if area.is_empty() {
        return;
    }
    put(buf, area, area.x, area.bottom() - 1, line, bar_style());
}

/// Shorten `text` to at most `max` terminal columns.
///
/// A wide character that would straddle the limit is dropped whole.
pub fn fit(text: &str, max: usize, overflow: Overflow) -> Cow<'_, str> {
    if text.width() <= max {
        return Cow::Borrowed(text);
    }
    let budget = match overflow {
        Overflow::Clip => max,
        Overflow::Ellipsis if max == 0 => return Cow::Borrowed(""),
        Overflow::Ellipsis => max - 1,
    };

    let mut used = 0;
    let mut s = String::with_capacity(text.len().min(budget * 4 + 3));
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        s.push(ch);
    }
    if overflow == Overflow::Ellipsis {
        s.push('…');
    }
    Cow::Owned(s)
}

// Writes outside `area` (or the buffer) are dropped, never wrapped.
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    let area = area.intersection(buf.area);
    if y < area.top() || y >= area.bottom() || x < area.left() || x >= area.right() {
        return;
    }
    let max = usize::from(area.right() - x);
    buf.set_stringn(x, y, text, max, style);
}
