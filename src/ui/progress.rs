/// Blank columns before and after the progress line.
pub const BAR_PADDING: usize = 2;
pub const FILL_CHAR: char = '#';
pub const EMPTY_CHAR: char = '-';

/// Columns left for the bar itself once padding, the time label, the space
/// after it and both brackets are taken from `cols`. Zero on narrow screens.
pub fn bar_width(cols: u16, label: &str) -> usize {
    let reserved = 2 * BAR_PADDING + 1 + 2 + label.chars().count();
    usize::from(cols).saturating_sub(reserved)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    pub total_width: usize,
    pub filled_width: usize,
}

impl ProgressBar {
    pub fn new(total_width: usize, current: f64, total: f64) -> Self {
        let filled = (fraction(current, total) * total_width as f64).floor() as usize;
        Self {
            total_width,
            filled_width: filled.min(total_width),
        }
    }
}

/// `current / total` clamped to `0.0..=1.0`; zero when `total` is not positive.
pub fn fraction(current: f64, total: f64) -> f64 {
    if !(total > 0.0) || !current.is_finite() || !total.is_finite() {
        return 0.0;
    }
    (current / total).clamp(0.0, 1.0)
}

/// Build the full progress line: `  <label> [####----]  `.
pub fn render_bar(width: usize, current: f64, total: f64, label: &str) -> String {
    let bar = ProgressBar::new(width, current, total);
    let pad = " ".repeat(BAR_PADDING);

    let mut line = String::with_capacity(width + label.len() + 2 * BAR_PADDING + 3);
    line.push_str(&pad);
    line.push_str(label);
    line.push_str(" [");
    line.extend(std::iter::repeat_n(FILL_CHAR, bar.filled_width));
    line.extend(std::iter::repeat_n(EMPTY_CHAR, bar.total_width - bar.filled_width));
    line.push(']');
    line.push_str(&pad);
    line
}
