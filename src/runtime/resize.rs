use std::io;
use std::sync::Mutex;

use ratatui::buffer::Buffer;

use crate::ui;

use super::screen::{Screen, lock_screen};
use super::shared::SharedState;

/// React to a terminal resize: re-read the geometry, clear, redraw chrome.
///
/// The render loop skips its frame while this runs. Track fields are left
/// blank until the next regular poll. The resizing flag is cleared even when
/// the terminal fails.
pub fn handle_resize<S: Screen>(
    shared: &SharedState,
    screen: &Mutex<S>,
    label: &str,
) -> io::Result<()> {
    shared.begin_resize();

    let result = {
        let mut screen = lock_screen(screen);
        redraw_chrome(&mut *screen, label)
    };

    match result {
        Ok(area) => {
            shared.finish_resize(Some(area));
            tracing::info!(cols = area.width, rows = area.height, "terminal resized");
            Ok(())
        }
        Err(e) => {
            shared.finish_resize(None);
            Err(e)
        }
    }
}

fn redraw_chrome<S: Screen>(screen: &mut S, label: &str) -> io::Result<ratatui::layout::Rect> {
    let area = screen.area()?;
    screen.clear()?;
    screen.present(&mut |buf: &mut Buffer| ui::draw_chrome(buf, area, label))?;
    Ok(area)
}
