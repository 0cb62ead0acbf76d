//! The one seam through which anything reaches the terminal.

use std::io::{self, Stdout};
use std::sync::{Mutex, MutexGuard};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, buffer::Buffer, layout::Rect};

/// A drawable terminal.
///
/// Every call repaints a whole frame: anything `paint` leaves untouched is
/// blank afterwards.
pub trait Screen: Send {
    /// Re-read the current geometry.
    fn area(&mut self) -> io::Result<Rect>;
    fn clear(&mut self) -> io::Result<()>;
    fn present(&mut self, paint: &mut dyn FnMut(&mut Buffer)) -> io::Result<()>;
}

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

impl Screen for CrosstermTerminal {
    fn area(&mut self) -> io::Result<Rect> {
        self.autoresize()?;
        let size = self.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        Terminal::clear(self)
    }

    fn present(&mut self, paint: &mut dyn FnMut(&mut Buffer)) -> io::Result<()> {
        self.draw(|frame| paint(frame.buffer_mut()))?;
        Ok(())
    }
}

/// Lock the shared screen, recovering from a poisoned lock.
pub fn lock_screen<S: Screen>(screen: &Mutex<S>) -> MutexGuard<'_, S> {
    screen.lock().unwrap_or_else(|e| e.into_inner())
}

/// Raw mode, alternate screen, hidden cursor.
pub fn setup() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = restore();
        return Err(e);
    }
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore();
            Err(e)
        }
    }
}

/// Undo [`setup`]. Safe to call more than once.
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
