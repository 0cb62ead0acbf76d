//! State shared between the render thread, the resize handler and input.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use ratatui::layout::Rect;

/// Terminal geometry as last seen by the resize handler.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub rows: u16,
    pub cols: u16,
    /// While set the render loop must not draw.
    pub resizing: bool,
}

impl LayoutState {
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.cols, self.rows)
    }
}

#[derive(Debug, Default)]
pub struct SharedState {
    layout: Mutex<LayoutState>,
    quit: AtomicBool,
}

pub type SharedHandle = Arc<SharedState>;

impl SharedState {
    pub fn new(area: Rect) -> Self {
        Self {
            layout: Mutex::new(LayoutState {
                rows: area.height,
                cols: area.width,
                resizing: false,
            }),
            quit: AtomicBool::new(false),
        }
    }

    fn lock_layout(&self) -> MutexGuard<'_, LayoutState> {
        self.layout.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of all layout fields, taken under one lock.
    pub fn layout(&self) -> LayoutState {
        *self.lock_layout()
    }

    pub fn begin_resize(&self) {
        self.lock_layout().resizing = true;
    }

    /// Clear the resizing flag, storing the new geometry when there is one.
    pub fn finish_resize(&self, area: Option<Rect>) {
        let mut layout = self.lock_layout();
        if let Some(area) = area {
            layout.rows = area.height;
            layout.cols = area.width;
        }
        layout.resizing = false;
    }

    /// Once set, never cleared.
    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::SeqCst);
    }

    pub fn should_quit(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }
}
