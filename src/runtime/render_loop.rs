//! Background thread that polls the player and repaints the dashboard.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ratatui::buffer::Buffer;

use crate::config::UiSettings;
use crate::player::{TrackRecord, TrackSource};
use crate::ui;

use super::screen::{Screen, lock_screen};
use super::shared::{LayoutState, SharedHandle, SharedState};

/// What one pass of the loop did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cycle {
    /// Quit was requested; nothing was drawn.
    Stopped,
    /// A resize was in progress; nothing was queried or drawn.
    Resizing,
    /// The query failed; nothing was drawn.
    QueryFailed,
    /// The frame could not be written to the terminal.
    DrawFailed,
    Drawn,
}

/// Query once and, unless quitting or resizing, draw the result.
pub fn run_cycle<S, T>(
    shared: &SharedState,
    screen: &Mutex<S>,
    source: &mut T,
    ui_settings: &UiSettings,
) -> Cycle
where
    S: Screen,
    T: TrackSource + ?Sized,
{
    if shared.should_quit() {
        return Cycle::Stopped;
    }
    if shared.layout().resizing {
        return Cycle::Resizing;
    }

    let track = match source.fetch() {
        Ok(track) => track,
        Err(e) => {
            tracing::warn!(error = %e, "player query failed; skipping frame");
            return Cycle::QueryFailed;
        }
    };
    tracing::debug!(
        title = %track.title,
        position = track.position_secs,
        volume = ?track.volume,
        "polled player"
    );

    let mut screen = lock_screen(screen);
    // Re-checked under the screen lock: quit and resize both take it too.
    if shared.should_quit() {
        return Cycle::Stopped;
    }
    let layout = shared.layout();
    if layout.resizing {
        return Cycle::Resizing;
    }

    match screen.present(&mut |buf: &mut Buffer| paint_frame(buf, layout, &track, ui_settings)) {
        Ok(()) => Cycle::Drawn,
        Err(e) => {
            tracing::warn!(error = %e, "failed to draw frame");
            Cycle::DrawFailed
        }
    }
}

fn paint_frame(
    buf: &mut Buffer,
    layout: LayoutState,
    track: &TrackRecord,
    ui_settings: &UiSettings,
) {
    let area = layout.area().intersection(buf.area);
    let label = ui::format_time(track.position_secs, track.duration_secs);
    let width = ui::bar_width(area.width, &label);
    let line = ui::render_bar(width, track.position_secs, track.duration_secs, &label);

    ui::draw_chrome(buf, area, &ui_settings.label);
    ui::draw_track(
        buf,
        area,
        &track.title,
        &track.artist,
        &track.album,
        ui_settings.overflow,
    );
    ui::draw_progress_bar(buf, area, &line);
}

/// Set the quit flag while holding the screen lock, so no frame is written
/// once this returns.
pub fn request_quit<S: Screen>(shared: &SharedState, screen: &Mutex<S>) {
    let _screen = lock_screen(screen);
    shared.request_quit();
}

/// Handle to the running render thread.
pub struct RenderLoop<S: Screen> {
    shared: SharedHandle,
    screen: Arc<Mutex<S>>,
    wake: Sender<()>,
    join: Option<JoinHandle<()>>,
}

impl<S: Screen + 'static> RenderLoop<S> {
    pub fn spawn<T>(
        shared: SharedHandle,
        screen: Arc<Mutex<S>>,
        mut source: T,
        ui_settings: UiSettings,
    ) -> Self
    where
        T: TrackSource + Send + 'static,
    {
        let (wake, wake_rx) = mpsc::channel::<()>();
        let interval = ui_settings.poll_interval();

        let thread_shared = shared.clone();
        let thread_screen = screen.clone();
        let join = thread::spawn(move || {
            tracing::info!(?interval, "render loop started");
            loop {
                let cycle = run_cycle(&thread_shared, &thread_screen, &mut source, &ui_settings);
                if cycle == Cycle::Stopped || !sleep(&wake_rx, interval) {
                    break;
                }
            }
            tracing::info!("render loop stopped");
        });

        Self {
            shared,
            screen,
            wake,
            join: Some(join),
        }
    }
}

impl<S: Screen> RenderLoop<S> {
    /// Request quit, wake the thread and wait for it to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(join) = self.join.take() else {
            return;
        };
        request_quit(&self.shared, &self.screen);
        let _ = self.wake.send(());
        if join.join().is_err() {
            tracing::warn!("render thread panicked");
        }
    }
}

impl<S: Screen> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// Returns false when the loop should end: woken for quit, or the handle is gone.
fn sleep(wake: &Receiver<()>, interval: Duration) -> bool {
    match wake.recv_timeout(interval) {
        Err(RecvTimeoutError::Timeout) => true,
        Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
    }
}
