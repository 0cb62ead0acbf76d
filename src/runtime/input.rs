//! Keyboard handling on the main thread.

use std::io;
use std::sync::Mutex;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::player::{PlayerControl, TransportCmd};

use super::render_loop::request_quit;
use super::resize::handle_resize;
use super::screen::Screen;
use super::shared::SharedState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Send(TransportCmd),
    Ignore,
}

pub fn map_key(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('<') => KeyAction::Send(TransportCmd::Previous),
        KeyCode::Char('>') => KeyAction::Send(TransportCmd::Next),
        _ => KeyAction::Ignore,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle one terminal event. Resize events are routed to the resize
/// handler; a failed redraw or transport command is logged and otherwise
/// ignored.
pub fn dispatch<S, C>(
    event: Event,
    shared: &SharedState,
    screen: &Mutex<S>,
    control: &C,
    label: &str,
) -> io::Result<Flow>
where
    S: Screen,
    C: PlayerControl + ?Sized,
{
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key.code) {
            KeyAction::Quit => {
                request_quit(shared, screen);
                Ok(Flow::Quit)
            }
            KeyAction::Send(cmd) => {
                if let Err(e) = control.send(cmd) {
                    tracing::warn!(error = %e, "transport command failed");
                }
                Ok(Flow::Continue)
            }
            KeyAction::Ignore => Ok(Flow::Continue),
        },
        Event::Resize(..) => {
            if let Err(e) = handle_resize(shared, screen, label) {
                tracing::warn!(error = %e, "failed to redraw after resize");
            }
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Continue),
    }
}

/// Block on terminal events until `q` is pressed.
pub fn run<S, C>(
    shared: &SharedState,
    screen: &Mutex<S>,
    control: &C,
    label: &str,
) -> io::Result<()>
where
    S: Screen,
    C: PlayerControl + ?Sized,
{
    loop {
        let event = event::read()?;
        if dispatch(event, shared, screen, control, label)? == Flow::Quit {
            return Ok(());
        }
    }
}
