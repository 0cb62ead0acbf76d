//! Error and command types shared by the player client.

use std::io;

use thiserror::Error;

/// Why a track query produced no record. None of these are fatal.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The query command could not be spawned, read, or exited unsuccessfully.
    #[error("query command `{command}` failed: {source}")]
    ProcessFailure {
        command: String,
        #[source]
        source: io::Error,
    },
    /// A field was missing or did not parse.
    #[error("field `{field}` is malformed: {value:?}")]
    MalformedField { field: &'static str, value: String },
    /// Output went past the capture limit and what was kept did not decode.
    #[error("query output exceeded {limit} bytes and the record was cut short")]
    TruncatedOutput { limit: usize },
}

#[derive(Debug, Error)]
#[error("{cmd:?} command `{command}` failed: {source}")]
pub struct TransportError {
    pub cmd: TransportCmd,
    pub command: String,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransportCmd {
    /// Skip back to the previous track.
    Previous,
    /// Skip to the next track.
    Next,
}

/// Anything that can produce the current track, once per call.
pub trait TrackSource {
    fn fetch(&mut self) -> Result<super::TrackRecord, QueryError>;
}

/// Anything that can skip tracks on the player.
pub trait PlayerControl {
    fn send(&self, cmd: TransportCmd) -> Result<(), TransportError>;
}
