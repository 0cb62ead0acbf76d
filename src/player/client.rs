use std::io;
use std::process::{Command, Stdio};

use crate::config::PlayerSettings;

use super::capture::capture_bounded;
use super::record::{TrackRecord, decode_record};
use super::types::{PlayerControl, QueryError, TrackSource, TransportCmd, TransportError};

/// Runs the configured player commands through the configured shell.
#[derive(Debug, Clone)]
pub struct PlayerClient {
    settings: PlayerSettings,
}

impl PlayerClient {
    pub fn new(settings: PlayerSettings) -> Self {
        Self { settings }
    }

    fn shell(&self, line: &str) -> Command {
        let mut cmd = Command::new(&self.settings.shell);
        cmd.arg("-c").arg(line).stdin(Stdio::null()).stderr(Stdio::null());
        cmd
    }

    /// Run the query command once and decode its output.
    ///
    /// There is no retry here; the render loop's next poll is the retry.
    pub fn fetch(&self) -> Result<TrackRecord, QueryError> {
        let line = &self.settings.query_command;
        let limit = self.settings.capture_limit;
        let failure = |source: io::Error| QueryError::ProcessFailure {
            command: line.clone(),
            source,
        };

        let mut child = self.shell(line).stdout(Stdio::piped()).spawn().map_err(failure)?;
        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(failure(io::Error::other("stdout was not captured")));
        };

        let capture = match capture_bounded(stdout, limit) {
            Ok(c) => c,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(failure(e));
            }
        };

        if capture.truncated {
            // Whatever is still being written is dropped; don't let the child block on a full pipe.
            let _ = child.kill();
            let _ = child.wait();
        } else {
            let status = child.wait().map_err(failure)?;
            if !status.success() {
                return Err(failure(io::Error::other(format!("exited with {status}"))));
            }
        }

        let text = capture.text();
        match decode_record(&text, &self.settings.delimiter) {
            Ok(record) => {
                if capture.truncated {
                    tracing::warn!(limit, "query output truncated; showing partial record");
                }
                Ok(record)
            }
            Err(_) if capture.truncated => Err(QueryError::TruncatedOutput { limit }),
            Err(e) => Err(e),
        }
    }

    /// Run the previous/next command and wait for it, discarding its output.
    pub fn send(&self, cmd: TransportCmd) -> Result<(), TransportError> {
        let line = match cmd {
            TransportCmd::Previous => &self.settings.previous_command,
            TransportCmd::Next => &self.settings.next_command,
        };
        let failure = |source: io::Error| TransportError {
            cmd,
            command: line.clone(),
            source,
        };

        let status = self
            .shell(line)
            .stdout(Stdio::null())
            .status()
            .map_err(failure)?;
        if !status.success() {
            return Err(failure(io::Error::other(format!("exited with {status}"))));
        }
        Ok(())
    }
}

impl TrackSource for PlayerClient {
    fn fetch(&mut self) -> Result<TrackRecord, QueryError> {
        PlayerClient::fetch(self)
    }
}

impl PlayerControl for PlayerClient {
    fn send(&self, cmd: TransportCmd) -> Result<(), TransportError> {
        PlayerClient::send(self, cmd)
    }
}
