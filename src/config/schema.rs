use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level application settings.
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ITTI__`, `__` as nested separator)
/// 2) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

/// How the external player is queried and driven.
///
/// Every command is a shell line run as `<shell> -c <line>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub shell: String,
    /// Prints one record: title, artist, album, duration, position and
    /// optionally volume, separated by `delimiter`.
    pub query_command: String,
    pub previous_command: String,
    pub next_command: String,
    pub delimiter: String,
    /// Bytes of query output kept; anything past this is dropped.
    pub capture_limit: usize,
}

pub const DEFAULT_DELIMITER: &str = "SONG_PART_DELIM";

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
            query_command: concat!(
                "osascript -e 'tell application \"iTunes\" to ",
                "(name of current track) & \"SONG_PART_DELIM\" & ",
                "(artist of current track) & \"SONG_PART_DELIM\" & ",
                "(album of current track) & \"SONG_PART_DELIM\" & ",
                "(duration of current track) & \"SONG_PART_DELIM\" & ",
                "(player position) & \"SONG_PART_DELIM\" & ",
                "(sound volume)'"
            )
            .to_string(),
            previous_command: "osascript -e 'tell application \"iTunes\" to previous track'"
                .to_string(),
            next_command: "osascript -e 'tell application \"iTunes\" to next track'".to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            capture_limit: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text centered in the title bar.
    pub label: String,
    /// Delay between two player queries (milliseconds).
    pub poll_interval_ms: u64,
    /// What to do with track fields wider than the screen.
    pub overflow: Overflow,
}

impl UiSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            label: "itti".to_string(),
            poll_interval_ms: 1000,
            overflow: Overflow::Clip,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    /// Cut the text at the last column that fits.
    #[default]
    #[serde(alias = "truncate", alias = "hard")]
    Clip,
    /// Cut one column earlier and end with `…`.
    #[serde(alias = "ellipsis-marker", alias = "dots")]
    Ellipsis,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file to append to. Logging is off when unset.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directives; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}
