use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads environment variables (prefix `ITTI__`, `__` as the
/// nested separator) and falls back to struct defaults for anything unset.
impl Settings {
    /// Load settings from the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let cfg = ::config::Config::builder()
            .add_source(
                ::config::Environment::with_prefix("ITTI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.player.shell.trim().is_empty() {
            return Err("player.shell must not be empty".to_string());
        }
        if self.player.delimiter.is_empty() {
            return Err("player.delimiter must not be empty".to_string());
        }
        if self.player.capture_limit == 0 {
            return Err("player.capture_limit must be >= 1".to_string());
        }
        if self.ui.poll_interval_ms == 0 {
            return Err("ui.poll_interval_ms must be >= 1".to_string());
        }
        Ok(())
    }
}
