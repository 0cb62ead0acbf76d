use crate::config;

/// Load settings from the environment, falling back to defaults.
///
/// Runs before the terminal is taken over, so problems go to stderr.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => s,
            Err(msg) => {
                eprintln!("itti: invalid settings, using defaults: {msg}");
                config::Settings::default()
            }
        },
        Err(e) => {
            eprintln!("itti: failed to read settings, using defaults: {e}");
            config::Settings::default()
        }
    }
}
