//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml` in the working directory.
//!
//! Without the file the service listens on `0.0.0.0:4321` and logs at `info`.
//! See `settings.toml.example` for the keys.
use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("settings")
    }

    fn from_file(name: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "0.0.0.0")?
            .set_default("server.port", 4321)?
            .add_source(File::with_name(name).required(false))
            .build()?;

        settings.try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let settings = Settings::from_file("does-not-exist/settings").unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.address(), "0.0.0.0:4321");
    }
}
