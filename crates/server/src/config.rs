use std::{collections::HashMap, fs, net::SocketAddr, path::Path};

use anyhow::Context;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "server.toml";

#[derive(Debug)]
pub struct Settings {
    pub server_bind: String,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3000".into(),
            max_body_bytes: 16 * 1024,
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(DEFAULT_CONFIG_FILE))
}

pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => apply_file_values(&mut settings, &file_cfg),
            Err(error) => warn!(path = %path.display(), %error, "ignoring unparseable config file"),
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("APP__MAX_BODY_BYTES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }

    settings
}

fn apply_file_values(settings: &mut Settings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
        settings.server_bind = v.to_string();
    }
    match file_cfg.get("max_body_bytes") {
        Some(toml::Value::Integer(bytes)) => match usize::try_from(*bytes) {
            Ok(parsed) => settings.max_body_bytes = parsed,
            Err(_) => warn!(bytes, "max_body_bytes must not be negative"),
        },
        Some(toml::Value::String(bytes)) => match bytes.parse::<usize>() {
            Ok(parsed) => settings.max_body_bytes = parsed,
            Err(_) => warn!(%bytes, "invalid max_body_bytes"),
        },
        Some(other) => warn!(%other, "invalid max_body_bytes"),
        None => {}
    }
}

pub fn parse_bind_addr(raw: &str) -> anyhow::Result<SocketAddr> {
    let raw = raw.trim();
    let raw = raw.strip_prefix("http://").unwrap_or(raw);
    let raw = if raw.starts_with(':') {
        format!("0.0.0.0{raw}")
    } else {
        raw.to_string()
    };
    raw.parse()
        .with_context(|| format!("invalid bind address '{raw}'"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
