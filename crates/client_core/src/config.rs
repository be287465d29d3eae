use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "mixer.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub status_clear_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".into(),
            status_clear_ms: 2000,
        }
    }
}

impl ClientSettings {
    pub fn status_clear_after(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

pub fn load_settings() -> anyhow::Result<ClientSettings> {
    load_settings_from(Path::new(DEFAULT_CONFIG_FILE))
}

/// Defaults, then the flat `key = "value"` file if present, then environment.
pub fn load_settings_from(path: &Path) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(&raw)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        if let Some(v) = file_cfg.get("server_url").and_then(toml::Value::as_str) {
            settings.server_url = v.to_string();
        }
        if let Some(v) = file_cfg.get("status_clear_ms") {
            settings.status_clear_ms = match v {
                toml::Value::Integer(ms) => u64::try_from(*ms)
                    .with_context(|| format!("status_clear_ms must not be negative: {ms}"))?,
                toml::Value::String(ms) => ms
                    .parse()
                    .with_context(|| format!("invalid status_clear_ms '{ms}'"))?,
                other => bail!("invalid status_clear_ms {other}"),
            };
        }
    }

    if let Ok(v) = std::env::var("MIXER_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Ok(v) = std::env::var("APP__STATUS_CLEAR_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.status_clear_ms = parsed;
        }
    }

    settings.server_url = normalize_server_url(&settings.server_url)?;
    Ok(settings)
}

pub fn normalize_server_url(raw: &str) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(ClientSettings::default().server_url);
    }

    let parsed = Url::parse(trimmed).with_context(|| format!("invalid server url '{trimmed}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("server url must be http(s): '{trimmed}'");
    }
    Ok(trimmed.to_string())
}
