use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use app_core::CoordinatorOptions;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "devprod.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub user_name: String,
    pub reply_delay_ms: u64,
    pub verification_delay_ms: u64,
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_name: "Jane".into(),
            reply_delay_ms: 1500,
            verification_delay_ms: 1500,
            tick_ms: 100,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    user_name: Option<String>,
    reply_delay_ms: Option<u64>,
    verification_delay_ms: Option<u64>,
    tick_ms: Option<u64>,
}

impl Settings {
    pub fn coordinator_options(&self) -> CoordinatorOptions {
        CoordinatorOptions {
            user_name: self.user_name.clone(),
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            verification_delay: Duration::from_millis(self.verification_delay_ms),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Defaults, then the TOML file, then `APP__*` environment variables.
///
/// An explicit `path` must exist; the default `devprod.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };
    if let Some(raw) = raw {
        apply_file(&mut settings, &raw)?;
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw).context("failed to parse config file")?;

    if let Some(v) = file_cfg.user_name {
        settings.user_name = v;
    }
    if let Some(v) = file_cfg.reply_delay_ms {
        settings.reply_delay_ms = v;
    }
    if let Some(v) = file_cfg.verification_delay_ms {
        settings.verification_delay_ms = v;
    }
    if let Some(v) = file_cfg.tick_ms {
        settings.tick_ms = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__USER_NAME") {
        let v = v.trim();
        if !v.is_empty() {
            settings.user_name = v.to_string();
        }
    }

    if let Some(parsed) = lookup("APP__REPLY_DELAY_MS").and_then(|v| v.trim().parse().ok()) {
        settings.reply_delay_ms = parsed;
    }
    if let Some(parsed) = lookup("APP__VERIFICATION_DELAY_MS").and_then(|v| v.trim().parse().ok())
    {
        settings.verification_delay_ms = parsed;
    }
    if let Some(parsed) = lookup("APP__TICK_MS").and_then(|v| v.trim().parse().ok()) {
        settings.tick_ms = parsed;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
