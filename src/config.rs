use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use container_iso::helper::DEFAULT_SIZE;
use container_iso::models::{IsoCode, ParsedSerial, Verdict};

/// Root configuration structure, deserialized from `.container-iso/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// How classification and validation outcomes are judged.
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Deserialize)]
pub struct Defaults {
    /// Size prefix used when `--size` is not given.
    #[serde(default = "default_size")]
    pub size: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            size: default_size(),
        }
    }
}

fn default_size() -> String {
    DEFAULT_SIZE.to_string()
}

#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// Free text that matches no alias rule.
    #[serde(default = "default_warn")]
    pub unresolved_type: PolicyAction,
    /// Serial with the right shape but the wrong check digit.
    #[serde(default = "default_error")]
    pub invalid_check_digit: PolicyAction,
    /// Input that is not shaped like a serial at all.
    #[serde(default = "default_error")]
    pub malformed_serial: PolicyAction,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            unresolved_type: PolicyAction::Warn,
            invalid_check_digit: PolicyAction::Error,
            malformed_serial: PolicyAction::Error,
        }
    }
}

fn default_warn() -> PolicyAction {
    PolicyAction::Warn
}

fn default_error() -> PolicyAction {
    PolicyAction::Error
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Pass,
    Warn,
    /// The CLI exits with code 1.
    Error,
}

impl PolicyAction {
    pub fn to_verdict(&self) -> Verdict {
        match self {
            PolicyAction::Pass => Verdict::Pass,
            PolicyAction::Warn => Verdict::Warn,
            PolicyAction::Error => Verdict::Error,
        }
    }
}

impl Config {
    pub fn type_verdict(&self, code: Option<IsoCode>) -> Verdict {
        match code {
            Some(_) => Verdict::Pass,
            None => self.policy.unresolved_type.to_verdict(),
        }
    }

    pub fn serial_verdict(&self, parsed: Option<&ParsedSerial>) -> Verdict {
        match parsed {
            Some(p) if p.is_valid => Verdict::Pass,
            Some(_) => self.policy.invalid_check_digit.to_verdict(),
            None => self.policy.malformed_serial.to_verdict(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.container-iso/config.toml`
/// 3. `~/.config/container-iso/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".container-iso").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("container-iso")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
