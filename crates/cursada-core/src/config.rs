use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Weekday;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::date::parse_week_start;

const CONFIG_FILE: &str = "cursada.toml";
const CONFIG_ENV_VAR: &str = "CURSADA_CONFIG";
const DEFAULT_WEEK_START: &str = "sunday";
const DEFAULT_TITLE: &str = "Calendario";

fn default_week_start() -> String {
    DEFAULT_WEEK_START.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub events: Option<PathBuf>,

    #[serde(default)]
    pub periods: Option<PathBuf>,

    #[serde(default = "default_week_start")]
    pub week_start: String,

    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events: None,
            periods: None,
            week_start: default_week_start(),
            timezone: None,
            title: default_title(),
            loaded_from: None,
        }
    }
}

impl Config {
    #[tracing::instrument(skip(config_override))]
    pub fn load(config_override: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = resolve_config_path(config_override) else {
            warn!("no {CONFIG_FILE} found; using defaults");
            return Ok(Self::default());
        };

        info!(config = %path.display(), "loading calendar config");
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let mut config = Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let base_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        config.events = config.events.map(|p| resolve_relative(&base_dir, p));
        config.periods = config.periods.map(|p| resolve_relative(&base_dir, p));
        config.loaded_from = Some(path);

        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let mut config: Config = toml::from_str(raw)?;
        config.sanitize();
        info!(
            week_start = %config.week_start,
            timezone = ?config.timezone,
            events = ?config.events,
            periods = ?config.periods,
            "loaded calendar config"
        );
        Ok(config)
    }

    /// CLI flags win over file values.
    pub fn apply_overrides(&mut self, events: Option<PathBuf>, periods: Option<PathBuf>) {
        if let Some(path) = events {
            debug!(events = %path.display(), "overriding events path");
            self.events = Some(path);
        }
        if let Some(path) = periods {
            debug!(periods = %path.display(), "overriding periods path");
            self.periods = Some(path);
        }
    }

    pub fn week_start_day(&self) -> Weekday {
        parse_week_start(&self.week_start).unwrap_or(Weekday::Sun)
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.timezone.as_deref().and_then(parse_timezone)
    }

    fn sanitize(&mut self) {
        if parse_week_start(&self.week_start).is_none() {
            warn!(
                week_start = %self.week_start,
                "unsupported week start; falling back to sunday"
            );
            self.week_start = default_week_start();
        }

        if self.title.trim().is_empty() {
            self.title = default_title();
        }

        if let Some(raw) = &self.timezone
            && parse_timezone(raw).is_none()
        {
            self.timezone = None;
        }
    }
}

fn parse_timezone(raw: &str) -> Option<Tz> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(error) => {
            tracing::error!(
                timezone = %trimmed,
                error = %error,
                "invalid timezone id; using the local clock"
            );
            None
        }
    }
}

fn resolve_config_path(config_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = config_override {
        return Some(path.to_path_buf());
    }

    if let Ok(raw) = std::env::var(CONFIG_ENV_VAR) {
        if raw == "/dev/null" {
            return None;
        }
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    let candidate = dirs::config_dir()?.join("cursada").join(CONFIG_FILE);
    candidate.exists().then_some(candidate)
}

fn resolve_relative(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
