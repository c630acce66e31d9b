use crate::toast::{ParseLayoutError, ToastLayout};
use dioxus::prelude::use_context;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_WINDOW_TITLE: &str = "Toasts";

const LAYOUT_KEY: &str = "TOAST_LAYOUT";
const WINDOW_TITLE_KEY: &str = "TOAST_WINDOW_TITLE";
const STDIN_FEED_KEY: &str = "TOAST_STDIN_FEED";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(#[from] ParseLayoutError),
    #[error("Invalid boolean for {key}: {value}")]
    InvalidBool { key: &'static str, value: String },
    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Application configuration
/// In debug builds a .env file is loaded first, then the process environment is read
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Presentation variant of the toast overlay
    pub layout: ToastLayout,
    pub window_title: String,
    /// Read JSON-lines toast requests from stdin
    pub read_stdin_feed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            layout: ToastLayout::default(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            read_stdin_feed: false,
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults for bad values
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                tracing::info!("Config: Dev mode - loaded .env file");
            } else {
                debug!("Config: No .env file found");
            }
        }

        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    /// Strict parse from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            layout: parse_layout(lookup(LAYOUT_KEY))?,
            window_title: parse_title(lookup(WINDOW_TITLE_KEY)),
            read_stdin_feed: parse_bool(STDIN_FEED_KEY, lookup(STDIN_FEED_KEY))?,
        })
    }

    /// Strict parse of a .env style file, without touching the process environment
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup_lenient<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let layout = parse_layout(lookup(LAYOUT_KEY)).unwrap_or_else(|e| {
            warn!("Config: {}, using {}", e, defaults.layout);
            defaults.layout
        });
        let read_stdin_feed =
            parse_bool(STDIN_FEED_KEY, lookup(STDIN_FEED_KEY)).unwrap_or_else(|e| {
                warn!("Config: {}, feed disabled", e);
                defaults.read_stdin_feed
            });

        let config = Config {
            layout,
            window_title: parse_title(lookup(WINDOW_TITLE_KEY)),
            read_stdin_feed,
        };
        debug!("Config: {:?}", config);
        config
    }
}

fn parse_layout(value: Option<String>) -> Result<ToastLayout, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.parse()?),
        _ => Ok(ToastLayout::default()),
    }
}

fn parse_title(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string())
}

fn parse_bool(key: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_lowercase().as_str() {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

/// Hook to access the application config provided at launch
pub fn use_config() -> Config {
    use_context::<Config>()
}
