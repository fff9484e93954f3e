//! Configuration types for cloister.
//!
//! [`Config::load`] reads `~/.config/cloister/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[labels]
donation_page  = "후원 페이지"
donation_link  = "후원 링크"
bank           = "은행"
holder         = "예금주"
account_number = "계좌번호"
empty_listing  = "현재 표시할 후원 기관이 없습니다."

[directory]
page_size = 6
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/cloister/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// `[labels]` section: localized display strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Labels {
    /// Default label for a legacy donation page link when no note is present.
    #[serde(default = "default_donation_page")]
    pub donation_page: String,
    /// Fallback text for rendering a link method that has no label.
    #[serde(default = "default_donation_link")]
    pub donation_link: String,
    #[serde(default = "default_bank")]
    pub bank: String,
    #[serde(default = "default_holder")]
    pub holder: String,
    #[serde(default = "default_account_number")]
    pub account_number: String,
    #[serde(default = "default_empty_listing")]
    pub empty_listing: String,
}

fn default_donation_page() -> String { "후원 페이지".to_string() }
fn default_donation_link() -> String { "후원 링크".to_string() }
fn default_bank() -> String { "은행".to_string() }
fn default_holder() -> String { "예금주".to_string() }
fn default_account_number() -> String { "계좌번호".to_string() }
fn default_empty_listing() -> String { "현재 표시할 후원 기관이 없습니다.".to_string() }

impl Default for Labels {
    fn default() -> Self {
        Self {
            donation_page: default_donation_page(),
            donation_link: default_donation_link(),
            bank: default_bank(),
            holder: default_holder(),
            account_number: default_account_number(),
            empty_listing: default_empty_listing(),
        }
    }
}

/// `[directory]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryConfig {
    /// Institutions per page in the donation listing.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize { 6 }

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/cloister/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. Keys
    /// missing from the file keep their default values.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("cloister")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
