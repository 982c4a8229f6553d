use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Space id shipped in the template config before a real space is set up.
pub const PLACEHOLDER_SPACE_ID: &str = "YOUR_SPACE_ID";
/// Access token shipped in the template config before a real token is set up.
pub const PLACEHOLDER_ACCESS_TOKEN: &str = "YOUR_ACCESS_TOKEN";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub contentful: ContentfulConfig,
  #[serde(default)]
  pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentfulConfig {
  #[serde(default = "default_space_id")]
  pub space_id: String,
  #[serde(default = "default_environment")]
  pub environment: String,
  /// Delivery API host, overridable for preview hosts and tests
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Falls back to environment variables when unset (see `resolve_access_token`)
  pub access_token: Option<String>,
  /// Freshness window for cached responses
  #[serde(default = "default_cache_ttl_secs")]
  pub cache_ttl_secs: u64,
}

impl Default for ContentfulConfig {
  fn default() -> Self {
    Self {
      space_id: default_space_id(),
      environment: default_environment(),
      base_url: default_base_url(),
      access_token: None,
      cache_ttl_secs: default_cache_ttl_secs(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
  /// Also refresh footer and sidebar text in the shared bootstrap
  #[serde(default)]
  pub refresh_chrome: bool,
  /// The page runs a mobile-menu plugin that clones `#mobile-menu` at load.
  /// Navigation is never re-rendered while this is set.
  #[serde(default = "default_true")]
  pub mobile_menu_plugin: bool,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      refresh_chrome: false,
      mobile_menu_plugin: true,
    }
  }
}

fn default_space_id() -> String {
  PLACEHOLDER_SPACE_ID.to_string()
}

fn default_environment() -> String {
  "master".to_string()
}

fn default_base_url() -> String {
  "https://cdn.contentful.com".to_string()
}

fn default_cache_ttl_secs() -> u64 {
  300
}

fn default_true() -> bool {
  true
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./contentbind.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/contentbind/config.yaml
  ///
  /// With no file anywhere the defaults are used, which leaves the client
  /// unconfigured and every page initializer a no-op.
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    let mut config = match path {
      Some(p) => Self::load_from_path(&p)?,
      None => Config::default(),
    };

    if config.contentful.access_token.is_none() {
      config.contentful.access_token = Self::get_access_token();
    }

    Ok(config)
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("contentbind.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("contentbind").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    Self::from_yaml(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))
  }

  pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
    serde_yaml::from_str(contents)
  }

  /// Get the delivery API token from environment variables.
  ///
  /// Checks CONTENTBIND_ACCESS_TOKEN first, then CONTENTFUL_ACCESS_TOKEN as fallback.
  pub fn get_access_token() -> Option<String> {
    std::env::var("CONTENTBIND_ACCESS_TOKEN")
      .or_else(|_| std::env::var("CONTENTFUL_ACCESS_TOKEN"))
      .ok()
  }
}

impl ContentfulConfig {
  /// Token used for requests; the placeholder when none was provided.
  pub fn resolve_access_token(&self) -> &str {
    self
      .access_token
      .as_deref()
      .filter(|t| !t.is_empty())
      .unwrap_or(PLACEHOLDER_ACCESS_TOKEN)
  }

  /// Whether the placeholder credentials have been replaced.
  pub fn is_configured(&self) -> bool {
    !self.space_id.is_empty()
      && self.space_id != PLACEHOLDER_SPACE_ID
      && self.resolve_access_token() != PLACEHOLDER_ACCESS_TOKEN
  }
}
