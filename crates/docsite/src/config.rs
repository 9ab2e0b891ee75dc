// SPDX-FileCopyrightText: 2026 Circuitdocs Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration — a single immutable value assembled at startup.
//!
//! The config is typed here but not interpreted: search keys, analytics
//! identifiers and navigation data are carried through to the hosting
//! build pipeline via [`SiteConfig::pipeline_value`]. Keys this model does
//! not know about are preserved in `extra`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "Circuitdocs"
///   tagline: "A fast zk-SNARK library that offers a high-level API to design circuits"
///   url: "https://docs.example.net"
///   base_url: "/"
///
/// search:
///   app_id: "APPID123"
///   api_key: "public-key"
///   index_name: "circuits"
///
/// color_mode:
///   default_mode: light
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub i18n: I18n,
    #[serde(default)]
    pub search: Option<SearchConfig>,
    #[serde(default)]
    pub analytics: Option<AnalyticsConfig>,
    #[serde(default)]
    pub color_mode: ColorMode,
    #[serde(default)]
    pub announcement: Option<AnnouncementBar>,
    #[serde(default)]
    pub navbar: Vec<NavbarItem>,
    #[serde(default)]
    pub footer: Option<Footer>,
    /// Unmodeled keys, preserved for the hosting pipeline.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_favicon")]
    pub favicon: String,
    #[serde(default)]
    pub trailing_slash: bool,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_favicon() -> String {
    "img/favicon.ico".to_string()
}

/// Locale settings, used only for the `lang` attribute here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18n {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
        }
    }
}

/// Search-index settings (Algolia). Opaque passthrough — the public API
/// key is safe to commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    #[serde(default = "default_true")]
    pub contextual_search: bool,
    #[serde(default = "default_search_page")]
    pub search_page_path: String,
}

fn default_true() -> bool {
    true
}

fn default_search_page() -> String {
    "search".to_string()
}

/// Analytics identifiers. Opaque passthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub gtm_container_id: Option<String>,
    #[serde(default)]
    pub gtag_tracking_id: Option<String>,
    #[serde(default = "default_true")]
    pub anonymize_ip: bool,
}

/// Light/dark mode behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorMode {
    pub default_mode: String,
    #[serde(default)]
    pub disable_switch: bool,
    #[serde(default = "default_true")]
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self {
            default_mode: "light".to_string(),
            disable_switch: false,
            respect_prefers_color_scheme: true,
        }
    }
}

/// Banner pinned above the page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementBar {
    pub id: String,
    /// Markdown source.
    pub content: String,
    #[serde(default = "default_bar_background")]
    pub background_color: String,
    #[serde(default = "default_bar_text")]
    pub text_color: String,
    #[serde(default)]
    pub is_closeable: bool,
}

fn default_bar_background() -> String {
    "#fafbfc".to_string()
}

fn default_bar_text() -> String {
    "#091E42".to_string()
}

/// One navbar entry: either an internal doc link or an external href.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarItem {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default = "default_position")]
    pub position: String,
    #[serde(default)]
    pub class_name: Option<String>,
}

fn default_position() -> String {
    "left".to_string()
}

/// Footer link groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default = "default_footer_style")]
    pub style: String,
    #[serde(default)]
    pub links: Vec<FooterGroup>,
    #[serde(default)]
    pub copyright: Option<String>,
}

fn default_footer_style() -> String {
    "dark".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<NavbarItem>,
}

/// Config loading and passthrough errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
    #[error("config serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta {
                title: "Circuitdocs".to_string(),
                tagline: String::new(),
                url: String::new(),
                base_url: default_base_url(),
                favicon: default_favicon(),
                trailing_slash: false,
            },
            i18n: I18n::default(),
            search: None,
            analytics: None,
            color_mode: ColorMode::default(),
            announcement: None,
            navbar: Vec::new(),
            footer: None,
            extra: BTreeMap::new(),
        }
    }
}

impl SiteConfig {
    /// Parse a config from YAML source.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml_ng::from_str(yaml)?;
        diagnostics::log_debug!(
            "parsed site config for {title}",
            title: config.site.title.as_str()
        );
        Ok(config)
    }

    /// Load a config from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        diagnostics::log_info!(
            "loaded site config from {path}",
            path: path.display().to_string()
        );
        Ok(config)
    }

    /// Re-serialize the whole config for the hosting build pipeline,
    /// unchanged. Nothing in this crate interprets the passthrough
    /// sections (search, analytics, navbar, footer, extra).
    pub fn pipeline_value(&self) -> Result<serde_json::Value, ConfigError> {
        Ok(serde_json::to_value(self)?)
    }
}
