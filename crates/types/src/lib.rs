//! Shared type definitions for the Pac Defence site tooling.
//!
//! The navigation bar and applet configuration are validated when they are
//! constructed (including when deserialized), so every renderer downstream can
//! treat them as well-formed and never fail.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when site configuration is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The navigation bar has no entries.
    #[error("navigation bar must contain at least one entry")]
    EmptyNavigation,
    /// A navigation entry has an empty path.
    #[error("navigation entry '{0}' has an empty path")]
    EmptyPath(String),
    /// Two navigation entries share a path, so more than one could be emphasized.
    #[error("navigation entry path '{0}' is listed more than once")]
    DuplicateEntry(String),
    /// A required applet field is empty.
    #[error("applet field '{0}' must not be empty")]
    MissingField(&'static str),
    /// The applet's display area has a zero dimension.
    #[error("applet dimensions must be non-zero (got {width}x{height})")]
    InvalidDimension { width: u32, height: u32 },
}

/// One navigable page reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Page identifier, typically a bare filename such as `index.html`.
    pub path: String,
    /// Display text.
    pub label: String,
}

impl NavEntry {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// A trailing navbar link that is never emphasized (downloads and the like).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLink {
    pub href: String,
    pub label: String,
}

impl StaticLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Unvalidated shape of a [`NavBar`] as it appears in configuration files.
#[derive(Debug, Deserialize)]
struct RawNavBar {
    entries: Vec<NavEntry>,
    #[serde(default)]
    static_links: Vec<StaticLink>,
}

/// Ordered navigation entries followed by static links.
///
/// Entry order is display order. Construction rejects an empty entry list,
/// empty paths and duplicate paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavBar")]
pub struct NavBar {
    entries: Vec<NavEntry>,
    static_links: Vec<StaticLink>,
}

impl NavBar {
    pub fn new(
        entries: Vec<NavEntry>,
        static_links: Vec<StaticLink>,
    ) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyNavigation);
        }
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if is_blank(&entry.path) {
                return Err(ConfigError::EmptyPath(entry.label.clone()));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(ConfigError::DuplicateEntry(entry.path.clone()));
            }
        }
        Ok(Self { entries, static_links })
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn static_links(&self) -> &[StaticLink] {
        &self.static_links
    }

    /// Returns the entry whose path equals `page`, if any.
    pub fn entry_for(&self, page: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|entry| entry.path == page)
    }
}

impl TryFrom<RawNavBar> for NavBar {
    type Error = ConfigError;

    fn try_from(raw: RawNavBar) -> Result<Self, Self::Error> {
        NavBar::new(raw.entries, raw.static_links)
    }
}

#[derive(Debug, Deserialize)]
struct RawAppletConfig {
    archive: String,
    entry_class: String,
    width: u32,
    height: u32,
    min_runtime_version: String,
}

/// Options forwarded to the browser's Java plugin loader.
///
/// Fields are only reachable through accessors so a constructed value is
/// always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAppletConfig")]
pub struct AppletConfig {
    archive: String,
    entry_class: String,
    width: u32,
    height: u32,
    min_runtime_version: String,
}

impl AppletConfig {
    pub fn new(
        archive: impl Into<String>,
        entry_class: impl Into<String>,
        width: u32,
        height: u32,
        min_runtime_version: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            archive: archive.into(),
            entry_class: entry_class.into(),
            width,
            height,
            min_runtime_version: min_runtime_version.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// The Pac Defence applet: `PacDefence.jar`, 800x600, Java 1.6 or later.
    pub fn pac_defence() -> Self {
        Self {
            archive: "PacDefence.jar".into(),
            entry_class: "gui.Applet.class".into(),
            width: 800,
            height: 600,
            min_runtime_version: "1.6".into(),
        }
    }

    /// Path to the applet's jar bundle.
    pub fn archive(&self) -> &str {
        &self.archive
    }

    /// Fully-qualified entry class, e.g. `gui.Applet.class`.
    pub fn entry_class(&self) -> &str {
        &self.entry_class
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Minimum Java runtime the plugin must provide.
    pub fn min_runtime_version(&self) -> &str {
        &self.min_runtime_version
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("archive", &self.archive),
            ("entry_class", &self.entry_class),
            ("min_runtime_version", &self.min_runtime_version),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| is_blank(value)) {
            return Err(ConfigError::MissingField(*name));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl TryFrom<RawAppletConfig> for AppletConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAppletConfig) -> Result<Self, Self::Error> {
        AppletConfig::new(
            raw.archive,
            raw.entry_class,
            raw.width,
            raw.height,
            raw.min_runtime_version,
        )
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Everything the site renderers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub navbar: NavBar,
    #[serde(default = "AppletConfig::pac_defence")]
    pub applet: AppletConfig,
}

impl SiteConfig {
    /// The published Pac Defence site, including both download links.
    pub fn pac_defence() -> Self {
        let entries = vec![
            NavEntry::new("index.html", "Main"),
            NavEntry::new("pacdefence.html", "Pac Defence"),
            NavEntry::new("debug.html", "Pac Defence (debug)"),
            NavEntry::new("changelog.html", "Change Log"),
            NavEntry::new("screenshots.html", "Screenshots"),
        ];
        let static_links = vec![
            StaticLink::new("PacDefence.jar", "Download"),
            StaticLink::new("PacDefenceSrc.jar", "Download (with source)"),
        ];
        Self {
            navbar: NavBar {
                entries,
                static_links,
            },
            applet: AppletConfig::pac_defence(),
        }
    }
}
