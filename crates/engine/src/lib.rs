//! # Pac Defence Site Engine
//!
//! Renders the shared pieces of the Pac Defence website and assembles its pages.
//!
//! ## Key Features
//!
//! - **Navigation Bar**: Pure rendering of the navbar with the current page emphasized
//! - **Applet Launch**: The `deployJava.runApplet` call that starts the game in the browser
//! - **Page Generation**: Merges `master.html` with each `*.part.html`, expanding
//!   `${{ ... }}` placeholders
//! - **Site Config**: YAML/JSON description of navigation entries, static links and the applet
//!
//! ## Usage
//!
//! ```rust
//! use pacsite_engine::{BuildOptions, build_site};
//! use pacsite_types::SiteConfig;
//!
//! let temp_dir = tempfile::tempdir()?;
//! let dir = temp_dir.path();
//! std::fs::write(dir.join("master.html"), "<head>\n</head>\n<body>\n${{ navbar }}\n</body>\n")?;
//! std::fs::write(dir.join("index.part.html"), "<head>\n</head>\n<body>\n<p>Hi</p>\n</body>\n")?;
//!
//! let report = build_site(&BuildOptions::new(dir), &SiteConfig::pac_defence())?;
//! assert_eq!(report.written.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{fs, path::Path};

use pacsite_types::SiteConfig;

pub mod applet;
pub mod build;
pub mod error;
pub mod navbar;
pub mod page;

pub use applet::{
    DEPLOY_JAVA_URL, render_applet_launch, render_applet_script, render_deploy_java_loader,
};
pub use build::{BuildOptions, BuildReport, DEFAULT_MASTER_NAME, build_site};
pub use error::{Result, SiteError};
pub use navbar::render_nav_bar;
pub use page::{PageTemplate, assemble_page, parse_section, write_html};

/// Loads a site configuration file.
///
/// Files ending in `.json` are parsed as JSON; everything else is parsed as
/// YAML. Navigation and applet settings are validated while parsing.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read from the filesystem
/// - The content is not valid YAML or JSON
/// - The navigation bar or applet configuration is invalid (for example, no entries)
///
/// # Examples
///
/// ```rust
/// use pacsite_engine::load_site_config;
///
/// let temp_dir = tempfile::tempdir()?;
/// let config_path = temp_dir.path().join("site.yaml");
/// std::fs::write(&config_path, r#"
/// navbar:
///   entries:
///     - { path: index.html, label: Main }
/// "#)?;
///
/// let site = load_site_config(&config_path)?;
/// assert_eq!(site.navbar.entries().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn load_site_config(file_path: impl AsRef<Path>) -> Result<SiteConfig> {
    let file_path = file_path.as_ref();
    let content =
        fs::read_to_string(file_path).map_err(|error| SiteError::io(file_path, error))?;

    let is_json = file_path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content).map_err(|source| SiteError::Json {
            path: file_path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(&content).map_err(|source| SiteError::Yaml {
            path: file_path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_site_config_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("site.yml");

        let config_content = r#"
navbar:
  entries:
    - path: "index.html"
      label: "Main"
    - path: "about.html"
      label: "About"
  static_links:
    - href: "file.zip"
      label: "Download"
applet:
  archive: "Game.jar"
  entry_class: "game.Main.class"
  width: 640
  height: 480
  min_runtime_version: "1.7"
"#;

        fs::write(&config_path, config_content).unwrap();

        let site = load_site_config(&config_path).expect("load yaml config");
        let paths: Vec<_> = site
            .navbar
            .entries()
            .iter()
            .map(|entry| entry.path.as_str())
            .collect();
        assert_eq!(paths, vec!["index.html", "about.html"]);
        assert_eq!(site.navbar.static_links()[0].label, "Download");
        assert_eq!(site.applet.width(), 640);
        assert_eq!(site.applet.min_runtime_version(), "1.7");
    }

    #[test]
    fn test_load_site_config_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("site.json");
        fs::write(
            &config_path,
            r#"{"navbar": {"entries": [{"path": "index.html", "label": "Main"}]}}"#,
        )
        .unwrap();

        let site = load_site_config(&config_path).expect("load json config");
        assert_eq!(site.navbar.entries()[0].label, "Main");
        assert_eq!(site.applet, pacsite_types::AppletConfig::pac_defence());
    }

    #[test]
    fn test_load_site_config_rejects_empty_navbar() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("site.yaml");
        fs::write(&config_path, "navbar:\n  entries: []\n").unwrap();

        let err = load_site_config(&config_path).unwrap_err();
        assert!(matches!(err, SiteError::Yaml { .. }), "{err}");
        assert!(err.to_string().contains("at least one entry"), "{err}");
    }

    #[test]
    fn test_load_site_config_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_site_config(temp_dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
