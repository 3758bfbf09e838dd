//! Page configuration: the selectors each controller queries.
//!
//! Timing is not configurable; see [`pw_common::timing`].

use std::path::Path;

use pw_nav::NavSelectors;
use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Element selectors used at start.
///
/// Every field has a default, so a TOML file only needs the selectors it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Header / navbar landmark.
    pub header: String,
    /// Burger toggle control.
    pub burger_toggle: String,
    /// Collapsible navigation panel.
    pub nav_collapse: String,
    pub nav_link: String,
    /// Sections tracked by the scroll spy.
    pub sections: String,
    pub spy_links: String,
    /// Anchors handled by smooth scrolling.
    pub anchors: String,
    pub form: String,
    /// Controls validated inside each form.
    pub form_fields: String,
    pub submit_button: String,
    /// Elements that fade in on first intersection.
    pub animated: String,
    pub buttons: String,
    pub cards: String,
    pub privacy_links: String,
    /// Elements with a count-up target.
    pub counters: String,
    pub lazy_images: String,
    pub lazy_videos: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        let nav = NavSelectors::default();
        Self {
            header: nav.header,
            burger_toggle: nav.toggle,
            nav_collapse: nav.panel,
            nav_link: nav.nav_link,
            sections: nav.sections,
            spy_links: nav.spy_links,
            anchors: nav.anchors,
            form: "form".to_string(),
            form_fields: "input, textarea, select".to_string(),
            submit_button: r#"button[type="submit"]"#.to_string(),
            animated: ".card, .c-media-card, .c-trust-badge, .c-button, img, .form-control"
                .to_string(),
            buttons: ".btn, .c-button".to_string(),
            cards: ".card, .c-media-card, .c-trust-badge".to_string(),
            privacy_links: r#"a[href*="privacy"]"#.to_string(),
            counters: "[data-count]".to_string(),
            lazy_images: "img:not([loading])".to_string(),
            lazy_videos: "video:not([loading])".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|source| PageError::Parse {
            what: "page configuration",
            source,
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "Loaded page configuration");
        Ok(config)
    }

    /// Selectors for the navigation controllers.
    pub fn nav_selectors(&self) -> NavSelectors {
        NavSelectors {
            header: self.header.clone(),
            toggle: self.burger_toggle.clone(),
            panel: self.nav_collapse.clone(),
            nav_link: self.nav_link.clone(),
            sections: self.sections.clone(),
            spy_links: self.spy_links.clone(),
            anchors: self.anchors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_toml_str(
            r##"
header = "#site-header"
form = "form.contact"
"##,
        )
        .unwrap();
        assert_eq!(config.header, "#site-header");
        assert_eq!(config.form, "form.contact");
        assert_eq!(config.burger_toggle, ".navbar-toggler");
        assert_eq!(config.nav_selectors().header, "#site-header");
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = PageConfig::from_toml_str("header = ").unwrap_err();
        assert!(matches!(err, PageError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r##"nav_collapse = "#menu""##).unwrap();
        let config = PageConfig::load(file.path()).unwrap();
        assert_eq!(config.nav_collapse, "#menu");

        let missing = PageConfig::load(Path::new("/nonexistent/pagewire.toml"));
        assert!(matches!(missing, Err(PageError::Io { .. })));
    }
}
