//! Site settings module.
//!
//! Handles loading, validating, and merging the `site.toml` settings file.
//! Stock defaults ship in the binary; a `site.toml` in the source directory
//! overrides just the keys it names. The resolved [`SiteSettings`] is built
//! once at startup and never mutated afterwards — every consumer takes it
//! by reference.
//!
//! ## Settings File
//!
//! Place `site.toml` next to your content:
//!
//! ```toml
//! # All keys are optional - defaults shown below
//!
//! page_type = "website"      # Open Graph page type: website | article | profile
//! author = "Moulik Aggarwal" # Site author, shown in bylines and metadata
//! profile_url = "https://aggmoulik.github.io"  # Canonical profile URL
//! description = "My digital space, projects, insights, and thoughts on software engineering."
//! title = "Moulik Aggarwal"  # Site title (browser tab, header)
//! post_per_page = 6          # Articles per listing page (must be >= 1)
//! ```
//!
//! ## Partial Settings
//!
//! Settings files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the pagination size
//! post_per_page = 10
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::urls;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Settings validation error: {0}")]
    Validation(String),
}

/// Open Graph page type tag emitted into page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// A regular site or landing page.
    #[default]
    Website,
    /// A single article/post.
    Article,
    /// An author profile page.
    Profile,
}

impl PageType {
    /// Wire form, as it appears in `site.toml` and generated metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Website => "website",
            PageType::Article => "article",
            PageType::Profile => "profile",
        }
    }
}

/// Site settings loaded from `site.toml`.
///
/// All fields have stock defaults. User settings files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Open Graph page type for the site root.
    pub page_type: PageType,
    /// Author name, shown in bylines and metadata.
    pub author: String,
    /// Canonical profile URL (absolute).
    pub profile_url: String,
    /// Site description for metadata and feed headers.
    pub description: String,
    /// Site title (browser tab, header).
    pub title: String,
    /// Number of articles per listing page.
    pub post_per_page: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            page_type: PageType::Website,
            author: "Moulik Aggarwal".to_string(),
            profile_url: "https://aggmoulik.github.io".to_string(),
            description:
                "My digital space, projects, insights, and thoughts on software engineering."
                    .to_string(),
            title: "Moulik Aggarwal".to_string(),
            post_per_page: 6,
        }
    }
}

impl SiteSettings {
    /// Validate settings values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.post_per_page == 0 {
            return Err(ConfigError::Validation(
                "post_per_page must be >= 1".into(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.author.trim().is_empty() {
            return Err(ConfigError::Validation("author must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(ConfigError::Validation(
                "description must not be empty".into(),
            ));
        }
        if !urls::is_absolute_url(&self.profile_url) {
            return Err(ConfigError::Validation(format!(
                "profile_url must be an absolute URL, got {:?}",
                self.profile_url
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Settings loading, merging, and validation
// =============================================================================

/// Returns the stock default settings as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteSettings::default()).expect("default settings must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `site.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let settings_path = dir.join("site.toml");
    if !settings_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&settings_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteSettings, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let settings: SiteSettings = merged.try_into()?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteSettings, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# Simple Folio Settings
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Each file only needs the keys it wants to override.
# Unknown keys will cause an error.

# Open Graph page type for the site root: website | article | profile
page_type = "website"

# Author name, shown in bylines and page metadata.
author = "Moulik Aggarwal"

# Canonical profile URL. Must be an absolute URL.
profile_url = "https://aggmoulik.github.io"

# Site description for metadata and feed headers.
description = "My digital space, projects, insights, and thoughts on software engineering."

# Site title (browser tab, header).
title = "Moulik Aggarwal"

# Number of articles per listing page. Must be >= 1.
post_per_page = 6
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_settings_carry_stock_site_data() {
        let settings = SiteSettings::default();
        assert_eq!(settings.page_type, PageType::Website);
        assert_eq!(settings.author, "Moulik Aggarwal");
        assert_eq!(settings.profile_url, "https://aggmoulik.github.io");
        assert_eq!(settings.title, "Moulik Aggarwal");
        assert_eq!(settings.post_per_page, 6);
        assert!(!settings.description.is_empty());
    }

    #[test]
    fn parse_partial_settings() {
        let toml = r#"
post_per_page = 10
"#;
        let settings: SiteSettings = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(settings.post_per_page, 10);
        // Default values preserved
        assert_eq!(settings.author, "Moulik Aggarwal");
        assert_eq!(settings.page_type, PageType::Website);
    }

    #[test]
    fn parse_page_type_variants() {
        for (raw, expected) in [
            ("website", PageType::Website),
            ("article", PageType::Article),
            ("profile", PageType::Profile),
        ] {
            let input = format!("page_type = \"{raw}\"");
            let settings: SiteSettings = toml::from_str(&input).unwrap();
            assert_eq!(settings.page_type, expected);
            assert_eq!(settings.page_type.as_str(), raw);
        }
    }

    #[test]
    fn parse_unknown_page_type_is_error() {
        let result: Result<SiteSettings, _> = toml::from_str(r#"page_type = "blog""#);
        assert!(result.is_err());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let settings = load_config(tmp.path()).unwrap();

        assert_eq!(settings.title, "Moulik Aggarwal");
        assert_eq!(settings.post_per_page, 6);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("site.toml"),
            r#"
title = "Field Notes"
description = "Notes from the field."
"#,
        )
        .unwrap();

        let settings = load_config(tmp.path()).unwrap();
        assert_eq!(settings.title, "Field Notes");
        assert_eq!(settings.description, "Notes from the field.");
        // Unspecified values should be defaults
        assert_eq!(settings.author, "Moulik Aggarwal");
        assert_eq!(settings.post_per_page, 6);
    }

    #[test]
    fn load_config_full_settings() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("site.toml"),
            r#"
page_type = "profile"
author = "Ada Lovelace"
profile_url = "https://ada.example.org"
description = "Analytical engines and other machinery."
title = "Ada's Notebook"
post_per_page = 12
"#,
        )
        .unwrap();

        let settings = load_config(tmp.path()).unwrap();
        assert_eq!(settings.page_type, PageType::Profile);
        assert_eq!(settings.author, "Ada Lovelace");
        assert_eq!(settings.profile_url, "https://ada.example.org");
        assert_eq!(settings.title, "Ada's Notebook");
        assert_eq!(settings.post_per_page, 12);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("site.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("site.toml"), "post_per_page = 0").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"post_per_page = 6"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"post_per_page = 9"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("post_per_page").unwrap().as_integer(), Some(9));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str(
            r#"
title = "A"
author = "B"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(r#"title = "C""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("title").unwrap().as_str(), Some("C"));
        assert_eq!(merged.get("author").unwrap().as_str(), Some("B"));
    }

    #[test]
    fn merge_toml_three_layers() {
        let stock: toml::Value = toml::from_str(
            r#"
title = "Stock"
post_per_page = 6
"#,
        )
        .unwrap();
        let site: toml::Value = toml::from_str(r#"title = "Site""#).unwrap();
        let local: toml::Value = toml::from_str(r#"post_per_page = 3"#).unwrap();

        let merged = merge_toml(merge_toml(stock, site), local);
        assert_eq!(merged.get("title").unwrap().as_str(), Some("Site"));
        assert_eq!(merged.get("post_per_page").unwrap().as_integer(), Some(3));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteSettings, _> = toml::from_str(r#"post_per_pag = 6"#);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("site.toml"), r#"titel = "oops""#).unwrap();

        let result = load_config(tmp.path());
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_settings_passes() {
        assert!(SiteSettings::default().validate().is_ok());
    }

    #[test]
    fn validate_post_per_page_zero() {
        let mut settings = SiteSettings::default();
        settings.post_per_page = 0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("post_per_page"));
    }

    #[test]
    fn validate_post_per_page_one_ok() {
        let mut settings = SiteSettings::default();
        settings.post_per_page = 1;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_empty_title() {
        let mut settings = SiteSettings::default();
        settings.title = "  ".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn validate_empty_author() {
        let mut settings = SiteSettings::default();
        settings.author = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_empty_description() {
        let mut settings = SiteSettings::default();
        settings.description = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn validate_relative_profile_url() {
        let mut settings = SiteSettings::default();
        settings.profile_url = "/about".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("profile_url"));
    }

    #[test]
    fn validate_malformed_profile_url() {
        let mut settings = SiteSettings::default();
        settings.profile_url = "aggmoulik.github.io".to_string();
        assert!(settings.validate().is_err());
    }

    // =========================================================================
    // resolve_config / load_raw_config tests
    // =========================================================================

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_raw_config(tmp.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_raw_config_returns_value_when_file_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("site.toml"), r#"post_per_page = 4"#).unwrap();

        let val = load_raw_config(tmp.path()).unwrap().unwrap();
        assert_eq!(val.get("post_per_page").unwrap().as_integer(), Some(4));
    }

    #[test]
    fn resolve_config_with_no_overlay() {
        let settings = resolve_config(stock_defaults_value(), None).unwrap();
        assert_eq!(settings.post_per_page, 6);
        assert_eq!(settings.author, "Moulik Aggarwal");
    }

    #[test]
    fn resolve_config_with_overlay() {
        let overlay: toml::Value = toml::from_str(r#"post_per_page = 3"#).unwrap();
        let settings = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(settings.post_per_page, 3);
        // Other fields preserved from defaults
        assert_eq!(settings.title, "Moulik Aggarwal");
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let overlay: toml::Value = toml::from_str(r#"profile_url = "not-a-url""#).unwrap();
        let result = resolve_config(stock_defaults_value(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock settings must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let settings: SiteSettings = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteSettings::default();
        assert_eq!(settings.page_type, defaults.page_type);
        assert_eq!(settings.author, defaults.author);
        assert_eq!(settings.profile_url, defaults.profile_url);
        assert_eq!(settings.description, defaults.description);
        assert_eq!(settings.title, defaults.title);
        assert_eq!(settings.post_per_page, defaults.post_per_page);
    }

    #[test]
    fn stock_config_toml_mentions_every_key() {
        let content = stock_config_toml();
        for key in [
            "page_type",
            "author",
            "profile_url",
            "description",
            "title",
            "post_per_page",
        ] {
            assert!(content.contains(key), "missing key: {key}");
        }
    }

    // =========================================================================
    // stock_defaults_value tests
    // =========================================================================

    #[test]
    fn stock_defaults_value_is_table() {
        assert!(stock_defaults_value().is_table());
    }

    #[test]
    fn stock_defaults_value_has_all_keys() {
        let val = stock_defaults_value();
        assert!(val.get("page_type").is_some());
        assert!(val.get("author").is_some());
        assert!(val.get("profile_url").is_some());
        assert!(val.get("description").is_some());
        assert!(val.get("title").is_some());
        assert!(val.get("post_per_page").is_some());
    }
}
