//! Site manifest: the machine-readable contract with the rendering layer.
//!
//! The rendering layer (templates, routing, styling) lives outside this
//! crate. What it consumes is a single `site.json` combining the resolved
//! settings with the three content tables, written by the `export` command.
//! Field names in the JSON are the interface — renderers depend on
//! `nav_links[].label`, `social_links[].icon`, and so on.

use crate::config::SiteSettings;
use crate::links::{NavLink, SocialLink, NAV_LINKS, SOCIAL_LINKS};
use crate::stack::{TechStackEntry, TECH_STACK};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the rendering layer needs, in one document.
#[derive(Debug, Clone, Serialize)]
pub struct SiteManifest {
    /// Resolved site settings (stock defaults + `site.toml` overrides).
    pub settings: SiteSettings,
    /// Primary navigation, in render order.
    pub nav_links: &'static [NavLink],
    /// Social/profile links, in render order.
    pub social_links: &'static [SocialLink],
    /// Tech-stack entries, in render order.
    pub tech_stack: &'static [TechStackEntry],
}

/// Assemble the manifest from resolved settings and the compiled-in tables.
pub fn build(settings: SiteSettings) -> SiteManifest {
    SiteManifest {
        settings,
        nav_links: NAV_LINKS,
        social_links: SOCIAL_LINKS,
        tech_stack: TECH_STACK,
    }
}

/// Write the manifest as pretty JSON to `<output_dir>/site.json`.
///
/// Creates the output directory if needed. Returns the written path.
pub fn write(manifest: &SiteManifest, output_dir: &Path) -> Result<PathBuf, ManifestError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("site.json");
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)?;
    Ok(path)
}
