//! Data-table validation.
//!
//! The tables are compile-time constants, so shape errors are impossible —
//! but a typo'd URL or an emptied-out label still compiles. These checks
//! catch that class of mistake, both in unit tests and via the `check`
//! CLI command.
//!
//! All check functions are pure: they collect [`Issue`]s and do no I/O,
//! so the CLI and the tests share the exact same logic.

use crate::config::SiteSettings;
use crate::links::{self, SocialPlatform, NAV_LINKS, SOCIAL_LINKS};
use crate::stack::TECH_STACK;
use crate::urls;
use std::fmt;

/// A single validation finding: which table, which entry, what's wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Table the finding belongs to, e.g. `"nav"`.
    pub table: &'static str,
    /// Entry identifier within the table (label, name, or title).
    pub entry: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.table, self.entry, self.message)
    }
}

/// Platform names the rendering layer knows how to display.
const KNOWN_PLATFORMS: &[&str] = &["Github", "Linkedin", "X"];

/// Check navigation links: non-empty labels, root-relative hrefs.
pub fn check_nav_links() -> Vec<Issue> {
    let mut issues = Vec::new();
    for link in NAV_LINKS {
        if link.label.trim().is_empty() {
            issues.push(Issue {
                table: "nav",
                entry: link.href.to_string(),
                message: "empty label".to_string(),
            });
        }
        if !urls::is_root_relative(link.href) {
            issues.push(Issue {
                table: "nav",
                entry: link.label.to_string(),
                message: format!("href is not a root-relative path: {:?}", link.href),
            });
        }
    }
    issues
}

/// Check social links: recognized platform names, absolute URLs, and
/// agreement with the [`links::social_url`] mapping.
pub fn check_social_links() -> Vec<Issue> {
    let mut issues = Vec::new();
    for link in SOCIAL_LINKS {
        if !KNOWN_PLATFORMS.contains(&link.name) {
            issues.push(Issue {
                table: "social",
                entry: link.name.to_string(),
                message: "unrecognized platform name".to_string(),
            });
        }
        if !urls::is_absolute_url(link.url) {
            issues.push(Issue {
                table: "social",
                entry: link.name.to_string(),
                message: format!("url is not an absolute URL: {:?}", link.url),
            });
        }
    }
    for platform in [
        SocialPlatform::Github,
        SocialPlatform::Linkedin,
        SocialPlatform::X,
        SocialPlatform::Resume,
    ] {
        let url = links::social_url(platform);
        if !urls::is_absolute_url(url) {
            issues.push(Issue {
                table: "social",
                entry: format!("{platform:?}"),
                message: format!("mapped url is not an absolute URL: {url:?}"),
            });
        }
    }
    issues
}

/// Check tech-stack entries: non-empty titles, absolute homepage URLs.
pub fn check_tech_stack() -> Vec<Issue> {
    let mut issues = Vec::new();
    for entry in TECH_STACK {
        if entry.title.trim().is_empty() {
            issues.push(Issue {
                table: "stack",
                entry: entry.href.to_string(),
                message: "empty title".to_string(),
            });
        }
        if !urls::is_absolute_url(entry.href) {
            issues.push(Issue {
                table: "stack",
                entry: entry.title.to_string(),
                message: format!("href is not an absolute URL: {:?}", entry.href),
            });
        }
    }
    issues
}

/// Check the settings singleton, reporting validation failures as issues.
pub fn check_settings(settings: &SiteSettings) -> Vec<Issue> {
    match settings.validate() {
        Ok(()) => Vec::new(),
        Err(e) => vec![Issue {
            table: "settings",
            entry: settings.title.clone(),
            message: e.to_string(),
        }],
    }
}

/// Run every check against the settings and all three tables.
///
/// An empty result means the site data is sound.
pub fn check_site(settings: &SiteSettings) -> Vec<Issue> {
    let mut issues = check_settings(settings);
    issues.extend(check_nav_links());
    issues.extend(check_social_links());
    issues.extend(check_tech_stack());
    issues
}
