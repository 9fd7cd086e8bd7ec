//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entry is its semantic identity — positional index plus label or
//! title — with targets and icon keys shown as secondary context. This makes
//! `show` readable as a content inventory.
//!
//! # Output Format
//!
//! ## Show
//!
//! ```text
//! Settings
//!     Title: Moulik Aggarwal
//!     Author: Moulik Aggarwal
//!     ...
//!
//! Navigation
//! 001 Home → /
//! 002 Articles → /articles
//!
//! Social
//! 001 Github [github] → https://github.com/aggmoulik
//!
//! Tech Stack
//! 001 TypeScript [type-script] → https://www.typescriptlang.org/
//! 007 Zustand → https://zustand-demo.pmnd.rs/
//! ```
//!
//! ## Check
//!
//! ```text
//! [settings] Moulik Aggarwal: post_per_page must be >= 1
//! 1 issue found
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::check::Issue;
use crate::config::SiteSettings;
use crate::links::{NAV_LINKS, SOCIAL_LINKS};
use crate::stack::TECH_STACK;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format an entry line: index + name, optional bracketed icon key, target.
///
/// ```text
/// 001 Github [github] → https://github.com/aggmoulik
/// 007 Zustand → https://zustand-demo.pmnd.rs/
/// ```
fn entry_line(index: usize, name: &str, icon_key: Option<&str>, target: &str) -> String {
    match icon_key {
        Some(key) => format!("{} {} [{}] \u{2192} {}", format_index(index), name, key, target),
        None => format!("{} {} \u{2192} {}", format_index(index), name, target),
    }
}

// ============================================================================
// Show output
// ============================================================================

/// Format the full content inventory: settings plus all three tables.
pub fn format_show_output(settings: &SiteSettings) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Settings".to_string());
    lines.push(format!("    Title: {}", settings.title));
    lines.push(format!("    Author: {}", settings.author));
    lines.push(format!("    Profile: {}", settings.profile_url));
    lines.push(format!("    Description: {}", settings.description));
    lines.push(format!("    Page type: {}", settings.page_type.as_str()));
    lines.push(format!("    Posts per page: {}", settings.post_per_page));

    lines.push(String::new());
    lines.push("Navigation".to_string());
    for (i, link) in NAV_LINKS.iter().enumerate() {
        lines.push(entry_line(i + 1, link.label, None, link.href));
    }

    lines.push(String::new());
    lines.push("Social".to_string());
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        lines.push(entry_line(i + 1, link.name, Some(link.icon.as_key()), link.url));
    }

    lines.push(String::new());
    lines.push("Tech Stack".to_string());
    for (i, entry) in TECH_STACK.iter().enumerate() {
        let key = entry.icon.map(|icon| icon.as_key());
        lines.push(entry_line(i + 1, entry.title, key, entry.href));
    }

    lines
}

/// Print the content inventory to stdout.
pub fn print_show_output(settings: &SiteSettings) {
    for line in format_show_output(settings) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format check results: one line per issue plus a summary line.
pub fn format_check_output(issues: &[Issue]) -> Vec<String> {
    let mut lines: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    lines.push(match issues.len() {
        0 => "Site data is valid".to_string(),
        1 => "1 issue found".to_string(),
        n => format!("{} issues found", n),
    });
    lines
}

/// Print check results to stdout.
pub fn print_check_output(issues: &[Issue]) {
    for line in format_check_output(issues) {
        println!("{}", line);
    }
}

// ============================================================================
// Export output
// ============================================================================

/// Format export summary: what was written and how much of it.
pub fn format_export_output(path: &Path) -> Vec<String> {
    vec![format!(
        "Exported {} nav links, {} social links, {} stack entries \u{2192} {}",
        NAV_LINKS.len(),
        SOCIAL_LINKS.len(),
        TECH_STACK.len(),
        path.display()
    )]
}

/// Print export summary to stdout.
pub fn print_export_output(path: &Path) {
    for line in format_export_output(path) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
