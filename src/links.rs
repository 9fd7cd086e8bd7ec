//! Navigation and social link tables.
//!
//! Two compile-time tables consumed by the rendering layer:
//!
//! - [`NAV_LINKS`] — the primary navigation menu, in render order.
//! - [`SOCIAL_LINKS`] — external profile links with display icons, in
//!   render order.
//!
//! Icons are not embedded here; each social entry carries a [`SocialIcon`]
//! key that the rendering layer resolves to an actual asset. The raw URLs
//! live in one place — [`social_url`] — and [`SOCIAL_LINKS`] is built from
//! it, so the icon table and the URL mapping cannot drift apart. The
//! mapping also covers platforms that get a link but no icon entry (the
//! resume).

use serde::Serialize;

/// An entry in the site's primary navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label, e.g. `"Home"`.
    pub label: &'static str,
    /// Root-relative target path, e.g. `"/articles"`.
    pub href: &'static str,
}

/// Icon key for a social platform, resolved to an asset by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Linkedin,
    X,
}

impl SocialIcon {
    /// Asset key, as serialized into the manifest.
    pub fn as_key(&self) -> &'static str {
        match self {
            SocialIcon::Github => "github",
            SocialIcon::Linkedin => "linkedin",
            SocialIcon::X => "x",
        }
    }
}

/// A platform the author has a profile/link on.
///
/// Superset of the icon table: `Resume` has a URL but no [`SOCIAL_LINKS`]
/// entry, so it reaches the rendering layer through [`social_url`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    X,
    Resume,
}

/// Raw profile URL for a platform.
pub const fn social_url(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Github => "https://github.com/aggmoulik",
        SocialPlatform::Linkedin => "https://www.linkedin.com/in/agg-moulik/",
        SocialPlatform::X => "https://x.com/aggmoulik",
        SocialPlatform::Resume => {
            "https://drive.google.com/file/d/1c7-UIHy8GUvgj2XHuf7nfhUU4vpjRXSt/view?usp=sharing"
        }
    }
}

/// An entry linking to an external social/profile platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Platform display name, e.g. `"Github"`.
    pub name: &'static str,
    /// Icon key resolved by the rendering layer.
    pub icon: SocialIcon,
    /// Absolute profile URL.
    pub url: &'static str,
}

/// Primary navigation menu, in render order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Articles",
        href: "/articles",
    },
];

/// Social/profile links with display icons, in render order.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Github",
        icon: SocialIcon::Github,
        url: social_url(SocialPlatform::Github),
    },
    SocialLink {
        name: "Linkedin",
        icon: SocialIcon::Linkedin,
        url: social_url(SocialPlatform::Linkedin),
    },
    SocialLink {
        name: "X",
        icon: SocialIcon::X,
        url: social_url(SocialPlatform::X),
    },
];
