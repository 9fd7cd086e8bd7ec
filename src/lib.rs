//! # Simple Folio
//!
//! The typed data layer of a personal portfolio/blog site: site settings,
//! navigation links, social links, and the tech-stack list, plus a small
//! CLI that validates the data and exports it for the rendering layer.
//!
//! # Architecture: Compiled-In Data, External Rendering
//!
//! Content tables are `'static` constants checked at compile time; only the
//! settings singleton comes from a file (`site.toml`, merged over stock
//! defaults at startup). The rendering layer — templates, routing, styling,
//! icon assets — lives outside this crate and consumes a single exported
//! `site.json`:
//!
//! ```text
//! site.toml (optional) ──merge──▶ SiteSettings ─┐
//! NAV_LINKS / SOCIAL_LINKS / TECH_STACK ────────┴──▶ site.json ──▶ renderer
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Shape safety**: a renderer can't ask for a field that doesn't exist;
//!   the table types are the contract.
//! - **Checkability**: everything that *can* still go wrong (a typo'd URL,
//!   an emptied label) is caught by [`check`] before anything renders.
//! - **Stable ordering**: declaration order is render order, always.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, merging over stock defaults, validation |
//! | [`links`] | Navigation and social link tables, platform → URL mapping |
//! | [`stack`] | Tech-stack table shown on the about page |
//! | [`urls`] | Link-target classification (absolute URL / root-relative path) |
//! | [`check`] | Pure validation of settings and all tables |
//! | [`manifest`] | `site.json` export — the contract with the rendering layer |
//! | [`output`] | CLI output formatting — information-first display |
//!
//! # Design Decisions
//!
//! ## Icon Keys, Not Icon Assets
//!
//! Social and tech entries carry enum icon *keys* ([`links::SocialIcon`],
//! [`stack::TechIcon`]) serialized as lowercase/kebab-case strings. The
//! rendering layer owns the mapping from key to asset; this crate stays
//! free of image data and renderer concerns.
//!
//! ## One Source For Social URLs
//!
//! [`links::social_url`] is the single authority for platform URLs.
//! [`links::SOCIAL_LINKS`] is built from it in const context, so the icon
//! table and the URL mapping cannot disagree — and platforms without an
//! icon entry (the resume link) still get a URL.
//!
//! ## Sparse Settings Overrides
//!
//! Stock defaults ship in the binary; `site.toml` overrides only the keys
//! it names, and unknown keys are an error so typos surface immediately.
//! A missing file is not an error — it just means stock defaults.

pub mod check;
pub mod config;
pub mod links;
pub mod manifest;
pub mod output;
pub mod stack;
pub mod urls;
