//! Tech-stack table shown on the about page.
//!
//! An ordered list of technologies the author works with: display title,
//! homepage link, and an optional icon key. Declaration order is render
//! order; the grouping below (languages, frontend, testing, cloud, backend,
//! devops, misc) is informal and carried by comments only — the rendering
//! layer sees a flat list.

use serde::Serialize;

/// Icon key for a technology, resolved to an asset by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechIcon {
    TypeScript,
    React,
    NextJs,
    TailwindCss,
    Redux,
    ReactQuery,
    ShadcnUi,
    Playwright,
    Cypress,
    Jest,
    Storybook,
    Aws,
    NodeJs,
    Redis,
    Docker,
    Git,
    Figma,
}

impl TechIcon {
    /// Asset key, as serialized into the manifest.
    pub fn as_key(&self) -> &'static str {
        match self {
            TechIcon::TypeScript => "type-script",
            TechIcon::React => "react",
            TechIcon::NextJs => "next-js",
            TechIcon::TailwindCss => "tailwind-css",
            TechIcon::Redux => "redux",
            TechIcon::ReactQuery => "react-query",
            TechIcon::ShadcnUi => "shadcn-ui",
            TechIcon::Playwright => "playwright",
            TechIcon::Cypress => "cypress",
            TechIcon::Jest => "jest",
            TechIcon::Storybook => "storybook",
            TechIcon::Aws => "aws",
            TechIcon::NodeJs => "node-js",
            TechIcon::Redis => "redis",
            TechIcon::Docker => "docker",
            TechIcon::Git => "git",
            TechIcon::Figma => "figma",
        }
    }
}

/// An entry describing a technology used by the site's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechStackEntry {
    /// Display title, e.g. `"React Query"`.
    pub title: &'static str,
    /// Homepage URL (absolute).
    pub href: &'static str,
    /// Icon key resolved by the rendering layer; `None` renders without one.
    pub icon: Option<TechIcon>,
}

/// Tech-stack entries, in render order.
pub const TECH_STACK: &[TechStackEntry] = &[
    // Programming languages
    TechStackEntry {
        title: "TypeScript",
        href: "https://www.typescriptlang.org/",
        icon: Some(TechIcon::TypeScript),
    },
    // Frontend
    TechStackEntry {
        title: "React",
        href: "https://react.dev/",
        icon: Some(TechIcon::React),
    },
    TechStackEntry {
        title: "Next.js",
        href: "https://nextjs.org/",
        icon: Some(TechIcon::NextJs),
    },
    TechStackEntry {
        title: "React Native",
        href: "https://reactnative.dev/",
        // No dedicated icon; the React mark stands in for it.
        icon: Some(TechIcon::React),
    },
    TechStackEntry {
        title: "Tailwind CSS",
        href: "https://tailwindcss.com/",
        icon: Some(TechIcon::TailwindCss),
    },
    TechStackEntry {
        title: "Redux",
        href: "https://redux.js.org/",
        icon: Some(TechIcon::Redux),
    },
    TechStackEntry {
        title: "Zustand",
        href: "https://zustand-demo.pmnd.rs/",
        icon: None,
    },
    TechStackEntry {
        title: "React Query",
        href: "https://tanstack.com/query/latest",
        icon: Some(TechIcon::ReactQuery),
    },
    TechStackEntry {
        title: "shadcn/ui",
        href: "https://ui.shadcn.com/",
        icon: Some(TechIcon::ShadcnUi),
    },
    // Frontend testing
    TechStackEntry {
        title: "Playwright",
        href: "https://playwright.dev/",
        icon: Some(TechIcon::Playwright),
    },
    TechStackEntry {
        title: "Cypress",
        href: "https://www.cypress.io/",
        icon: Some(TechIcon::Cypress),
    },
    TechStackEntry {
        title: "Jest",
        href: "https://jestjs.io/",
        icon: Some(TechIcon::Jest),
    },
    TechStackEntry {
        title: "Storybook",
        href: "https://storybook.js.org/",
        icon: Some(TechIcon::Storybook),
    },
    // Cloud
    TechStackEntry {
        title: "AWS",
        href: "https://aws.amazon.com/",
        icon: Some(TechIcon::Aws),
    },
    // Backend
    TechStackEntry {
        title: "Node.js",
        href: "https://nodejs.org/",
        icon: Some(TechIcon::NodeJs),
    },
    TechStackEntry {
        title: "Redis",
        href: "https://redis.io/",
        icon: Some(TechIcon::Redis),
    },
    // DevOps and tooling
    TechStackEntry {
        title: "Docker",
        href: "https://www.docker.com/",
        icon: Some(TechIcon::Docker),
    },
    TechStackEntry {
        title: "Git",
        href: "https://git-scm.com/",
        icon: Some(TechIcon::Git),
    },
    // Misc
    TechStackEntry {
        title: "Figma",
        href: "https://www.figma.com/",
        icon: Some(TechIcon::Figma),
    },
];
