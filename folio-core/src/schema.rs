//! Portfolio document schema
//!
//! The portfolio is a single JSON document (`data/me.json`) edited by hand.
//! It is loaded wholesale on every build and never written back. Keys are
//! camelCase; every collection and optional field may be omitted.

use serde::{Deserialize, Serialize};

/// Greeting emoji used when the theme does not set one.
pub const DEFAULT_EMOJI: &str = "\u{1f44b}";

// ============================================================================
// Top-Level Document
// ============================================================================

/// Root of the portfolio document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Full name of the portfolio owner
    pub name: String,

    /// Professional title shown under the greeting
    #[serde(default)]
    pub title: String,

    /// Profile summary (markdown)
    #[serde(default)]
    pub summary: String,

    /// Cosmetic settings
    #[serde(default)]
    pub theme: Theme,

    /// Projects, in display order
    #[serde(default)]
    pub projects: Vec<Project>,

    /// External blog posts and case studies, in display order
    #[serde(default)]
    pub cases: Vec<Case>,

    /// Endorsements shown on the home page
    #[serde(default)]
    pub endorsements: Vec<Endorsement>,
}

impl Portfolio {
    /// Look up a project by slug.
    ///
    /// Slugs are assumed unique; when they are not, the first match wins.
    #[must_use]
    pub fn find_project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// First word of the owner's name, used in the home page greeting.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Greeting emoji from the theme, falling back to a waving hand.
    #[must_use]
    pub fn emoji(&self) -> &str {
        match self.theme.emoji.as_deref() {
            Some(e) if !e.trim().is_empty() => e,
            _ => DEFAULT_EMOJI,
        }
    }
}

/// Cosmetic theme settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Emoji appended to the home page greeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

// ============================================================================
// Projects
// ============================================================================

/// A portfolio project. `slug` is its identity and its route segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Route segment under `/projects/`
    pub slug: String,

    /// Display title
    pub title: String,

    /// Plain-text summary; newlines separate paragraphs
    #[serde(default)]
    pub summary: String,

    /// External links rendered as buttons
    #[serde(default)]
    pub links: Vec<ProjectLink>,

    /// Roles held on the project
    #[serde(default)]
    pub roles: Vec<String>,

    /// Technology or topic keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Endorsements specific to this project
    #[serde(default)]
    pub testimonials: Vec<Endorsement>,

    /// Site-relative path of the share/header image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_image_url: Option<String>,
}

/// An external link attached to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    /// Target URL; a missing scheme is filled in at render time
    pub url: String,

    /// Button label
    #[serde(default)]
    pub text: String,

    /// Icon name for the button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ============================================================================
// Cases & Endorsements
// ============================================================================

/// An external blog post or case study.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Identifier of the case
    pub slug: String,

    /// Card title
    pub title: String,

    /// Card tagline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// External URL the card links to
    pub url: String,
}

/// A named endorsement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    /// Name of the person endorsing
    pub name: String,

    /// Endorsement text
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Tests
// ============================================================================
