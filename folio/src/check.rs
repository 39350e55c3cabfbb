//! Content checks for the portfolio document.
//!
//! The build trusts the document: it does not enforce unique slugs or
//! complete records. These checks surface such problems as warnings
//! without changing what a build produces.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use folio_core::loader::load_optional_markdown;
use folio_core::markdown::PageFrontMatter;
use folio_core::paths::ContentPaths;
use folio_core::routes::is_url_safe_slug;
use folio_core::schema::{Endorsement, Portfolio};

/// A content problem with its location in the document or content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Document path (e.g. `projects[2].slug`) or file path.
    pub location: String,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WARNING {}: {}", self.location, self.message)
    }
}

/// Check a loaded portfolio against its content root.
///
/// Returns every finding; an empty list means nothing to report.
#[must_use]
pub fn check_portfolio(portfolio: &Portfolio, paths: &ContentPaths) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_slugs(
        portfolio.projects.iter().map(|p| p.slug.as_str()),
        "projects",
        true,
        &mut findings,
    );
    check_slugs(
        portfolio.cases.iter().map(|c| c.slug.as_str()),
        "cases",
        false,
        &mut findings,
    );

    check_endorsements(&portfolio.endorsements, "endorsements", &mut findings);
    for (i, project) in portfolio.projects.iter().enumerate() {
        check_endorsements(
            &project.testimonials,
            &format!("projects[{i}].testimonials"),
            &mut findings,
        );
    }

    check_front_matter(&paths.about_markdown(), &mut findings);
    let mut checked = HashSet::new();
    for project in &portfolio.projects {
        if checked.insert(project.slug.as_str()) {
            check_front_matter(&paths.project_markdown(&project.slug), &mut findings);
        }
    }

    check_orphan_markdown(portfolio, &paths.projects_markdown_dir(), &mut findings);

    findings
}

/// Report duplicate and, for routed collections, non-URL-safe slugs.
fn check_slugs<'a>(
    slugs: impl Iterator<Item = &'a str>,
    collection: &str,
    routed: bool,
    findings: &mut Vec<Finding>,
) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (i, slug) in slugs.enumerate() {
        let location = format!("{collection}[{i}].slug");

        if routed && !is_url_safe_slug(slug) {
            findings.push(Finding {
                location: location.clone(),
                message: format!("slug \"{slug}\" is not URL-safe; the build will reject it"),
            });
        }

        if let Some(first) = seen.get(slug) {
            findings.push(Finding {
                location,
                message: format!(
                    "duplicate slug \"{slug}\", first used by {collection}[{first}]"
                ),
            });
        } else {
            seen.insert(slug, i);
        }
    }
}

fn check_endorsements(endorsements: &[Endorsement], prefix: &str, findings: &mut Vec<Finding>) {
    for (i, endorsement) in endorsements.iter().enumerate() {
        if endorsement.name.trim().is_empty() {
            findings.push(Finding {
                location: format!("{prefix}[{i}].name"),
                message: "endorsement has no name".to_string(),
            });
        }
        if endorsement.text.trim().is_empty() {
            findings.push(Finding {
                location: format!("{prefix}[{i}].text"),
                message: "endorsement has no text".to_string(),
            });
        }
    }
}

/// Report `title` or `description` front-matter values that are not
/// strings. Renderers skip such values silently.
///
/// Missing or unreadable files are reported by rendering, not here.
fn check_front_matter(path: &Path, findings: &mut Vec<Finding>) {
    let Ok(Some(doc)) = load_optional_markdown(path) else {
        return;
    };
    if let Err(e) = doc.data_as::<PageFrontMatter>() {
        findings.push(Finding {
            location: path.display().to_string(),
            message: format!("front-matter is ignored: {e}"),
        });
    }
}

/// Report project markdown files whose name matches no project slug.
fn check_orphan_markdown(portfolio: &Portfolio, dir: &Path, findings: &mut Vec<Finding>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut orphans: Vec<_> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .filter(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .is_none_or(|slug| portfolio.find_project(slug).is_none())
        })
        .collect();
    orphans.sort();

    findings.extend(orphans.into_iter().map(|path| Finding {
        location: path.display().to_string(),
        message: "markdown file matches no project slug".to_string(),
    }));
}
