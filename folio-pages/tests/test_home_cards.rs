//! Card-count property of the home page.

use folio_core::loader::HomeData;
use folio_core::paths::SiteContext;
use folio_core::schema::{Case, Portfolio, Project};
use folio_pages::pages::render_home;
use proptest::prelude::*;

fn home(projects: usize, cases: usize) -> HomeData {
    HomeData {
        portfolio: Portfolio {
            name: "Ada Lovelace".to_string(),
            title: "Engineer".to_string(),
            projects: (0..projects)
                .map(|i| Project {
                    slug: format!("p{i}"),
                    title: format!("Project {i}"),
                    summary: format!("Summary {i}"),
                    ..Default::default()
                })
                .collect(),
            cases: (0..cases)
                .map(|i| Case {
                    slug: format!("c{i}"),
                    title: format!("Case {i}"),
                    summary: Some(format!("Case summary {i}")),
                    url: format!("https://blog.example/{i}"),
                })
                .collect(),
            ..Default::default()
        },
        summary: String::new(),
    }
}

proptest! {
    #[test]
    fn home_renders_at_most_three_cards_per_section(projects in 0usize..10, cases in 0usize..10) {
        let html = render_home(&home(projects, cases), &SiteContext::new(None, 2026));
        prop_assert_eq!(html.matches("project-card\"").count(), projects.min(3));
        prop_assert_eq!(html.matches("case-card\"").count(), cases.min(3));
    }
}
