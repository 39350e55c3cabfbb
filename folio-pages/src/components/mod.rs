//! Presentational components.
//!
//! Each component is a pure function from a record to an HTML fragment.
//! Components never fail: a missing optional field simply renders
//! nothing in its place.

pub mod case_card;
pub mod endorsement;
pub mod labels;
pub mod link_button;
pub mod meta;
pub mod page;
pub mod project_card;

pub use case_card::render_case_card;
pub use endorsement::render_endorsement;
pub use labels::render_labels;
pub use link_button::{render_link_button, with_http};
pub use meta::{PageMeta, render_meta};
pub use page::render_page;
pub use project_card::render_project_card;
