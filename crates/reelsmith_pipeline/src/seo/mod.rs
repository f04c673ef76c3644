//! Keyword generation, keyword research, platform metadata and crafted copy.
//!
//! Everything here is derived from the scenario text; no external SEO
//! service is consulted.

mod copywriter;
mod formatter;
mod keywords;
mod research;

pub use copywriter::{copy_keywords, craft_copy};
pub use formatter::format_metadata;
pub use keywords::{candidate_terms, generate_keywords, keywords_for};
pub use research::research_keywords;
