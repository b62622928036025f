pub mod analyzer;
pub mod formatting;
pub mod handlers;
pub mod heuristics;
pub mod keywords;
pub mod readability;
pub mod structure;
