//! CLI command implementations

pub mod browse;
pub mod build;
pub mod completions;
pub mod doc;
pub mod ind;
pub mod stage;
pub mod validate;
