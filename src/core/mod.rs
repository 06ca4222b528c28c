//! Core module - content tables, derived views and shared utilities

pub mod catalog;
pub mod config;
pub mod documents;
pub mod entity;
pub mod layout;
pub mod selection;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use documents::{aggregate, AggregatedDocument, DocumentFilter, DocumentStats};
pub use entity::{BadgeTone, Entity};
pub use layout::{PyramidLayout, TreeLayout};
pub use selection::Selection;
