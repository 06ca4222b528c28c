//! Entity type definitions
//!
//! The knowledge base holds two immutable tables:
//!
//! - [`LifecycleStage`] - one phase of a microcircuit's life with its
//!   [`RiskEntry`] register
//! - [`QualityIndicator`] - a quality category with the [`DocumentRef`]s
//!   that govern it

pub mod indicator;
pub mod stage;

pub use indicator::{DocumentKind, DocumentRef, KindFilter, QualityIndicator};
pub use stage::{Impact, LifecycleStage, Probability, RiskEntry};
