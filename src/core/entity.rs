//! Entity trait - common interface for knowledge-base entities

use serde::{de::DeserializeOwned, Serialize};

/// Common trait for lifecycle stages and quality indicators
pub trait Entity: Serialize + DeserializeOwned {
    /// Anchor/display prefix (e.g., "STAGE", "IND")
    const PREFIX: &'static str;

    /// Get the entity's numeric ID
    fn id(&self) -> u32;

    /// Get the entity's title
    fn title(&self) -> &str;

    /// Get the entity's long description
    fn description(&self) -> &str;

    /// Fragment identifier of the entity's detail modal, e.g. "stage-3"
    fn anchor(&self) -> String {
        format!("{}-{}", Self::PREFIX.to_lowercase(), self.id())
    }
}

/// Visual tone of a probability/impact badge
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    /// CSS class applied to the badge in the generated site
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "badge badge-success",
            BadgeTone::Warning => "badge badge-warning",
            BadgeTone::Danger => "badge badge-danger",
        }
    }
}

impl std::fmt::Display for BadgeTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeTone::Success => write!(f, "success"),
            BadgeTone::Warning => write!(f, "warning"),
            BadgeTone::Danger => write!(f, "danger"),
        }
    }
}
