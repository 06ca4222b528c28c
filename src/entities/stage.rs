//! Lifecycle stage entity type with its risk register

use serde::{Deserialize, Serialize};

use crate::core::entity::{BadgeTone, Entity};

/// Likelihood that a risk materializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Probability {
    #[serde(rename = "Низкая", alias = "low")]
    Low,
    #[serde(rename = "Средняя", alias = "medium")]
    Medium,
    #[serde(rename = "Высокая", alias = "high")]
    High,
}

impl Probability {
    /// Label as authored in the content tables
    pub fn label(&self) -> &'static str {
        match self {
            Probability::Low => "Низкая",
            Probability::Medium => "Средняя",
            Probability::High => "Высокая",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Probability::High => BadgeTone::Danger,
            Probability::Medium => BadgeTone::Warning,
            Probability::Low => BadgeTone::Success,
        }
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Consequence of a risk for the product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "Низкое", alias = "low")]
    Low,
    #[serde(rename = "Среднее", alias = "medium")]
    Medium,
    #[serde(rename = "Высокое", alias = "high")]
    High,
    #[serde(rename = "Критическое", alias = "critical")]
    Critical,
}

impl Impact {
    /// Label as authored in the content tables
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Low => "Низкое",
            Impact::Medium => "Среднее",
            Impact::High => "Высокое",
            Impact::Critical => "Критическое",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Impact::Critical | Impact::High => BadgeTone::Danger,
            Impact::Medium => BadgeTone::Warning,
            Impact::Low => BadgeTone::Success,
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of a stage's risk register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    /// Risk category (technical, organizational, supply, ...)
    pub category: String,

    /// What can go wrong
    pub description: String,

    pub probability: Probability,

    pub impact: Impact,

    /// Preventive measures
    pub minimization: String,

    /// Response plan if the risk materializes
    pub reaction: String,
}

/// A lifecycle stage of an analog microcircuit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleStage {
    /// Position in the lifecycle, 1-based
    pub id: u32,

    pub title: String,

    pub description: String,

    #[serde(default)]
    pub risks: Vec<RiskEntry>,
}

impl Entity for LifecycleStage {
    const PREFIX: &'static str = "STAGE";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl LifecycleStage {
    /// Heading used on pyramid tiers and in the detail modal, e.g. "3. Испытания"
    pub fn heading(&self) -> String {
        format!("{}. {}", self.id, self.title)
    }

    /// Number of risks whose impact is high or critical
    pub fn severe_risk_count(&self) -> usize {
        self.risks
            .iter()
            .filter(|r| r.impact.tone() == BadgeTone::Danger)
            .count()
    }
}
