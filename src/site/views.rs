//! View models handed to the page templates

use serde::Serialize;

use crate::core::documents::{AggregatedDocument, DocumentStats};
use crate::core::entity::Entity;
use crate::core::layout::{Connector, PyramidLayout, TreeLayout};
use crate::entities::{DocumentRef, KindFilter, LifecycleStage, QualityIndicator, RiskEntry};

#[derive(Debug, Clone, Serialize)]
pub struct RiskView {
    pub category: String,
    pub description: String,
    pub probability: &'static str,
    pub probability_class: &'static str,
    pub impact: &'static str,
    pub impact_class: &'static str,
    pub minimization: String,
    pub reaction: String,
}

impl From<&RiskEntry> for RiskView {
    fn from(risk: &RiskEntry) -> Self {
        Self {
            category: risk.category.clone(),
            description: risk.description.clone(),
            probability: risk.probability.label(),
            probability_class: risk.probability.tone().css_class(),
            impact: risk.impact.label(),
            impact_class: risk.impact.tone().css_class(),
            minimization: risk.minimization.clone(),
            reaction: risk.reaction.clone(),
        }
    }
}

/// A pyramid tier together with its modal content
#[derive(Debug, Clone, Serialize)]
pub struct StageView {
    pub id: u32,
    pub anchor: String,
    pub heading: String,
    pub description: String,
    pub style: String,
    pub class: &'static str,
    pub risks: Vec<RiskView>,
}

pub fn stage_views(stages: &[LifecycleStage], container_height: f64) -> Vec<StageView> {
    let layout = PyramidLayout::new(stages.len(), container_height);
    stages
        .iter()
        .zip(layout.tiers())
        .map(|(stage, tier)| StageView {
            id: stage.id,
            anchor: stage.anchor(),
            heading: stage.heading(),
            description: stage.description.clone(),
            style: tier.style(),
            class: tier.class,
            risks: stage.risks.iter().map(RiskView::from).collect(),
        })
        .collect()
}

/// A tree node together with its modal content
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorView {
    pub id: u32,
    pub anchor: String,
    pub title: String,
    pub description: String,
    pub style: String,
    pub documents: Vec<DocumentRef>,
}

pub fn indicator_views(indicators: &[QualityIndicator]) -> Vec<IndicatorView> {
    indicators
        .iter()
        .enumerate()
        .map(|(i, indicator)| IndicatorView {
            id: indicator.id,
            anchor: indicator.anchor(),
            title: indicator.title.clone(),
            description: indicator.description.clone(),
            style: TreeLayout::position(i).style(),
            documents: indicator.documents.clone(),
        })
        .collect()
}

/// SVG line between two tree nodes, coordinates in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorView {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
}

impl From<Connector> for ConnectorView {
    fn from(c: Connector) -> Self {
        Self {
            x1: format!("{}%", c.from.left_percent),
            y1: format!("{}%", c.from.top_percent),
            x2: format!("{}%", c.to.left_percent),
            y2: format!("{}%", c.to.top_percent),
        }
    }
}

pub fn connector_views() -> Vec<ConnectorView> {
    TreeLayout::connectors()
        .into_iter()
        .map(ConnectorView::from)
        .collect()
}

/// A document card on the documents page
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub name: String,
    pub title: String,
    pub annotation: String,
    pub kind: &'static str,
    pub haystack: String,
    pub related_indicators: Vec<String>,
}

impl From<&AggregatedDocument> for DocumentView {
    fn from(doc: &AggregatedDocument) -> Self {
        Self {
            name: doc.document.name.clone(),
            title: doc.document.title.clone(),
            annotation: doc.document.annotation.clone(),
            kind: doc.kind.slug(),
            haystack: doc.search_haystack(),
            related_indicators: doc.related_indicators.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn filter_options() -> Vec<FilterOption> {
    KindFilter::ALL
        .iter()
        .map(|f| FilterOption {
            value: f.slug(),
            label: f.label(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct StatView {
    pub label: &'static str,
    pub count: usize,
}

pub fn stat_views(stats: &DocumentStats) -> Vec<StatView> {
    stats
        .summary()
        .into_iter()
        .map(|(label, count)| StatView { label, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Impact, Probability};

    #[test]
    fn test_risk_view_badges() {
        let risk = RiskEntry {
            category: "Технический".to_string(),
            description: "d".to_string(),
            probability: Probability::High,
            impact: Impact::Medium,
            minimization: "m".to_string(),
            reaction: "r".to_string(),
        };
        let view = RiskView::from(&risk);
        assert_eq!(view.probability, "Высокая");
        assert_eq!(view.probability_class, "badge badge-danger");
        assert_eq!(view.impact, "Среднее");
        assert_eq!(view.impact_class, "badge badge-warning");
    }

    #[test]
    fn test_connector_view_formats_percent() {
        let views = connector_views();
        assert_eq!(
            views[0],
            ConnectorView {
                x1: "50%".to_string(),
                y1: "10%".to_string(),
                x2: "25%".to_string(),
                y2: "30%".to_string(),
            }
        );
        assert_eq!(views[2].x2, "12.5%");
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let options = filter_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].label, "Все документы");
    }
}
