//! Presentation geometry for the pyramid and the indicator tree
//!
//! These are display constants, kept apart from the domain types.

use serde::Serialize;

/// Default pyramid container height in pixels
pub const DEFAULT_PYRAMID_HEIGHT: f64 = 800.0;

/// Container width in pixels (capped to 100% of the viewport by CSS)
pub const PYRAMID_WIDTH_PX: u32 = 600;

/// Width added per stage below a tier, in percent
const WIDTH_STEP_PERCENT: f64 = 8.0;

/// Width of a tier with no stages below it, in percent
const BASE_WIDTH_PERCENT: f64 = 50.0;

/// Tier colour classes, cycled by stage index
const TIER_CLASSES: [&str; 10] = [
    "tier-50", "tier-100", "tier-200", "tier-300", "tier-400", "tier-500", "tier-600",
    "tier-700", "tier-800", "tier-900",
];

/// Placement of one pyramid tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierGeometry {
    pub width_percent: f64,
    pub left_percent: f64,
    pub top_px: f64,
    pub height_px: f64,
    pub z_index: usize,
    pub class: &'static str,
}

impl TierGeometry {
    /// Inline CSS for the tier's absolute placement
    pub fn style(&self) -> String {
        format!(
            "width: {}%; left: {}%; top: {}px; height: {}px; z-index: {};",
            self.width_percent, self.left_percent, self.top_px, self.height_px, self.z_index
        )
    }
}

/// Layout of an N-stage pyramid in a fixed-height container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidLayout {
    pub stage_count: usize,
    pub container_height: f64,
}

impl PyramidLayout {
    pub fn new(stage_count: usize, container_height: f64) -> Self {
        Self {
            stage_count,
            container_height,
        }
    }

    pub fn stage_height(&self) -> f64 {
        if self.stage_count == 0 {
            return 0.0;
        }
        self.container_height / self.stage_count as f64
    }

    /// Geometry of the tier at `index` (0 = first declared stage, drawn on top)
    pub fn tier(&self, index: usize) -> TierGeometry {
        let below = self.stage_count.saturating_sub(index + 1);
        let width_percent = BASE_WIDTH_PERCENT + below as f64 * WIDTH_STEP_PERCENT;
        let height = self.stage_height();

        TierGeometry {
            width_percent,
            left_percent: 50.0 - width_percent / 2.0,
            top_px: index as f64 * height,
            height_px: height,
            z_index: self.stage_count - index.min(self.stage_count),
            class: TIER_CLASSES[index % TIER_CLASSES.len()],
        }
    }

    pub fn tiers(&self) -> Vec<TierGeometry> {
        (0..self.stage_count).map(|i| self.tier(i)).collect()
    }
}

/// Position of a node in the indicator tree, in percent of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodePosition {
    pub top_percent: f64,
    pub left_percent: f64,
}

impl NodePosition {
    const fn new(top_percent: f64, left_percent: f64) -> Self {
        Self {
            top_percent,
            left_percent,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "top: {}%; left: {}%; transform: translateX(-50%);",
            self.top_percent, self.left_percent
        )
    }
}

/// Dashed connector between two tree nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connector {
    pub from: NodePosition,
    pub to: NodePosition,
}

/// Root, two branches, four leaves
pub const TREE_POSITIONS: [NodePosition; 7] = [
    NodePosition::new(10.0, 50.0),
    NodePosition::new(30.0, 25.0),
    NodePosition::new(30.0, 75.0),
    NodePosition::new(55.0, 12.5),
    NodePosition::new(55.0, 37.5),
    NodePosition::new(55.0, 62.5),
    NodePosition::new(55.0, 87.5),
];

/// (parent, child) slots joined by connectors
const TREE_EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)];

/// Fixed seven-node tree used on wide viewports
pub struct TreeLayout;

impl TreeLayout {
    /// Position of the node at `index`; nodes past the seventh reuse the root slot
    pub fn position(index: usize) -> NodePosition {
        TREE_POSITIONS
            .get(index)
            .copied()
            .unwrap_or(TREE_POSITIONS[0])
    }

    pub fn connectors() -> Vec<Connector> {
        TREE_EDGES
            .iter()
            .map(|&(from, to)| Connector {
                from: TREE_POSITIONS[from],
                to: TREE_POSITIONS[to],
            })
            .collect()
    }
}
