//! The static knowledge base: lifecycle stages and quality indicators
//!
//! Content is authored as YAML under `content/` and compiled into the
//! binary. A directory with the same two files can be loaded instead while
//! editing the content.

use miette::Diagnostic;
use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::core::documents::{aggregate, AggregatedDocument};
use crate::entities::{LifecycleStage, QualityIndicator};
use crate::yaml::{parse_yaml_str, YamlError};

#[derive(Embed)]
#[folder = "content/"]
struct EmbeddedContent;

pub const LIFECYCLE_FILE: &str = "lifecycle.yaml";
pub const QUALITY_FILE: &str = "quality.yaml";

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("Content file not found: {0}")]
    #[diagnostic(code(imslc::catalog::missing))]
    Missing(String),

    #[error("Content file {0} is not valid UTF-8")]
    #[diagnostic(code(imslc::catalog::encoding))]
    Encoding(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),

    #[error("Stage #{position} has id {found}; stage ids must run 1..N in declaration order")]
    #[diagnostic(code(imslc::catalog::stage_order))]
    StageOrder { position: usize, found: u32 },

    #[error("Duplicate quality indicator id {0}")]
    #[diagnostic(code(imslc::catalog::duplicate_indicator))]
    DuplicateIndicator(u32),

    #[error("{kind} {id} has an empty title")]
    #[diagnostic(code(imslc::catalog::empty_title))]
    EmptyTitle { kind: &'static str, id: u32 },

    #[error("Document in indicator {indicator} has an empty name")]
    #[diagnostic(code(imslc::catalog::empty_document_name))]
    EmptyDocumentName { indicator: u32 },
}

#[derive(Deserialize)]
struct LifecycleFile {
    stages: Vec<LifecycleStage>,
}

#[derive(Deserialize)]
struct QualityFile {
    indicators: Vec<QualityIndicator>,
}

/// Immutable pair of content tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stages: Vec<LifecycleStage>,
    indicators: Vec<QualityIndicator>,
}

impl Catalog {
    /// Build a catalog from already-parsed tables, checking invariants
    pub fn new(
        stages: Vec<LifecycleStage>,
        indicators: Vec<QualityIndicator>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { stages, indicators };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the content compiled into the binary
    pub fn load_embedded() -> Result<Self, CatalogError> {
        let lifecycle = embedded_text(LIFECYCLE_FILE)?;
        let quality = embedded_text(QUALITY_FILE)?;
        let catalog = Self::from_sources(&lifecycle, &quality)?;
        tracing::debug!(
            stages = catalog.stages.len(),
            indicators = catalog.indicators.len(),
            "loaded embedded catalog"
        );
        Ok(catalog)
    }

    /// Load `lifecycle.yaml` and `quality.yaml` from a directory
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let read = |name: &str| -> Result<String, CatalogError> {
            let path = dir.join(name);
            if !path.exists() {
                return Err(CatalogError::Missing(path.display().to_string()));
            }
            std::fs::read_to_string(&path).map_err(|e| CatalogError::Yaml(YamlError::Io(e)))
        };
        let lifecycle = read(LIFECYCLE_FILE)?;
        let quality = read(QUALITY_FILE)?;
        let catalog = Self::from_sources(&lifecycle, &quality)?;
        tracing::debug!(
            dir = %dir.display(),
            stages = catalog.stages.len(),
            indicators = catalog.indicators.len(),
            "loaded catalog from directory"
        );
        Ok(catalog)
    }

    /// Load from `dir` when given, otherwise the embedded content
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => Self::load_embedded(),
        }
    }

    fn from_sources(lifecycle: &str, quality: &str) -> Result<Self, CatalogError> {
        let lifecycle: LifecycleFile = parse_yaml_str(lifecycle, LIFECYCLE_FILE)?;
        let quality: QualityFile = parse_yaml_str(quality, QUALITY_FILE)?;
        Self::new(lifecycle.stages, quality.indicators)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (i, stage) in self.stages.iter().enumerate() {
            if stage.id as usize != i + 1 {
                return Err(CatalogError::StageOrder {
                    position: i + 1,
                    found: stage.id,
                });
            }
            if stage.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle {
                    kind: "Stage",
                    id: stage.id,
                });
            }
        }

        let mut seen = HashSet::new();
        for indicator in &self.indicators {
            if !seen.insert(indicator.id) {
                return Err(CatalogError::DuplicateIndicator(indicator.id));
            }
            if indicator.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle {
                    kind: "Indicator",
                    id: indicator.id,
                });
            }
            if indicator.documents.iter().any(|d| d.name.trim().is_empty()) {
                return Err(CatalogError::EmptyDocumentName {
                    indicator: indicator.id,
                });
            }
        }

        Ok(())
    }

    pub fn stages(&self) -> &[LifecycleStage] {
        &self.stages
    }

    pub fn indicators(&self) -> &[QualityIndicator] {
        &self.indicators
    }

    pub fn stage(&self, id: u32) -> Option<&LifecycleStage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn indicator(&self, id: u32) -> Option<&QualityIndicator> {
        self.indicators.iter().find(|i| i.id == id)
    }

    /// Deduplicated, sorted document list derived from the indicators
    pub fn documents(&self) -> Vec<AggregatedDocument> {
        aggregate(&self.indicators)
    }
}

fn embedded_text(name: &str) -> Result<String, CatalogError> {
    let file = EmbeddedContent::get(name).ok_or_else(|| CatalogError::Missing(name.to_string()))?;
    String::from_utf8(file.data.into_owned()).map_err(|_| CatalogError::Encoding(name.to_string()))
}
