//! Quality indicator entity type and the regulatory documents it cites

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::entity::Entity;

/// Document classification derived from the document name prefix
///
/// Variant order is the display rank: national standards first, anything
/// unrecognized last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// ГОСТ - national/interstate standard
    Gost,
    /// ТР ТС / ТР ЕАЭС - technical regulation
    Tr,
    /// ISO - international standard
    Iso,
    /// Закон - statute
    Law,
    /// Anything else
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::Gost,
        DocumentKind::Tr,
        DocumentKind::Iso,
        DocumentKind::Law,
        DocumentKind::Other,
    ];

    /// Classify a document by its name prefix
    pub fn classify(name: &str) -> Self {
        if name.starts_with("ГОСТ") {
            DocumentKind::Gost
        } else if name.starts_with("ТР") {
            DocumentKind::Tr
        } else if name.starts_with("ISO") {
            DocumentKind::Iso
        } else if name.starts_with("Закон") {
            DocumentKind::Law
        } else {
            DocumentKind::Other
        }
    }

    /// Sort rank, 1 (national standard) through 5 (unclassified)
    pub fn rank(&self) -> u8 {
        match self {
            DocumentKind::Gost => 1,
            DocumentKind::Tr => 2,
            DocumentKind::Iso => 3,
            DocumentKind::Law => 4,
            DocumentKind::Other => 5,
        }
    }

    /// Short slug used by filters and `data-kind` attributes
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::Gost => "gost",
            DocumentKind::Tr => "tr",
            DocumentKind::Iso => "iso",
            DocumentKind::Law => "law",
            DocumentKind::Other => "other",
        }
    }

    /// Label shown in filters and statistics
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Gost => "ГОСТ",
            DocumentKind::Tr => "ТР ЕАЭС/ТС",
            DocumentKind::Iso => "ISO",
            DocumentKind::Law => "Законы РБ",
            DocumentKind::Other => "Прочие",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Type filter offered to the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// All documents
    #[default]
    All,
    /// National standards (ГОСТ)
    Gost,
    /// Technical regulations (ТР ТС / ТР ЕАЭС)
    Tr,
    /// International standards (ISO)
    Iso,
    /// Statutes of the Republic of Belarus
    Law,
}

impl KindFilter {
    pub const ALL: [KindFilter; 5] = [
        KindFilter::All,
        KindFilter::Gost,
        KindFilter::Tr,
        KindFilter::Iso,
        KindFilter::Law,
    ];

    pub fn matches(&self, kind: DocumentKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Gost => kind == DocumentKind::Gost,
            KindFilter::Tr => kind == DocumentKind::Tr,
            KindFilter::Iso => kind == DocumentKind::Iso,
            KindFilter::Law => kind == DocumentKind::Law,
        }
    }

    /// Value of the `<option>` in the generated page
    pub fn slug(&self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Gost => DocumentKind::Gost.slug(),
            KindFilter::Tr => DocumentKind::Tr.slug(),
            KindFilter::Iso => DocumentKind::Iso.slug(),
            KindFilter::Law => DocumentKind::Law.slug(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            KindFilter::All => "Все документы",
            KindFilter::Gost => DocumentKind::Gost.label(),
            KindFilter::Tr => DocumentKind::Tr.label(),
            KindFilter::Iso => DocumentKind::Iso.label(),
            KindFilter::Law => DocumentKind::Law.label(),
        }
    }
}

/// A regulatory document cited by an indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Designation, e.g. "ГОСТ 18725-83"; identity of the document
    pub name: String,

    pub title: String,

    #[serde(default)]
    pub annotation: String,
}

impl DocumentRef {
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::classify(&self.name)
    }
}

/// A quality indicator of an analog microcircuit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIndicator {
    pub id: u32,

    pub title: String,

    pub description: String,

    /// Documents governing this indicator, in authored order
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
}

impl Entity for QualityIndicator {
    const PREFIX: &'static str = "IND";

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
