//! Regulatory document aggregation and filtering
//!
//! Documents are cited per quality indicator; this module merges them into
//! one catalog keyed by document name, orders it by classification and
//! name, and applies the reader's search/type filter. Everything here is a
//! pure function of the indicator table.

use serde::Serialize;
use std::collections::HashMap;

use crate::entities::{DocumentKind, DocumentRef, KindFilter, QualityIndicator};

/// A document merged across all indicators that cite it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedDocument {
    #[serde(flatten)]
    pub document: DocumentRef,

    pub kind: DocumentKind,

    /// Titles of the citing indicators, in first-citation order, no repeats
    pub related_indicators: Vec<String>,
}

impl AggregatedDocument {
    fn new(document: &DocumentRef, indicator_title: &str) -> Self {
        Self {
            kind: document.kind(),
            document: document.clone(),
            related_indicators: vec![indicator_title.to_string()],
        }
    }

    pub fn name(&self) -> &str {
        &self.document.name
    }

    /// Lowercased name, title and annotation joined for substring search
    pub fn search_haystack(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.document.name.to_lowercase(),
            self.document.title.to_lowercase(),
            self.document.annotation.to_lowercase()
        )
    }

    /// Case-insensitive substring match on name, title or annotation
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.document.name.to_lowercase().contains(&needle)
            || self.document.title.to_lowercase().contains(&needle)
            || self.document.annotation.to_lowercase().contains(&needle)
    }
}

/// Merge every document reference into one entry per distinct name,
/// sorted by (classification rank, name)
pub fn aggregate(indicators: &[QualityIndicator]) -> Vec<AggregatedDocument> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut documents: Vec<AggregatedDocument> = Vec::new();

    for indicator in indicators {
        for doc in &indicator.documents {
            match index.get(doc.name.as_str()) {
                Some(&pos) => {
                    let related = &mut documents[pos].related_indicators;
                    if !related.iter().any(|t| t == &indicator.title) {
                        related.push(indicator.title.clone());
                    }
                }
                None => {
                    index.insert(doc.name.as_str(), documents.len());
                    documents.push(AggregatedDocument::new(doc, &indicator.title));
                }
            }
        }
    }

    documents.sort_by(|a, b| {
        a.kind
            .rank()
            .cmp(&b.kind.rank())
            .then_with(|| a.document.name.cmp(&b.document.name))
    });

    documents
}

/// The reader's current search text and type selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub query: String,
    pub kind: KindFilter,
}

impl DocumentFilter {
    pub fn new(query: impl Into<String>, kind: KindFilter) -> Self {
        Self {
            query: query.into(),
            kind,
        }
    }

    pub fn matches(&self, doc: &AggregatedDocument) -> bool {
        doc.matches_query(&self.query) && self.kind.matches(doc.kind)
    }

    /// Keep matching documents, preserving order
    pub fn apply<'a>(&self, documents: &'a [AggregatedDocument]) -> Vec<&'a AggregatedDocument> {
        documents.iter().filter(|d| self.matches(d)).collect()
    }
}

/// Counts shown in the statistics panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub total: usize,
    pub gost: usize,
    pub tr: usize,
    pub iso: usize,
    pub law: usize,
    pub other: usize,
}

impl DocumentStats {
    pub fn from_documents(documents: &[AggregatedDocument]) -> Self {
        let mut stats = DocumentStats {
            total: documents.len(),
            ..Default::default()
        };
        for doc in documents {
            match doc.kind {
                DocumentKind::Gost => stats.gost += 1,
                DocumentKind::Tr => stats.tr += 1,
                DocumentKind::Iso => stats.iso += 1,
                DocumentKind::Law => stats.law += 1,
                DocumentKind::Other => stats.other += 1,
            }
        }
        stats
    }

    pub fn count(&self, kind: DocumentKind) -> usize {
        match kind {
            DocumentKind::Gost => self.gost,
            DocumentKind::Tr => self.tr,
            DocumentKind::Iso => self.iso,
            DocumentKind::Law => self.law,
            DocumentKind::Other => self.other,
        }
    }

    /// (label, count) pairs for the summary panel: total, ГОСТ, ТР, laws
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Всего документов", self.total),
            (DocumentKind::Gost.label(), self.gost),
            (DocumentKind::Tr.label(), self.tr),
            (DocumentKind::Law.label(), self.law),
        ]
    }
}
