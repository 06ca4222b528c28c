//! `imslc validate` command - Check the content tables

use console::style;
use miette::Result;

use crate::cli::helpers::load_catalog;
use crate::cli::GlobalOpts;
use crate::core::layout::TREE_POSITIONS;
use crate::core::{Catalog, DocumentStats};
use crate::entities::{DocumentKind, KindFilter};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Strict mode - warnings become errors
    #[arg(long)]
    pub strict: bool,
}

/// Load-time checks are hard errors; these are content smells worth reporting
fn collect_warnings(catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();

    for stage in catalog.stages() {
        if stage.risks.is_empty() {
            warnings.push(format!("Stage {} has no risks", stage.heading()));
        }
    }

    for indicator in catalog.indicators() {
        if indicator.documents.is_empty() {
            warnings.push(format!(
                "Indicator {} ({}) cites no documents",
                indicator.id, indicator.title
            ));
        }
    }

    if catalog.indicators().len() > TREE_POSITIONS.len() {
        warnings.push(format!(
            "{} indicators but only {} tree positions; the rest share the root position",
            catalog.indicators().len(),
            TREE_POSITIONS.len()
        ));
    }

    for doc in catalog.documents() {
        if doc.kind == DocumentKind::Other {
            warnings.push(format!(
                "Document {} is unclassified; it is only listed under \"{}\"",
                doc.name(),
                KindFilter::All.label()
            ));
        }
    }

    warnings
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let (_, catalog) = load_catalog(global)?;
    let documents = catalog.documents();
    let stats = DocumentStats::from_documents(&documents);
    let warnings = collect_warnings(&catalog);

    if !global.quiet {
        for warning in &warnings {
            println!("{} {}", style("!").yellow(), style(warning).yellow());
        }
        if !warnings.is_empty() {
            println!();
        }

        let risk_count: usize = catalog.stages().iter().map(|s| s.risks.len()).sum();
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", style("Validation Summary").bold());
        println!("{}", style("─".repeat(60)).dim());
        println!("  Stages:         {}", style(catalog.stages().len()).cyan());
        println!("  Risks:          {}", style(risk_count).cyan());
        println!("  Indicators:     {}", style(catalog.indicators().len()).cyan());
        println!("  Documents:      {}", style(stats.total).cyan());
        if !warnings.is_empty() {
            println!("  Warnings:       {}", style(warnings.len()).yellow());
        }
        println!();
    }

    if args.strict && !warnings.is_empty() {
        return Err(miette::miette!(
            "Validation failed: {} warning(s) in strict mode",
            warnings.len()
        ));
    }

    if !global.quiet {
        println!("{} Content is valid!", style("✓").green().bold());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DocumentRef, LifecycleStage, QualityIndicator};

    fn indicator(id: u32, documents: Vec<DocumentRef>) -> QualityIndicator {
        QualityIndicator {
            id,
            title: format!("Показатель {}", id),
            description: String::new(),
            documents,
        }
    }

    #[test]
    fn test_embedded_catalog_only_warns_about_unclassified_documents() {
        let catalog = Catalog::load_embedded().unwrap();
        let warnings = collect_warnings(&catalog);
        assert!(warnings.iter().all(|w| w.starts_with("Document ")));
    }

    #[test]
    fn test_warnings_for_empty_entries() {
        let stage = LifecycleStage {
            id: 1,
            title: "Проектирование".to_string(),
            description: String::new(),
            risks: Vec::new(),
        };
        let doc = DocumentRef {
            name: "IEC 60748".to_string(),
            title: "Интегральные схемы".to_string(),
            annotation: String::new(),
        };
        let catalog = Catalog::new(
            vec![stage],
            vec![indicator(1, Vec::new()), indicator(2, vec![doc])],
        )
        .unwrap();

        let warnings = collect_warnings(&catalog);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("1. Проектирование"));
        assert!(warnings[1].contains("cites no documents"));
        assert!(warnings[2].contains("IEC 60748"));
    }

    #[test]
    fn test_warns_when_tree_positions_run_out() {
        let indicators = (1..=8)
            .map(|id| {
                indicator(
                    id,
                    vec![DocumentRef {
                        name: "ГОСТ 1".to_string(),
                        title: "Т".to_string(),
                        annotation: String::new(),
                    }],
                )
            })
            .collect();
        let catalog = Catalog::new(Vec::new(), indicators).unwrap();
        let warnings = collect_warnings(&catalog);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("tree positions"));
    }
}
