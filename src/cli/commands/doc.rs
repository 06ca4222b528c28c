//! `imslc doc` command - The aggregated regulatory document catalog

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::load_catalog;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{AggregatedDocument, DocumentFilter, DocumentStats};
use crate::entities::{DocumentKind, KindFilter};

/// Shown when the filter leaves nothing
pub const NO_DOCUMENTS: &str = "Документы не найдены. Попробуйте изменить параметры поиска.";

#[derive(Subcommand, Debug)]
pub enum DocCommands {
    /// List documents, merged across indicators and sorted by type and name
    List(ListArgs),

    /// Document counts by type
    Stats,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive search in name, title and annotation
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Document type
    #[arg(long, short = 't', value_enum, default_value = "all")]
    pub r#type: KindFilter,

    /// Show count only
    #[arg(long, short = 'c')]
    pub count: bool,
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "NAME", 28),
    ColumnDef::new("kind", "KIND", 12),
    ColumnDef::new("title", "TITLE", 44),
    ColumnDef::new("related", "INDICATORS", 40),
];

pub fn run(cmd: DocCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        DocCommands::List(args) => run_list(args, global),
        DocCommands::Stats => run_stats(global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (config, catalog) = load_catalog(global)?;
    let documents = catalog.documents();
    let filter = DocumentFilter::new(args.search, args.r#type);
    let visible = filter.apply(&documents);
    tracing::debug!(
        total = documents.len(),
        shown = visible.len(),
        query = %filter.query,
        kind = filter.kind.slug(),
        "filtered documents"
    );

    if args.count {
        println!("{}", visible.len());
        return Ok(());
    }

    let format = global
        .format
        .resolve(config.default_format.as_deref(), OutputFormat::Tsv);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&visible).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&visible).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ if visible.is_empty() => {
            println!("{}", NO_DOCUMENTS);
        }
        _ => {
            let rows: Vec<TableRow> = visible.iter().map(|doc| document_row(doc)).collect();
            let table_config = if global.quiet {
                TableConfig::for_pipe()
            } else {
                TableConfig::default()
            };
            TableFormatter::new(LIST_COLUMNS, "document")
                .with_config(table_config)
                .output(&rows, format)?;
        }
    }

    Ok(())
}

fn document_row(doc: &AggregatedDocument) -> TableRow {
    TableRow::new()
        .cell("name", CellValue::Text(doc.name().to_string()))
        .cell("kind", CellValue::Kind(doc.kind))
        .cell("title", CellValue::Text(doc.document.title.clone()))
        .cell("related", CellValue::List(doc.related_indicators.clone()))
}

fn run_stats(global: &GlobalOpts) -> Result<()> {
    let (config, catalog) = load_catalog(global)?;
    let stats = DocumentStats::from_documents(&catalog.documents());

    let format = global
        .format
        .resolve(config.default_format.as_deref(), OutputFormat::Auto);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&stats).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv | OutputFormat::Md | OutputFormat::Tsv => {
            const COLUMNS: &[ColumnDef] = &[
                ColumnDef::new("kind", "KIND", 20),
                ColumnDef::new("count", "COUNT", 5),
            ];
            let rows: Vec<TableRow> = DocumentKind::ALL
                .iter()
                .map(|kind| {
                    TableRow::new()
                        .cell("kind", CellValue::Text(kind.label().to_string()))
                        .cell("count", CellValue::Number(stats.count(*kind) as i64))
                })
                .collect();
            TableFormatter::new(COLUMNS, "kind")
                .with_config(TableConfig::for_pipe())
                .output(&rows, format)?;
        }
        OutputFormat::Auto => {
            for (label, count) in stats.summary() {
                println!("{:<20} {}", style(label).bold(), style(count).cyan());
            }
            if stats.iso > 0 || stats.other > 0 {
                println!(
                    "{}",
                    style(format!(
                        "({}: {}, {}: {})",
                        DocumentKind::Iso.label(),
                        stats.iso,
                        DocumentKind::Other.label(),
                        stats.other
                    ))
                    .dim()
                );
            }
        }
    }

    Ok(())
}
