//! `imslc ind` command - Quality indicators and the documents they cite

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::load_catalog;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Entity};
use crate::entities::{DocumentKind, QualityIndicator};

#[derive(Subcommand, Debug)]
pub enum IndCommands {
    /// List quality indicators
    List(ListArgs),

    /// Show an indicator with its regulatory documents
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show count only
    #[arg(long, short = 'c')]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Indicator id
    pub id: u32,
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "#", 3),
    ColumnDef::new("title", "TITLE", 36),
    ColumnDef::new("documents", "DOCS", 4),
    ColumnDef::new("description", "DESCRIPTION", 50),
];

const DOCUMENT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "NAME", 28),
    ColumnDef::new("kind", "KIND", 12),
    ColumnDef::new("title", "TITLE", 60),
];

pub fn run(cmd: IndCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        IndCommands::List(args) => run_list(args, global),
        IndCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (config, catalog) = load_catalog(global)?;
    let indicators = catalog.indicators();

    if args.count {
        println!("{}", indicators.len());
        return Ok(());
    }

    let format = global
        .format
        .resolve(config.default_format.as_deref(), OutputFormat::Tsv);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(indicators).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(indicators).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            let rows: Vec<TableRow> = indicators
                .iter()
                .map(|ind| {
                    TableRow::new()
                        .cell("id", CellValue::Number(i64::from(ind.id)))
                        .cell("title", CellValue::Text(ind.title.clone()))
                        .cell("documents", CellValue::Number(ind.documents.len() as i64))
                        .cell("description", CellValue::Text(ind.description.clone()))
                })
                .collect();
            let table_config = if global.quiet {
                TableConfig::for_pipe()
            } else {
                TableConfig::default()
            };
            TableFormatter::new(LIST_COLUMNS, "indicator")
                .with_config(table_config)
                .output(&rows, format)?;
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (config, catalog) = load_catalog(global)?;
    let indicator = find_indicator(&catalog, args.id)?;

    let format = global
        .format
        .resolve(config.default_format.as_deref(), OutputFormat::Auto);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(indicator).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(indicator).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv | OutputFormat::Md => {
            let rows: Vec<TableRow> = indicator
                .documents
                .iter()
                .map(|doc| {
                    TableRow::new()
                        .cell("name", CellValue::Text(doc.name.clone()))
                        .cell("kind", CellValue::Kind(doc.kind()))
                        .cell("title", CellValue::Text(doc.title.clone()))
                })
                .collect();
            TableFormatter::new(DOCUMENT_COLUMNS, "document")
                .with_config(TableConfig::for_pipe())
                .output(&rows, format)?;
        }
        OutputFormat::Tsv | OutputFormat::Auto => print_indicator(indicator),
    }

    Ok(())
}

pub(crate) fn find_indicator(catalog: &Catalog, id: u32) -> Result<&QualityIndicator> {
    catalog.indicator(id).ok_or_else(|| {
        let known: Vec<String> = catalog
            .indicators()
            .iter()
            .map(|i| i.id.to_string())
            .collect();
        miette::miette!(
            "Quality indicator {} not found (known ids: {})",
            id,
            known.join(", ")
        )
    })
}

fn kind_style(kind: DocumentKind, text: &str) -> String {
    match kind {
        DocumentKind::Gost => style(text).blue().bold().to_string(),
        DocumentKind::Tr => style(text).magenta().bold().to_string(),
        DocumentKind::Iso => style(text).cyan().bold().to_string(),
        DocumentKind::Law => style(text).yellow().bold().to_string(),
        DocumentKind::Other => style(text).bold().to_string(),
    }
}

/// Human-readable indicator detail, the terminal counterpart of the indicator modal
pub(crate) fn print_indicator(indicator: &QualityIndicator) {
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}: {}",
        style("Indicator").bold(),
        style(indicator.anchor()).cyan()
    );
    println!("{}", style(&indicator.title).yellow().bold());
    println!("{}", style("─".repeat(60)).dim());
    println!();
    println!("{}", indicator.description);
    println!();

    if indicator.documents.is_empty() {
        println!("{}", style("No regulatory documents cited.").dim());
        return;
    }

    println!("{}", style("Regulatory documents:").bold());
    for doc in &indicator.documents {
        println!();
        println!(
            "  {} {}",
            kind_style(doc.kind(), &doc.name),
            style(format!("[{}]", doc.kind().label())).dim()
        );
        println!("  {}", doc.title);
        if !doc.annotation.is_empty() {
            println!("  {}", style(&doc.annotation).dim());
        }
    }
}
