//! `imslc stage` command - Lifecycle stages and their risk registers

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::load_catalog;
use crate::cli::table::{CellValue, ColumnDef, TableConfig, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Catalog, Entity};
use crate::entities::LifecycleStage;

#[derive(Subcommand, Debug)]
pub enum StageCommands {
    /// List lifecycle stages in order
    List(ListArgs),

    /// Show a stage with its risk register
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
    /// Stage number (1 = top of the pyramid)
    pub id: u32,
}

const LIST_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "#", 3),
    ColumnDef::new("title", "TITLE", 44),
    ColumnDef::new("risks", "RISKS", 5),
    ColumnDef::new("severe", "SEVERE", 6),
];

const RISK_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("category", "CATEGORY", 16),
    ColumnDef::new("description", "DESCRIPTION", 36),
    ColumnDef::new("probability", "PROBABILITY", 11),
    ColumnDef::new("impact", "IMPACT", 12),
    ColumnDef::new("minimization", "MINIMIZATION", 30),
    ColumnDef::new("reaction", "REACTION", 30),
];

pub fn run(cmd: StageCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        StageCommands::List(args) => run_list(args, global),
        StageCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let (config, catalog) = load_catalog(global)?;
    let stages = catalog.stages();

    if args.count {
        println!("{}", stages.len());
        return Ok(());
    }

    let format = global
        .format
        .resolve(config.default_format.as_deref(), OutputFormat::Tsv);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(stages).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(stages).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            let rows: Vec<TableRow> = stages.iter().map(stage_row).collect();
            let table_config = if global.quiet {
                TableConfig::for_pipe()
            } else {
                TableConfig::default()
            };
            TableFormatter::new(LIST_COLUMNS, "stage")
                .with_config(table_config)
                .output(&rows, format)?;
        }
    }

    Ok(())
}

fn stage_row(stage: &LifecycleStage) -> TableRow {
    TableRow::new()
        .cell("id", CellValue::Number(i64::from(stage.id)))
        .cell("title", CellValue::Text(stage.title.clone()))
        .cell("risks", CellValue::Number(stage.risks.len() as i64))
        .cell("severe", CellValue::Number(stage.severe_risk_count() as i64))
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (config, catalog) = load_catalog(global)?;
    let stage = find_stage(&catalog, args.id)?;

    let format = global
        .format
        .resolve(config.default_format.as_deref(), OutputFormat::Auto);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(stage).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(stage).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv | OutputFormat::Md => {
            TableFormatter::new(RISK_COLUMNS, "risk")
                .with_config(TableConfig::for_pipe())
                .output(&risk_rows(stage), format)?;
        }
        OutputFormat::Tsv | OutputFormat::Auto => print_stage(stage)?,
    }

    Ok(())
}

pub(crate) fn find_stage(catalog: &Catalog, id: u32) -> Result<&LifecycleStage> {
    catalog.stage(id).ok_or_else(|| {
        miette::miette!(
            "Stage {} not found (stages run 1..={})",
            id,
            catalog.stages().len()
        )
    })
}

fn risk_rows(stage: &LifecycleStage) -> Vec<TableRow> {
    stage
        .risks
        .iter()
        .map(|risk| {
            TableRow::new()
                .cell("category", CellValue::Text(risk.category.clone()))
                .cell("description", CellValue::Text(risk.description.clone()))
                .cell("probability", CellValue::Probability(risk.probability))
                .cell("impact", CellValue::Impact(risk.impact))
                .cell("minimization", CellValue::Text(risk.minimization.clone()))
                .cell("reaction", CellValue::Text(risk.reaction.clone()))
        })
        .collect()
}

/// Human-readable stage detail, the terminal counterpart of the stage modal
pub(crate) fn print_stage(stage: &LifecycleStage) -> Result<()> {
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}: {}",
        style("Stage").bold(),
        style(stage.anchor()).cyan()
    );
    println!("{}", style(stage.heading()).yellow().bold());
    println!("{}", style("─".repeat(60)).dim());
    println!();
    println!("{}", stage.description);
    println!();

    if stage.risks.is_empty() {
        println!("{}", style("No risks recorded for this stage.").dim());
        return Ok(());
    }

    println!("{}", style("Risks:").bold());
    TableFormatter::new(RISK_COLUMNS, "risk")
        .with_config(TableConfig::with_wrap(30))
        .output(&risk_rows(stage), OutputFormat::Tsv)
}
