//! `imslc browse` command - Interactive pyramid and indicator browser
//!
//! The terminal counterpart of clicking a tier or a tree node: pick an
//! entity to open its detail, close it to return to the list.

use clap::ValueEnum;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{ind::print_indicator, stage::print_stage};
use crate::cli::helpers::load_catalog;
use crate::cli::GlobalOpts;
use crate::core::{Entity, Selection};
use crate::site::Route;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrowseView {
    /// Lifecycle stages
    #[default]
    Pyramid,
    /// Quality indicators
    Quality,
}

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {
    /// View to browse
    #[arg(value_enum, default_value = "pyramid")]
    pub view: BrowseView,
}

pub fn run(args: BrowseArgs, global: &GlobalOpts) -> Result<()> {
    if !Term::stdout().is_term() {
        return Err(miette::miette!(
            "browse needs an interactive terminal; use `imslc stage show` or `imslc ind show` instead"
        ));
    }

    let (_, catalog) = load_catalog(global)?;

    match args.view {
        BrowseView::Pyramid => browse(
            catalog.stages(),
            Route::Pyramid.label(),
            |stage| stage.heading(),
            print_stage,
        ),
        BrowseView::Quality => browse(
            catalog.indicators(),
            Route::Quality.label(),
            |indicator| indicator.title.clone(),
            |indicator| {
                print_indicator(indicator);
                Ok(())
            },
        ),
    }
}

/// Idle shows the list; picking an item opens its detail; closing returns to Idle
fn browse<T: Entity>(
    entities: &[T],
    prompt: &str,
    label: impl Fn(&T) -> String,
    show: impl Fn(&T) -> Result<()>,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut items: Vec<String> = entities.iter().map(&label).collect();
    items.push(style("Выход").dim().to_string());

    let mut selection: Selection<&T> = Selection::Idle;
    let mut last_index = 0;

    loop {
        tracing::debug!(
            open = selection.is_open(),
            fragment = %selection.fragment(),
            "selection state"
        );

        match selection.current().copied() {
            None => {
                let picked = Select::with_theme(&theme)
                    .with_prompt(prompt)
                    .items(&items)
                    .default(last_index)
                    .interact_opt()
                    .into_diagnostic()?;
                match picked {
                    Some(index) if index < entities.len() => {
                        last_index = index;
                        selection.open(&entities[index]);
                    }
                    _ => break,
                }
            }
            Some(entity) => {
                println!();
                show(entity)?;
                println!();
                Select::with_theme(&theme)
                    .items(&["Закрыть"])
                    .default(0)
                    .interact_opt()
                    .into_diagnostic()?;
                selection.close();
            }
        }
    }

    Ok(())
}
