//! `imslc build` command - Render the static site

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::load_catalog;
use crate::cli::GlobalOpts;
use crate::site::{Route, SiteBuilder};

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Output directory (default: config `output_dir`, then `dist`)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Link prefix between pages; keep the default `./` for sub-path hosting
    #[arg(long)]
    pub base: Option<String>,
}

pub fn run(args: BuildArgs, global: &GlobalOpts) -> Result<()> {
    let (mut config, catalog) = load_catalog(global)?;
    if let Some(base) = args.base {
        config.base_path = Some(base);
    }
    if let Some(output) = args.output {
        config.output_dir = Some(output);
    }

    let out_dir = config.output_dir();
    let builder = SiteBuilder::new(&catalog, &config)?;
    let report = builder.build(&out_dir)?;

    if !global.quiet {
        for route in Route::ALL {
            println!(
                "{} {:<28} {}",
                style("✓").green(),
                route.label(),
                style(out_dir.join(route.output_file()).display()).dim()
            );
        }
        println!();
        println!(
            "Wrote {} file(s) to {}",
            style(report.files.len()).cyan(),
            style(out_dir.display()).yellow()
        );
    }

    Ok(())
}
