use clap::Parser;
use miette::Result;
use imslc::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    // RUST_LOG wins; --verbose raises the default from warn to debug
    let default_level = if global.verbose { "imslc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Build(args) => imslc::cli::commands::build::run(args, &global),
        Commands::Stage(cmd) => imslc::cli::commands::stage::run(cmd, &global),
        Commands::Ind(cmd) => imslc::cli::commands::ind::run(cmd, &global),
        Commands::Doc(cmd) => imslc::cli::commands::doc::run(cmd, &global),
        Commands::Browse(args) => imslc::cli::commands::browse::run(args, &global),
        Commands::Validate(args) => imslc::cli::commands::validate::run(args, &global),
        Commands::Completions(args) => imslc::cli::commands::completions::run(args),
    }
}
