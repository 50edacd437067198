use anyhow::Result;
use cli::Cli;
use config::Configuration;
use convert::SearchPath;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod assembly;
mod categories;
mod categorize;
mod classify;
mod cli;
mod config;
mod config_wizard;
mod convert;
mod document;
mod navigation;
mod ordering;
mod render;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` if set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // the subscriber also installs the `log` bridge
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let load = || Configuration::load(&cli.dir, cli.config.as_deref());

    match &cli.command {
        cli::Commands::Config => {
            // a broken file shouldn't stop the wizard from replacing it
            let current = Configuration::load_or_default(&cli.dir, cli.config.as_deref());
            config_wizard::run(&cli.dir, current)
        }
        cli::Commands::Categorize => categorize::run(&cli.dir, &load()?).map(|_| ()),
        cli::Commands::Render => {
            let config = load()?;
            println!("Generating PDF from HTML documentation...\n");

            let progress = ProgressBar::new(0);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("can parse progress style")
                    .progress_chars("#>-"),
            );

            let today = chrono::Local::now().date_naive();
            let stats = render::render(
                &cli.dir,
                &config,
                today,
                &SearchPath::from_env(),
                &progress,
            )?;
            render::report(&stats);

            Ok(())
        }
    }
}
