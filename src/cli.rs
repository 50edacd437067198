use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a docbinder.toml config file
    Config,
    /// Classifies the HTML pages and saves the categorization for review
    Categorize,
    /// Binds the HTML pages into a combined document and converts it to PDF
    Render,
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Directory containing the rendered HTML pages
    #[clap(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file (defaults to docbinder.toml in the pages directory)
    #[clap(short, long, global = true, env = "DOCBINDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debugging information to stderr
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["docbinder", "render", "--dir", "site", "-v"])
            .expect("can parse");
        assert!(matches!(cli.command, Commands::Render));
        assert_eq!(cli.dir, PathBuf::from("site"));
        assert!(cli.verbose);
    }
}
