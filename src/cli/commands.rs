use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boceto - interactive scaffolding for Spanish-language Next.js starters.
#[derive(Parser, Debug)]
#[command(name = "boceto")]
#[command(version = "0.1.0")]
#[command(about = "De referencias de diseño a un starter Next.js.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive project wizard
    New,

    /// Scrape and analyze a single design, print the findings
    Analyze {
        /// Behance project, Dribbble shot or direct image URL
        url: String,

        /// Print the raw analysis as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Analyze a design and print the React section components it produces
    Components {
        /// Behance project, Dribbble shot or direct image URL
        url: String,
    },

    /// Generate a site from a saved brief, skipping the wizard
    Build {
        /// Brief JSON file (the wizard offers to save one)
        #[arg(long)]
        brief: PathBuf,

        /// Exact output directory instead of a fresh timestamped one
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }
}
