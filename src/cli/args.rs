//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// pagemap: markdown and catalog content to static pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: pagemap.toml)
    #[arg(short = 'C', long, default_value = "pagemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug output (node ids, slugs, registered pages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Plan all pages and render them into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Plan all pages and print the routes without writing anything
    #[command(visible_alias = "p")]
    Plan {
        /// Print routes as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved bundler alias map as JSON
    #[command(visible_alias = "a")]
    Aliases,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["pagemap", "-o", "dist", "build", "--clean"]);
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
        assert!(matches!(
            cli.command,
            Commands::Build { build_args: BuildArgs { clean: true } }
        ));
    }

    #[test]
    fn test_parse_plan_json() {
        let cli = Cli::parse_from(["pagemap", "plan", "--json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Plan { json: true }));
        assert_eq!(cli.config, PathBuf::from("pagemap.toml"));
    }

    #[test]
    fn test_alias_subcommand() {
        let cli = Cli::parse_from(["pagemap", "a"]);
        assert!(matches!(cli.command, Commands::Aliases));
    }
}
