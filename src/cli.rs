//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{analyze::AnalyzeCommand, tree::TreeCommand};

/// depviz - Dependency Graph Analyzer
///
/// Analyzes the dependency tree of an npm-style package and reports circular
/// references and version conflicts, as JSON or through a local visualization page.
#[derive(Parser, Debug)]
#[command(name = "depviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the dependency graph and export or serve the result
    Analyze(AnalyzeCommand),

    /// Display the dependency tree as text
    Tree(TreeCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        // Execute the subcommand
        match self.command {
            Commands::Analyze(cmd) => cmd.execute(self.verbose),
            Commands::Tree(cmd) => cmd.execute(self.verbose),
        }
    }
}
