//! depviz - dependency graph analyzer for npm-style packages
//!
//! Builds an in-memory dependency tree from package.json and the installed
//! packages under node_modules, analyzes it for circular references and
//! version conflicts, and exports the result as JSON or through a locally
//! served visualization page.

mod cli;
mod commands;
mod config;
mod error;
mod graph;
mod server;
mod utils;

use clap::Parser;
use console::style;

use cli::Cli;
use error::DepvizError;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        if let Some(depviz_err) = err.downcast_ref::<DepvizError>() {
            depviz_err.display_with_hints();
        } else {
            eprintln!("\n{} {:#}\n", style("ERROR:").red().bold(), err);
        }
        std::process::exit(1);
    }
}
