//! Analyze command - build, analyze, and export the dependency graph
//!
//! Usage:
//!   depviz analyze                      # Serve the visualization on localhost:3000
//!   depviz analyze --depth 2            # Limit recursion depth
//!   depviz analyze --json graph.json    # Save as JSON instead of serving
//!   depviz analyze --json               # Save to ./dependency-graph.json
//!   depviz analyze --no-open            # Serve without launching the browser

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::config::{FsPackageStore, PackageManifest};
use crate::error::DepvizError;
use crate::graph::{build_graph, AnalysisReport};
use crate::server;
use crate::utils::paths::{dist_dir, ensure_dir, GRAPH_FILE};

/// Visualization page written into dist/ and served at the root route
const VIEWER_HTML: &str = include_str!("../../assets/viewer.html");

/// Analyze the dependency graph and export or serve the result
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Limit the depth of recursive analysis (default: unlimited)
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Save the dependency graph as JSON to PATH instead of serving it
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = GRAPH_FILE)]
    pub json: Option<PathBuf>,

    /// Don't open the browser when serving
    #[arg(long)]
    pub no_open: bool,
}

impl AnalyzeCommand {
    /// Execute the analyze command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let project_dir = std::env::current_dir().context("Failed to get current directory")?;

        // Root manifest is the only fatal input
        let manifest = PackageManifest::load()?;
        let store = FsPackageStore::for_project(&project_dir);

        let tree = build_graph(&manifest, self.depth, &store);
        if verbose {
            println!(
                "Resolved {} package(s) for {} v{}",
                tree.node_count(),
                tree.name,
                tree.version
            );
        }

        let report = AnalysisReport::from_tree(tree);
        self.print_summary(&report);

        match self.json {
            Some(ref path) => save_as_json(&report, path),
            None => {
                // No explicit output path: write the dist artifacts and serve them
                let dist = dist_dir(&project_dir);
                ensure_dir(&dist)?;
                save_as_json(&report, &dist.join(GRAPH_FILE))?;

                let index_path = dist.join("index.html");
                fs::write(&index_path, VIEWER_HTML).map_err(|e| {
                    DepvizError::output_error(
                        &index_path,
                        "could not write visualization page",
                        Some(e.into()),
                    )
                })?;

                server::serve_blocking(&dist, !self.no_open)
            }
        }
    }

    /// Print the analysis findings
    fn print_summary(&self, report: &AnalysisReport) {
        let analysis = &report.analysis;

        if analysis.has_circular_dependency {
            println!("{}", style("⚠️  Circular dependency detected").yellow().bold());
        } else {
            println!("✓ No circular dependencies");
        }

        if analysis.has_multiple_versions {
            println!("{}", style("⚠️  Multiple versions detected:").yellow().bold());
            for (name, versions) in &analysis.multiple_versions {
                println!("  📦 {} also observed as: {}", name, versions.join(", "));
            }
        } else {
            println!("✓ No version conflicts");
        }
    }
}

/// Serialize the report as indented JSON to the given path
fn save_as_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize dependency graph")?;

    fs::write(path, json).map_err(|e| {
        DepvizError::output_error(path, "could not write file", Some(e.into()))
    })?;

    println!("Dependency graph saved as JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DependencyNode;

    #[test]
    fn test_save_as_json_writes_indented_envelope() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("graph.json");

        let report = AnalysisReport::from_tree(DependencyNode::new("app", "1.0.0"));
        save_as_json(&report, &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        // Indented output, tree fields at the top level, analysis alongside
        assert!(content.contains("\n  \"name\": \"app\""));
        assert!(content.contains("\"analysisResult\""));
    }

    #[test]
    fn test_save_as_json_fails_for_unwritable_path() {
        let report = AnalysisReport::from_tree(DependencyNode::new("app", "1.0.0"));
        let err = save_as_json(&report, Path::new("/nonexistent/dir/graph.json")).unwrap_err();
        assert!(err.downcast_ref::<DepvizError>().is_some());
    }
}
