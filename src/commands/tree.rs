//! Tree command - display the dependency tree as text
//!
//! Usage:
//!   depviz tree                  # Show full dependency tree
//!   depviz tree --depth 2        # Limit depth
//!   depviz tree --no-dedupe      # Show repeated subtrees in full
//!   depviz tree --conflicts      # Append a version-conflict summary

use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::config::{FsPackageStore, PackageManifest};
use crate::graph::{analyze, build_graph, AnalysisResult, DependencyNode};

/// Display the dependency tree as text
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Maximum depth to display (default: unlimited)
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Don't deduplicate repeated dependencies
    #[arg(long)]
    pub no_dedupe: bool,

    /// Highlight version conflicts
    #[arg(long)]
    pub conflicts: bool,
}

impl TreeCommand {
    /// Execute the tree command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let project_dir = std::env::current_dir().context("Failed to get current directory")?;

        let manifest = PackageManifest::load()?;
        let store = FsPackageStore::for_project(&project_dir);
        let tree = build_graph(&manifest, self.depth, &store);

        println!("\n{} v{}", tree.name, tree.version);

        if tree.children.is_empty() {
            println!("\n✓ No dependencies to display");
            return Ok(());
        }

        print!("{}", render_tree(&tree, !self.no_dedupe));

        if self.conflicts {
            let analysis = analyze(&tree);
            if analysis.has_multiple_versions {
                print_conflicts(&analysis);
            } else {
                println!("\n✓ No version conflicts detected");
            }
        }

        println!();
        Ok(())
    }
}

/// Render the tree below the root as glyph-prefixed lines
///
/// With deduplication, a repeated name@version is marked `(*)` and its
/// subtree is not expanded again.
fn render_tree(root: &DependencyNode, dedupe: bool) -> String {
    let mut output = String::new();
    let mut shown = if dedupe { Some(HashSet::new()) } else { None };

    let count = root.children.len();
    for (idx, child) in root.children.iter().enumerate() {
        let is_last = idx == count - 1;
        let prefix = if is_last { "└── " } else { "├── " };
        let continue_prefix = if is_last { "    " } else { "│   " };
        render_node(child, prefix, continue_prefix, &mut shown, &mut output);
    }

    output
}

/// Render a node and its children
fn render_node(
    node: &DependencyNode,
    prefix: &str,
    continue_prefix: &str,
    shown: &mut Option<HashSet<String>>,
    output: &mut String,
) {
    let dep_key = format!("{}@{}", node.name, node.version);
    let already_shown = match shown {
        Some(set) => !set.insert(dep_key),
        None => false,
    };

    if already_shown {
        output.push_str(&format!("{}{} v{}  (*)\n", prefix, node.name, node.version));
        return;
    }
    output.push_str(&format!("{}{} v{}\n", prefix, node.name, node.version));

    let count = node.children.len();
    for (idx, child) in node.children.iter().enumerate() {
        let is_last = idx == count - 1;
        let child_prefix = format!(
            "{}{}",
            continue_prefix,
            if is_last { "└── " } else { "├── " }
        );
        let child_continue = format!(
            "{}{}",
            continue_prefix,
            if is_last { "    " } else { "│   " }
        );
        render_node(child, &child_prefix, &child_continue, shown, output);
    }
}

/// Print the version-conflict summary
fn print_conflicts(analysis: &AnalysisResult) {
    println!("\n{}", style("⚠️  Version conflicts detected").yellow().bold());

    for (name, versions) in &analysis.multiple_versions {
        println!("\n  📦 {} also observed as:", name);
        for version in versions {
            println!("      • v{}", version);
        }
    }

    println!("\n  💡 Tip: Consider aligning dependency versions to avoid conflicts.");
}
