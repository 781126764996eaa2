//! Dependency graph construction and analysis
//!
//! The graph is an ownership tree mirroring the declared dependency
//! relationships: each node is exclusively owned by its parent's `children`
//! vector, with no back references. Manifests could in principle declare a
//! cycle; the tree shape itself cannot represent one, and the builder's depth
//! limit is what keeps construction bounded (see [`builder`]).

pub mod analyzer;
pub mod builder;

use serde::{Deserialize, Serialize};

pub use analyzer::{analyze, AnalysisResult};
pub use builder::{build_graph, PackageStore};

/// A node in the dependency tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// Package name, copied from the originating manifest
    pub name: String,

    /// Package version, copied from the originating manifest
    pub version: String,

    /// Resolved dependencies, in manifest declaration order
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Create a leaf node with no children
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DependencyNode::node_count).sum::<usize>()
    }
}

/// The exported structure: the tree's fields with the analysis alongside
///
/// A dedicated envelope rather than a field on the tree itself, so the tree
/// stays immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub tree: DependencyNode,

    #[serde(rename = "analysisResult")]
    pub analysis: AnalysisResult,
}

impl AnalysisReport {
    /// Analyze a built tree and wrap it with the result
    pub fn from_tree(tree: DependencyNode) -> Self {
        let analysis = analyze(&tree);
        Self { tree, analysis }
    }
}
