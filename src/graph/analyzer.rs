//! Dependency tree analysis
//!
//! Two independent pre-order walks over the built tree: one detects a package
//! name repeating along a root-to-node path (circular reference), the other
//! detects packages observed under more than one version.
//!
//! The multi-version walk deliberately records only changes relative to the
//! immediately preceding visit of the same name, using a single last-seen map
//! shared across the whole tree. A version that flips back to an earlier value
//! is re-recorded on every change, and two sibling subtrees pinning different
//! versions each produce an entry. This matches the exported JSON consumed by
//! the visualization page; it is not the set of all distinct versions.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::graph::DependencyNode;

/// Result of analyzing a dependency tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// A package name repeats along some root-to-node path
    pub has_circular_dependency: bool,

    /// Some package was observed under more than one version
    pub has_multiple_versions: bool,

    /// Package name -> versions recorded when the observed version changed,
    /// in visit order
    pub multiple_versions: BTreeMap<String, Vec<String>>,
}

/// Analyze a built dependency tree
///
/// Read-only over the tree; calling it twice yields identical results.
pub fn analyze(root: &DependencyNode) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    let mut on_path = HashSet::new();
    check_circular(root, &mut on_path, &mut result);

    let mut last_seen = HashMap::new();
    check_versions(root, &mut last_seen, &mut result);

    result
}

/// Pre-order walk with a backtracking path-set
///
/// On a repeated name the flag is set and the branch is not descended
/// further; the repeat itself proves the cycle.
fn check_circular(
    node: &DependencyNode,
    on_path: &mut HashSet<String>,
    result: &mut AnalysisResult,
) {
    if on_path.contains(&node.name) {
        result.has_circular_dependency = true;
        return;
    }
    on_path.insert(node.name.clone());
    for child in &node.children {
        check_circular(child, on_path, result);
    }
    on_path.remove(&node.name);
}

/// Pre-order walk with one last-seen map shared across the entire tree
fn check_versions(
    node: &DependencyNode,
    last_seen: &mut HashMap<String, String>,
    result: &mut AnalysisResult,
) {
    if let Some(previous) = last_seen.get(&node.name) {
        if previous != &node.version {
            result.has_multiple_versions = true;
            result
                .multiple_versions
                .entry(node.name.clone())
                .or_default()
                .push(node.version.clone());
        }
    }
    last_seen.insert(node.name.clone(), node.version.clone());

    for child in &node.children {
        check_versions(child, last_seen, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, version: &str, children: Vec<DependencyNode>) -> DependencyNode {
        DependencyNode {
            name: name.to_string(),
            version: version.to_string(),
            children,
        }
    }

    #[test]
    fn test_clean_tree_has_no_findings() {
        let tree = node(
            "app",
            "1.0",
            vec![
                node("left", "1.0", vec![node("shared", "1.0", vec![])]),
                node("right", "1.0", vec![node("shared", "1.0", vec![])]),
            ],
        );

        let result = analyze(&tree);
        assert!(!result.has_circular_dependency);
        assert!(!result.has_multiple_versions);
        assert!(result.multiple_versions.is_empty());
    }

    #[test]
    fn test_multiple_versions_detected() {
        // A@1.0 at the top, then B whose child is A@2.0
        let tree = node(
            "root",
            "1.0",
            vec![
                node("A", "1.0", vec![]),
                node("B", "1.0", vec![node("A", "2.0", vec![])]),
            ],
        );

        let result = analyze(&tree);
        assert!(result.has_multiple_versions);
        assert_eq!(
            result.multiple_versions.get("A"),
            Some(&vec!["2.0".to_string()])
        );
    }

    #[test]
    fn test_version_recorded_only_on_change_from_last_seen() {
        // Visit order: A@1.0, A@2.0 (change), A@2.0 (no change), A@1.0 (change)
        let tree = node(
            "root",
            "1.0",
            vec![
                node("A", "1.0", vec![]),
                node("A", "2.0", vec![]),
                node("A", "2.0", vec![]),
                node("A", "1.0", vec![]),
            ],
        );

        let result = analyze(&tree);
        assert_eq!(
            result.multiple_versions.get("A"),
            Some(&vec!["2.0".to_string(), "1.0".to_string()])
        );
    }

    #[test]
    fn test_end_to_end_conflict_scenario() {
        let tree = node(
            "app",
            "1.0",
            vec![
                node("left", "1.0", vec![node("shared", "1.0", vec![])]),
                node("right", "1.0", vec![node("shared", "2.0", vec![])]),
            ],
        );

        let result = analyze(&tree);
        assert!(!result.has_circular_dependency);
        assert!(result.has_multiple_versions);
        assert_eq!(
            result.multiple_versions.get("shared"),
            Some(&vec!["2.0".to_string()])
        );
    }

    #[test]
    fn test_repeated_name_along_path_flags_circular() {
        let tree = node("a", "1.0", vec![node("b", "1.0", vec![node("a", "1.0", vec![])])]);

        let result = analyze(&tree);
        assert!(result.has_circular_dependency);
    }

    #[test]
    fn test_repeated_name_across_siblings_is_not_circular() {
        // The path-set backtracks between siblings, so the repeat never lands
        // on the same root-to-node path
        let tree = node(
            "root",
            "1.0",
            vec![node("x", "1.0", vec![]), node("x", "1.0", vec![])],
        );

        let result = analyze(&tree);
        assert!(!result.has_circular_dependency);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let tree = node(
            "app",
            "1.0",
            vec![
                node("left", "1.0", vec![node("shared", "1.0", vec![])]),
                node("right", "1.0", vec![node("shared", "2.0", vec![])]),
            ],
        );

        let first = analyze(&tree);
        let second = analyze(&tree);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = analyze(&node("app", "1.0", vec![]));
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("hasCircularDependency").is_some());
        assert!(json.get("hasMultipleVersions").is_some());
        assert!(json.get("multipleVersions").is_some());
    }
}
