//! Path utilities for the depviz CLI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of a package manifest
pub const MANIFEST_FILE: &str = "package.json";

/// Directory holding installed packages, relative to the project root
pub const PACKAGE_STORE_DIR: &str = "node_modules";

/// Directory holding served artifacts, relative to the project root
pub const DIST_DIR: &str = "dist";

/// Default file name for the exported dependency graph
pub const GRAPH_FILE: &str = "dependency-graph.json";

/// Path to a dependency's own manifest inside the package store
pub fn store_manifest_path(store_root: &Path, name: &str) -> PathBuf {
    store_root.join(name).join(MANIFEST_FILE)
}

/// Get the dist directory for served artifacts
pub fn dist_dir(project_root: &Path) -> PathBuf {
    project_root.join(DIST_DIR)
}

/// Ensure a directory exists
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_manifest_path() {
        let path = store_manifest_path(Path::new("node_modules"), "left-pad");
        assert_eq!(path, PathBuf::from("node_modules/left-pad/package.json"));
    }

    #[test]
    fn test_store_manifest_path_scoped_package() {
        let path = store_manifest_path(Path::new("node_modules"), "@scope/pkg");
        assert!(path.ends_with("@scope/pkg/package.json"));
    }

    #[test]
    fn test_ensure_dir_creates_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
