//! package.json manifest parsing
//!
//! The manifest is the unit the dependency graph is built from: a package
//! name, its version, and the declared dependencies. Declaration order of the
//! `dependencies` object is preserved (serde_json's `preserve_order` feature)
//! because it determines the order of children in the built tree.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{hints, DepvizError};
use crate::graph::builder::PackageStore;
use crate::utils::paths::{store_manifest_path, MANIFEST_FILE, PACKAGE_STORE_DIR};

/// A parsed package.json manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package name
    pub name: String,

    /// Package version (arbitrary string; not required to be semver)
    #[serde(default)]
    pub version: String,

    /// Declared dependencies: name -> version range, in declaration order
    #[serde(default)]
    pub dependencies: Map<String, Value>,
}

impl PackageManifest {
    /// Load the root manifest from package.json in the current directory
    ///
    /// Missing or malformed root manifests are fatal; the caller gets a
    /// [`DepvizError::Manifest`] with a hint.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(MANIFEST_FILE))
    }

    /// Load a manifest from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DepvizError::manifest_error(
                path,
                format!("failed to read {}", MANIFEST_FILE),
                Some(e.into()),
                hints::package_json_not_found(),
            )
        })?;

        Self::parse(&content).map_err(|e| {
            DepvizError::manifest_error(
                path,
                e.to_string(),
                None,
                hints::invalid_package_json(),
            )
            .into()
        })
    }

    /// Parse a manifest from a JSON string
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content)
            .map_err(|e| anyhow!("failed to parse {}: {}", MANIFEST_FILE, e))?;

        if manifest.name.is_empty() {
            return Err(anyhow!("{} must have a non-empty \"name\"", MANIFEST_FILE));
        }

        Ok(manifest)
    }

    /// Declared dependency names, in declaration order
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }
}

/// Package store backed by a node_modules directory
///
/// Each installed dependency is expected at `<root>/<name>/package.json`.
#[derive(Debug, Clone)]
pub struct FsPackageStore {
    root: PathBuf,
}

impl FsPackageStore {
    /// Create a store rooted at an explicit directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store for a project's node_modules directory
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(PACKAGE_STORE_DIR))
    }
}

impl PackageStore for FsPackageStore {
    fn contains(&self, name: &str) -> bool {
        store_manifest_path(&self.root, name).is_file()
    }

    fn load(&self, name: &str) -> Option<PackageManifest> {
        let path = store_manifest_path(&self.root, name);
        if !path.exists() {
            return None;
        }
        // A manifest that is present but unreadable terminates the branch
        // the same way a missing one does
        PackageManifest::load_from(&path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_minimal() {
        let manifest = PackageManifest::parse(r#"{"name": "app", "version": "1.0.0"}"#).unwrap();
        assert_eq!(manifest.name, "app");
        assert_eq!(manifest.version, "1.0.0");
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn test_parse_preserves_dependency_order() {
        let manifest = PackageManifest::parse(
            r#"{
                "name": "app",
                "version": "1.0.0",
                "dependencies": {"zlib": "^1.0", "alpha": "^2.0", "midway": "~3.1"}
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = manifest.dependency_names().collect();
        assert_eq!(names, vec!["zlib", "alpha", "midway"]);
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let result = PackageManifest::parse(r#"{"name": "", "version": "1.0.0"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(PackageManifest::parse("{not json").is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_manifest_error() {
        let err = PackageManifest::load_from(Path::new("/nonexistent/package.json")).unwrap_err();
        assert!(err.downcast_ref::<DepvizError>().is_some());
    }

    #[test]
    fn test_fs_store_contains_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let pkg_dir = tmp.path().join("left");
        fs::create_dir_all(&pkg_dir).unwrap();
        fs::write(
            pkg_dir.join("package.json"),
            r#"{"name": "left", "version": "1.0.0"}"#,
        )
        .unwrap();

        let store = FsPackageStore::new(tmp.path());
        assert!(store.contains("left"));
        assert!(!store.contains("right"));

        let manifest = store.load("left").unwrap();
        assert_eq!(manifest.name, "left");
        assert!(store.load("right").is_none());
    }

    #[test]
    fn test_fs_store_skips_malformed_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        let pkg_dir = tmp.path().join("broken");
        fs::create_dir_all(&pkg_dir).unwrap();
        fs::write(pkg_dir.join("package.json"), "{oops").unwrap();

        let store = FsPackageStore::new(tmp.path());
        assert!(store.contains("broken"));
        assert!(store.load("broken").is_none());
    }
}
