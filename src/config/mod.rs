//! Configuration and manifest parsing

pub mod manifest;

pub use manifest::{FsPackageStore, PackageManifest};
