//! Error types and helpers for user-friendly error messages
//!
//! Provides custom error types with actionable hints so users can quickly
//! resolve common issues like a missing or malformed package.json.

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum DepvizError {
    /// Root manifest missing or unparseable
    #[error("Manifest error: {message}")]
    Manifest {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// Output artifact could not be written
    #[error("Failed to write {path}: {message}", path = .path.display())]
    Output {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Visualization server failure
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl DepvizError {
    /// Create a manifest error with a hint
    pub fn manifest_error(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Create an output error
    pub fn output_error(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a server error
    pub fn server_error(message: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self::Server {
            message: message.into(),
            source,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        if let DepvizError::Manifest { path, hint, .. } = self {
            eprintln!("\n{} {}", style("PATH:").cyan().bold(), path.display());
            if let Some(h) = hint {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
            }
        }

        eprintln!();
    }
}

/// Common error hints
pub mod hints {
    /// Get hint for package.json not found
    pub fn package_json_not_found() -> &'static str {
        "Could not find package.json in the current directory.\n\
         \n\
         Run depviz from the root of an npm-style project, or create one:\n\
         • Run: npm init"
    }

    /// Get hint for invalid package.json
    pub fn invalid_package_json() -> &'static str {
        "package.json is invalid. Common issues:\n\
         • Invalid JSON syntax (check quotes, brackets, commas)\n\
         • Missing or empty \"name\" field\n\
         • \"dependencies\" must be an object of name -> version range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_display() {
        let err = DepvizError::manifest_error(
            "package.json",
            "file not found",
            None,
            hints::package_json_not_found(),
        );
        assert_eq!(err.to_string(), "Manifest error: file not found");
    }

    #[test]
    fn test_output_error_display() {
        let err = DepvizError::output_error("dist/out.json", "permission denied", None);
        assert!(err.to_string().contains("dist/out.json"));
        assert!(err.to_string().contains("permission denied"));
    }
}
