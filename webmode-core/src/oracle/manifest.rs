//! Module manifest files
//!
//! A manifest lists which modules are present, for the default scope and
//! optionally per named context:
//!
//! ```toml
//! present = ["jakarta.servlet.Servlet"]
//!
//! [contexts.aot]
//! present = ["org.springframework.web.reactive.DispatcherHandler"]
//! ```
//!
//! The same layout is accepted as YAML.

use super::ModuleSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Manifest lists a blank module name in {context}")]
    BlankName { context: String },

    #[error("Manifest declares a context with a blank name")]
    BlankContext,

    #[error("Unsupported manifest format: {} (expected .toml, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// On-disk format of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Yaml,
}

impl ManifestFormat {
    /// Pick the format from a file extension; `None` for unsupported or
    /// non-UTF-8 extensions. A path without an extension is read as TOML.
    pub fn from_path(path: &Path) -> Option<Self> {
        let Some(ext) = path.extension() else {
            return Some(ManifestFormat::Toml);
        };
        match ext.to_str().map(str::to_ascii_lowercase).as_deref() {
            Some("toml") => Some(ManifestFormat::Toml),
            Some("yaml" | "yml") => Some(ManifestFormat::Yaml),
            _ => None,
        }
    }
}

/// Modules present in one named context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    #[serde(default)]
    pub present: Vec<String>,
}

/// Serialized description of which modules are present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleManifest {
    /// Modules present in the default scope
    #[serde(default)]
    pub present: Vec<String>,
    /// Additional modules visible only under a named context
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub contexts: BTreeMap<String, ContextEntry>,
}

impl ModuleManifest {
    /// Parse and validate manifest content
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        let manifest: ModuleManifest = match format {
            ManifestFormat::Toml => toml::from_str(content)?,
            ManifestFormat::Yaml => serde_yaml::from_str(content)?,
        };
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let format = ManifestFormat::from_path(path).ok_or_else(|| {
            ManifestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&content, format)?;
        tracing::debug!(
            path = %path.display(),
            present = manifest.present.len(),
            contexts = manifest.contexts.len(),
            "Loaded module manifest"
        );
        Ok(manifest)
    }

    /// Reject blank module and context names
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.present.iter().any(|name| name.trim().is_empty()) {
            return Err(ManifestError::BlankName {
                context: "default scope".to_string(),
            });
        }
        for (context, entry) in &self.contexts {
            if context.trim().is_empty() {
                return Err(ManifestError::BlankContext);
            }
            if entry.present.iter().any(|name| name.trim().is_empty()) {
                return Err(ManifestError::BlankName {
                    context: format!("context '{}'", context),
                });
            }
        }
        Ok(())
    }

    /// Build the in-memory oracle described by this manifest
    pub fn into_module_set(self) -> ModuleSet {
        let mut set = ModuleSet::with_present(self.present.into_iter().map(trimmed));
        for (context, entry) in self.contexts {
            for name in entry.present {
                set.insert_in(context.clone(), trimmed(name));
            }
        }
        set
    }
}

fn trimmed(name: String) -> String {
    if name.trim().len() == name.len() {
        name
    } else {
        name.trim().to_string()
    }
}
