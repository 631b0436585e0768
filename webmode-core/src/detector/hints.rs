//! Reflection hints registry
//!
//! Records type names that an ahead-of-time toolchain must keep available
//! for reflective access. Serializes as a JSON array of `{"name": ...}`
//! entries.

use crate::models::IndicatorName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HintsError {
    #[error("Failed to write reflection hints to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize reflection hints: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single type registered for reflection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHint {
    pub name: IndicatorName,
}

/// Insertion-ordered set of reflection hints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TypeHint>", into = "Vec<TypeHint>")]
pub struct ReflectionHints {
    types: Vec<TypeHint>,
}

impl From<Vec<TypeHint>> for ReflectionHints {
    fn from(types: Vec<TypeHint>) -> Self {
        let mut hints = Self::new();
        for hint in types {
            hints.register_type(hint.name);
        }
        hints
    }
}

impl From<ReflectionHints> for Vec<TypeHint> {
    fn from(hints: ReflectionHints) -> Self {
        hints.types
    }
}

impl ReflectionHints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type; returns false if it was already registered
    pub fn register_type(&mut self, name: IndicatorName) -> bool {
        if self.contains(&name) {
            return false;
        }
        tracing::debug!(name = %name, "Registered reflection hint");
        self.types.push(TypeHint { name });
        true
    }

    pub fn contains(&self, name: &IndicatorName) -> bool {
        self.types.iter().any(|hint| &hint.name == name)
    }

    pub fn types(&self) -> &[TypeHint] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, HintsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the hints as pretty JSON, creating parent directories as needed
    pub fn write_to_file(&self, path: &Path) -> Result<(), HintsError> {
        let content = self.to_json_pretty()?;
        let io_err = |source| HintsError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, content).map_err(io_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{REACTIVE_INDICATOR, SERVLET_API_INDICATOR};
    use tempfile::tempdir;

    #[test]
    fn test_register_deduplicates_and_keeps_order() {
        let mut hints = ReflectionHints::new();
        assert!(hints.register_type(REACTIVE_INDICATOR));
        assert!(hints.register_type(SERVLET_API_INDICATOR));
        assert!(!hints.register_type(IndicatorName::new(
            "org.springframework.web.reactive.DispatcherHandler"
        )));

        let names: Vec<&str> = hints.types().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "org.springframework.web.reactive.DispatcherHandler",
                "jakarta.servlet.Servlet"
            ]
        );
    }

    #[test]
    fn test_json_layout() {
        let mut hints = ReflectionHints::new();
        hints.register_type(SERVLET_API_INDICATOR);

        let value: serde_json::Value =
            serde_json::from_str(&hints.to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "name": "jakarta.servlet.Servlet" }])
        );
    }

    #[test]
    fn test_deserialize_drops_repeated_names() {
        let hints: ReflectionHints = serde_json::from_str(
            r#"[{"name":"jakarta.servlet.Servlet"},{"name":"jakarta.servlet.Servlet"}]"#,
        )
        .unwrap();
        assert_eq!(hints.len(), 1);
        assert!(hints.contains(&SERVLET_API_INDICATOR));
    }

    #[test]
    fn test_empty_hints_serialize_as_empty_array() {
        assert_eq!(ReflectionHints::new().to_json_pretty().unwrap(), "[]");
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out").join("reflect-config.json");

        let mut hints = ReflectionHints::new();
        hints.register_type(REACTIVE_INDICATOR);
        hints.write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: ReflectionHints = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, hints);
    }
}
