//! Schema-free compose document access
//!
//! The document is kept as a raw YAML tree so that keys this tool does not
//! manage pass through to the output unchanged. `serde_yaml`'s mapping type
//! preserves key insertion order, so untouched sections serialize in their
//! original order. Comments and exact scalar styles are not retained.

use crate::error::{LabelError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// A parsed compose file
pub struct ComposeDocument {
    root: Value,
}

impl ComposeDocument {
    /// Parse compose file from path
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LabelError::ComposeParse(format!("Failed to read file: {}", e)))?;

        Self::parse_str(&content)
    }

    /// Parse compose file from string
    pub fn parse_str(content: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(content)
            .map_err(|e| LabelError::ComposeParse(format!("Failed to parse YAML: {}", e)))?;

        Ok(Self { root })
    }

    /// Mutable access to the definition of `services.<name>`.
    ///
    /// Validates that the document has a `services` mapping and that it
    /// contains the named service. A service defined with no body at all
    /// (`web:` followed by nothing) parses as null and is promoted to an
    /// empty mapping.
    pub fn service_mut(&mut self, name: &str) -> Result<&mut Mapping> {
        let services = self
            .root
            .get_mut("services")
            .ok_or(LabelError::MissingServices)?;

        let service = services
            .get_mut(name)
            .ok_or_else(|| LabelError::ServiceNotFound(name.to_string()))?;

        if service.is_null() {
            *service = Value::Mapping(Mapping::new());
        }

        service.as_mapping_mut().ok_or_else(|| {
            LabelError::ComposeParse(format!("service '{}' is not a mapping", name))
        })
    }

    /// Mutable access to the service's `labels` node, creating an empty
    /// sequence when the service has none.
    pub fn labels_mut(&mut self, name: &str) -> Result<&mut Value> {
        let service = self.service_mut(name)?;

        Ok(service
            .entry(Value::from("labels"))
            .or_insert_with(|| Value::Sequence(Vec::new())))
    }

    /// Serialize the document, wrapped with explicit YAML document start
    /// (`---`) and end (`...`) markers.
    pub fn to_yaml(&self) -> Result<String> {
        let body =
            serde_yaml::to_string(&self.root).map_err(|e| LabelError::Yaml(e.to_string()))?;

        Ok(format!("---\n{}...\n", body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_compose() {
        let yaml = r#"
services:
  web:
    image: nginx:latest
  db:
    image: postgres:13
"#;

        let mut doc = ComposeDocument::parse_str(yaml).unwrap();
        assert!(doc.service_mut("web").is_ok());
        assert!(doc.service_mut("db").is_ok());
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "services:\n  web:\n    image: nginx").unwrap();

        let mut doc = ComposeDocument::parse_file(file.path()).unwrap();
        assert!(doc.service_mut("web").is_ok());
    }

    #[test]
    fn test_missing_services_key() {
        let mut doc = ComposeDocument::parse_str("volumes: {}\n").unwrap();

        assert!(matches!(
            doc.service_mut("web"),
            Err(LabelError::MissingServices)
        ));
    }

    #[test]
    fn test_missing_service_name() {
        let mut doc = ComposeDocument::parse_str("services:\n  web: {}\n").unwrap();

        match doc.service_mut("api") {
            Err(LabelError::ServiceNotFound(name)) => assert_eq!(name, "api"),
            other => panic!("expected ServiceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_bodyless_service_promoted_to_mapping() {
        let mut doc = ComposeDocument::parse_str("services:\n  web:\n").unwrap();

        let service = doc.service_mut("web").unwrap();
        assert!(service.is_empty());
    }

    #[test]
    fn test_labels_created_when_absent() {
        let mut doc = ComposeDocument::parse_str("services:\n  web: {}\n").unwrap();

        let labels = doc.labels_mut("web").unwrap();
        assert_eq!(labels, &Value::Sequence(Vec::new()));
    }

    #[test]
    fn test_document_markers() {
        let doc = ComposeDocument::parse_str("services:\n  web: {}\n").unwrap();

        let out = doc.to_yaml().unwrap();
        assert!(out.starts_with("---\n"));
        assert!(out.ends_with("\n...\n"));
    }

    #[test]
    fn test_key_order_preserved() {
        let yaml = "version: \"3.8\"\nservices:\n  web: {}\nnetworks: {}\nvolumes: {}\n";
        let doc = ComposeDocument::parse_str(yaml).unwrap();

        let out = doc.to_yaml().unwrap();
        let version = out.find("version").unwrap();
        let services = out.find("services").unwrap();
        let networks = out.find("networks").unwrap();
        let volumes = out.find("volumes").unwrap();
        assert!(version < services && services < networks && networks < volumes);
    }
}
