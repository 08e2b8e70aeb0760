//! Configuration document persistence
//!
//! `generator.json` is the single source of truth for a generated project:
//! its metadata plus every entity defined so far. It is read once when a
//! session starts and written back once, in full, when the session ends.
//! Concurrent sessions against the same file are not coordinated; the last
//! writer wins.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scaffold::AttrDefinition;

/// Fixed, project-relative name of the configuration document.
pub const CONFIG_FILE: &str = "generator.json";

/// Failure to load the configuration document. Always fatal; the session
/// does not proceed to prompting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file is missing or unreadable
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file exists but is not a valid configuration document
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// The path that was read
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// One named entity: an ordered collection of attribute definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    /// Entity name, unique within the configuration
    pub name: String,
    /// Attributes in definition order
    pub attrs: Vec<AttrDefinition>,
}

/// The persisted project configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Application name
    #[serde(rename = "appName")]
    pub app_name: String,
    /// Project path on disk, as recorded at project creation
    #[serde(rename = "projectPath")]
    pub project_path: String,
    /// Go package name used in generated imports
    #[serde(rename = "packageName")]
    pub package_name: String,
    /// Entities defined so far, in definition order
    #[serde(default)]
    pub entities: Vec<EntityDefinition>,
}

impl GeneratorConfig {
    /// Load the configuration document from `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `generator.json` is missing, unreadable,
    /// or unparseable.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let path = project_root.join(CONFIG_FILE);
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Integrate a finished attribute list as entity `name`.
    ///
    /// Any previously stored entity of the same name is removed first, so a
    /// redefinition replaces the old definition wholesale and moves to the
    /// end of the entity list. The entity name itself is not validated.
    pub fn merge_entity(&mut self, name: &str, attrs: Vec<AttrDefinition>) {
        if let Some(pos) = self.entities.iter().position(|e| e.name == name) {
            self.entities.remove(pos);
        }
        self.entities.push(EntityDefinition {
            name: name.to_string(),
            attrs,
        });
    }

    /// Look up an entity by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntityDefinition> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Serialize the document the way it is stored on disk: pretty-printed
    /// with tab indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| serde::ser::Error::custom(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::{AttrConstraints, AttrType, DateConstraint};

    fn attr(name: &str) -> AttrDefinition {
        AttrDefinition {
            name: name.to_string(),
            attr_type: AttrType::String,
            constraints: AttrConstraints::Length {
                min_length: None,
                max_length: None,
            },
            required: true,
        }
    }

    fn sample_config() -> GeneratorConfig {
        GeneratorConfig {
            app_name: "myapp".to_string(),
            project_path: "github.com/acme/myapp".to_string(),
            package_name: "myapp".to_string(),
            entities: vec![EntityDefinition {
                name: "User".to_string(),
                attrs: vec![attr("email"), attr("nick")],
            }],
        }
    }

    #[test]
    fn test_merge_replaces_existing_entity_wholesale() {
        let mut config = sample_config();
        config.merge_entity("User", vec![attr("handle")]);

        let users: Vec<_> = config
            .entities
            .iter()
            .filter(|e| e.name == "User")
            .collect();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].attrs.len(), 1);
        assert_eq!(users[0].attrs[0].name, "handle");
    }

    #[test]
    fn test_merge_appends_new_entity_at_end() {
        let mut config = sample_config();
        config.merge_entity("Order", vec![attr("total")]);
        assert_eq!(config.entities.len(), 2);
        assert_eq!(config.entities.last().unwrap().name, "Order");
        // The pre-existing entity is untouched
        assert_eq!(config.entities[0].name, "User");
        assert_eq!(config.entities[0].attrs.len(), 2);
    }

    #[test]
    fn test_merge_moves_redefined_entity_to_end() {
        let mut config = sample_config();
        config.merge_entity("Order", vec![attr("total")]);
        config.merge_entity("User", vec![attr("email")]);
        let names: Vec<_> = config.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Order", "User"]);
    }

    #[test]
    fn test_entity_names_are_case_sensitive() {
        let mut config = sample_config();
        config.merge_entity("user", vec![attr("id")]);
        assert_eq!(config.entities.len(), 2);
    }

    #[test]
    fn test_pretty_json_uses_tab_indentation() {
        let config = sample_config();
        let json = config.to_pretty_json().unwrap();
        assert!(json.contains("\n\t\"appName\": \"myapp\""));
        assert!(!json.contains("\n  \""));
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let mut config = sample_config();
        config.merge_entity(
            "Event",
            vec![
                AttrDefinition {
                    name: "when".to_string(),
                    attr_type: AttrType::Date,
                    constraints: AttrConstraints::Date(DateConstraint::Future),
                    required: true,
                },
                AttrDefinition {
                    name: "kind".to_string(),
                    attr_type: AttrType::Enum,
                    constraints: AttrConstraints::Values(vec![
                        "Meetup".to_string(),
                        "Launch".to_string(),
                    ]),
                    required: false,
                },
            ],
        );
        let json = config.to_pretty_json().unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        let err = GeneratorConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_reads_written_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config();
        fs::write(
            dir.path().join(CONFIG_FILE),
            config.to_pretty_json().unwrap(),
        )
        .unwrap();
        let loaded = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
