//! Entity file generation orchestrator
//!
//! Renders the fixed output set for one entity from the updated
//! configuration: the rewritten configuration document, the top-level
//! application file, and the data/domain/web layer files. Rendering is
//! pure; the command layer writes the results to disk. Re-rendering with
//! the same configuration and entity yields identical bytes.

use anyhow::{anyhow, Context, Result};
use inflector::Inflector;
use serde_json::json;
use std::path::PathBuf;

use crate::config::{EntityDefinition, GeneratorConfig, CONFIG_FILE};
use crate::templates::TemplateRegistry;

use super::attr_type::{AttrConstraints, AttrDefinition, AttrType, DateConstraint};

/// Generates the output files for one entity.
pub struct EntityGenerator<'a> {
    config: &'a GeneratorConfig,
    entity: &'a EntityDefinition,
    templates: TemplateRegistry,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path from the project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// Description shown to the user after writing
    pub description: String,
}

impl<'a> EntityGenerator<'a> {
    /// Create a generator for `entity_name`, which must already be merged
    /// into `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is absent from the configuration or a
    /// template fails to compile.
    pub fn new(config: &'a GeneratorConfig, entity_name: &str) -> Result<Self> {
        let entity = config
            .entity(entity_name)
            .ok_or_else(|| anyhow!("entity '{entity_name}' is not in the configuration"))?;
        Ok(Self {
            config,
            entity,
            templates: TemplateRegistry::new()?,
        })
    }

    /// Render the full output set, in the order the files are written.
    ///
    /// # Errors
    ///
    /// Returns an error if any template fails to render.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let context = self.entity_context()?;
        let name = &self.entity.name;

        let outputs = [
            (
                "generator_json",
                CONFIG_FILE.to_string(),
                "updated configuration".to_string(),
            ),
            ("app", "app.go".to_string(), "application routes".to_string()),
            (
                "data_model",
                format!("data/{name}/{name}DataModel.go"),
                format!("data model for {name}"),
            ),
            (
                "data_manager",
                format!("data/{name}/{name}DataManager.go"),
                format!("data manager interface for {name}"),
            ),
            (
                "data_manager_factory",
                format!("data/{name}/{name}DataManagerFactory.go"),
                format!("data manager factory for {name}"),
            ),
            (
                "appengine_data_manager",
                format!("data/{name}/AppEngine{name}DataManager.go"),
                format!("App Engine data manager for {name}"),
            ),
            (
                "domain_mgr",
                format!("domain/{name}/{name}DomainMgr.go"),
                format!("domain manager for {name}"),
            ),
            (
                "resource",
                format!("web/{name}/{name}Resource.go"),
                format!("web resource for {name}"),
            ),
            (
                "handler",
                format!("web/{name}/{name}Handler.go"),
                format!("web handler for {name}"),
            ),
        ];

        outputs
            .into_iter()
            .map(|(template, path, description)| {
                let content = self.templates.render(template, &context)?;
                Ok(GeneratedFile {
                    path: PathBuf::from(path),
                    content,
                    description,
                })
            })
            .collect()
    }

    /// Build the template context for this entity.
    fn entity_context(&self) -> Result<serde_json::Value> {
        let attrs: Vec<serde_json::Value> =
            self.entity.attrs.iter().map(attr_context).collect();

        let has_date = self
            .entity
            .attrs
            .iter()
            .any(|a| a.attr_type == AttrType::Date);
        let needs_time = self.entity.attrs.iter().any(|a| {
            matches!(
                a.constraints,
                AttrConstraints::Date(DateConstraint::Past | DateConstraint::Future)
            )
        });
        let needs_fmt = self.entity.attrs.iter().any(|a| {
            matches!(
                a.constraints,
                AttrConstraints::Length {
                    min_length: Some(_),
                    ..
                } | AttrConstraints::Length {
                    max_length: Some(_),
                    ..
                } | AttrConstraints::Range { min: Some(_), .. }
                    | AttrConstraints::Range { max: Some(_), .. }
            )
        });
        let needs_errors = needs_time
            || self.entity.attrs.iter().any(|a| match &a.constraints {
                AttrConstraints::Length { .. } | AttrConstraints::None => {
                    a.required && a.attr_type == AttrType::String
                }
                AttrConstraints::Values(values) => a.required || !values.is_empty(),
                _ => false,
            });

        let entities: Vec<serde_json::Value> = self
            .config
            .entities
            .iter()
            .map(|e| {
                json!({
                    "name": e.name,
                    "nameLower": e.name.to_lowercase(),
                    "routePath": route_path(&e.name),
                })
            })
            .collect();

        let generator_json = self
            .config
            .to_pretty_json()
            .context("failed to serialize the configuration document")?;

        Ok(json!({
            "appName": self.config.app_name,
            "packageName": self.config.package_name,
            "projectPath": self.config.project_path,
            "name": self.entity.name,
            "nameLower": self.entity.name.to_lowercase(),
            "namePlural": self.entity.name.to_plural(),
            "routePath": route_path(&self.entity.name),
            "attrs": attrs,
            "hasDate": has_date,
            "needsTime": needs_time,
            "needsFmt": needs_fmt,
            "needsErrors": needs_errors,
            "entities": entities,
            "generatorJson": generator_json,
        }))
    }
}

/// URL path segment for an entity's collection: pluralized, lowercased.
fn route_path(entity_name: &str) -> String {
    entity_name.to_plural().to_lowercase()
}

/// Per-attribute template context, with the constraint fields flattened
/// into flags and preformatted Go literals.
fn attr_context(attr: &AttrDefinition) -> serde_json::Value {
    let mut value = json!({
        "attrName": attr.name,
        "fieldName": attr.name.to_pascal_case(),
        "attrType": attr.attr_type.label(),
        "attrImplType": attr.storage_type(),
        "goType": attr.attr_type.go_type(),
        "required": attr.required,
        "isString": attr.attr_type == AttrType::String,
        "isNumeric": matches!(attr.attr_type, AttrType::Integer | AttrType::Float),
        "isDate": attr.attr_type == AttrType::Date,
        "isEnum": attr.attr_type == AttrType::Enum,
    });

    let extra = match &attr.constraints {
        AttrConstraints::None => json!({}),
        AttrConstraints::Length {
            min_length,
            max_length,
        } => json!({
            "hasMinLength": min_length.is_some(),
            "minLength": min_length,
            "hasMaxLength": max_length.is_some(),
            "maxLength": max_length,
        }),
        AttrConstraints::Range { min, max } => json!({
            "hasMin": min.is_some(),
            "minLiteral": min.map(|v| bound_literal(attr.attr_type, v)),
            "hasMax": max.is_some(),
            "maxLiteral": max.map(|v| bound_literal(attr.attr_type, v)),
        }),
        AttrConstraints::Date(constraint) => json!({
            "dateConstraint": constraint.as_str(),
            "pastOnly": *constraint == DateConstraint::Past,
            "futureOnly": *constraint == DateConstraint::Future,
        }),
        AttrConstraints::Values(values) => json!({
            "hasEnumValues": !values.is_empty(),
            "enumValues": values,
            "enumCaseList": values
                .iter()
                .map(|v| format!("\"{v}\""))
                .collect::<Vec<_>>()
                .join(", "),
            "enumValuesJoined": values.join(", "),
        }),
    };

    if let (Some(obj), Some(extra_obj)) = (value.as_object_mut(), extra.as_object()) {
        for (k, v) in extra_obj {
            obj.insert(k.clone(), v.clone());
        }
    }
    value
}

/// Format a numeric bound as a Go literal matching the attribute's Go type.
#[allow(clippy::cast_possible_truncation)]
fn bound_literal(attr_type: AttrType, value: f64) -> String {
    if attr_type == AttrType::Integer {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
