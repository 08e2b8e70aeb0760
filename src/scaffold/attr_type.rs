//! Attribute type definitions for entity scaffolding
//!
//! An attribute declares one field of an entity: a user-facing type drawn
//! from a fixed six-value set, constraints whose shape depends on that type,
//! and a required flag. The storage type is derived, never user-supplied.
//!
//! # Declared types and derived storage types
//!
//! | declared | storage |
//! |----------|---------|
//! | String   | `string` |
//! | Integer  | `int64` |
//! | Float    | `float64` |
//! | Boolean  | `bool` |
//! | Date     | `JDate` |
//! | Enum     | `enum` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing attribute type, selected interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrType {
    /// Variable-length text, optionally length-bounded
    String,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Float,
    /// True/false
    Boolean,
    /// Calendar date, optionally constrained to past or future
    Date,
    /// Closed set of string values
    Enum,
}

impl AttrType {
    /// All declared types, in the order they are offered at the prompt.
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::Integer,
        Self::Float,
        Self::Boolean,
        Self::Date,
        Self::Enum,
    ];

    /// Prompt label for this type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Enum => "Enum",
        }
    }

    /// Derived storage type, as recorded in the configuration document.
    ///
    /// The mapping is total; extending [`AttrType`] without extending this
    /// match is a compile error.
    #[must_use]
    pub const fn storage_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "int64",
            Self::Float => "float64",
            Self::Boolean => "bool",
            Self::Date => "JDate",
            Self::Enum => "enum",
        }
    }

    /// Go type emitted for this attribute in generated source.
    #[must_use]
    pub const fn go_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "int64",
            Self::Float => "float64",
            Self::Boolean => "bool",
            Self::Date => "time.Time",
            // Enums are stored as their string value
            Self::Enum => "string",
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Constraint on a [`AttrType::Date`] attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateConstraint {
    /// Any date
    #[default]
    None,
    /// Past dates only
    Past,
    /// Future dates only
    Future,
}

impl DateConstraint {
    /// Normalize a selected prompt label to a constraint.
    ///
    /// Matches on the substrings "Past" and "Future"; any other label is the
    /// unconstrained case.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.contains("Past") {
            Self::Past
        } else if label.contains("Future") {
            Self::Future
        } else {
            Self::None
        }
    }

    /// Configuration-document encoding (empty string for the none case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Past => "Past",
            Self::Future => "Future",
        }
    }
}

/// Constraints carried by an attribute, keyed by its declared type.
///
/// Each variant holds exactly the fields meaningful for the type that
/// produced it, so "which constraints apply" is a compile-time fact rather
/// than a scatter of optionals.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrConstraints {
    /// No constraints (Boolean attributes)
    None,
    /// Length bounds on a String attribute
    Length {
        /// Minimum length, unset if the prompt was skipped
        min_length: Option<u32>,
        /// Maximum length, unset if the prompt was skipped
        max_length: Option<u32>,
    },
    /// Value bounds on an Integer or Float attribute
    Range {
        /// Minimum value, unset if the prompt was skipped
        min: Option<f64>,
        /// Maximum value, unset if the prompt was skipped
        max: Option<f64>,
    },
    /// Past/future restriction on a Date attribute
    Date(DateConstraint),
    /// Allowed values of an Enum attribute, in declaration order
    Values(Vec<String>),
}

/// One user-specified field of an entity.
///
/// Serialized flat (`attrName`, `attrType`, `attrImplType`, constraint
/// fields, `required`) for compatibility with the configuration document
/// format; `RawAttr` is the serde bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAttr", into = "RawAttr")]
pub struct AttrDefinition {
    /// Attribute name, unique within its entity
    pub name: String,
    /// Declared type
    pub attr_type: AttrType,
    /// Type-specific constraints
    pub constraints: AttrConstraints,
    /// Whether the field must carry a value
    pub required: bool,
}

impl AttrDefinition {
    /// Derived storage type for this attribute.
    #[must_use]
    pub const fn storage_type(&self) -> &'static str {
        self.attr_type.storage_type()
    }
}

/// Flat on-disk layout of an attribute, matching the configuration format.
///
/// Constraint fields irrelevant to `attr_type` are absent in JSON and
/// ignored on load.
#[derive(Debug, Serialize, Deserialize)]
struct RawAttr {
    #[serde(rename = "attrName")]
    name: String,
    #[serde(rename = "attrType")]
    attr_type: AttrType,
    #[serde(rename = "attrImplType")]
    impl_type: String,
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    min_length: Option<u32>,
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    #[serde(rename = "dateConstraint", default, skip_serializing_if = "Option::is_none")]
    date_constraint: Option<String>,
    #[serde(rename = "enumValues", default, skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<String>>,
    required: bool,
}

impl From<AttrDefinition> for RawAttr {
    fn from(attr: AttrDefinition) -> Self {
        let mut raw = Self {
            name: attr.name,
            attr_type: attr.attr_type,
            impl_type: attr.attr_type.storage_type().to_string(),
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            date_constraint: None,
            enum_values: None,
            required: attr.required,
        };
        match attr.constraints {
            AttrConstraints::None => {}
            AttrConstraints::Length {
                min_length,
                max_length,
            } => {
                raw.min_length = min_length;
                raw.max_length = max_length;
            }
            AttrConstraints::Range { min, max } => {
                raw.min = min;
                raw.max = max;
            }
            AttrConstraints::Date(constraint) => {
                raw.date_constraint = Some(constraint.as_str().to_string());
            }
            AttrConstraints::Values(values) => {
                raw.enum_values = Some(values);
            }
        }
        raw
    }
}

impl From<RawAttr> for AttrDefinition {
    fn from(raw: RawAttr) -> Self {
        let constraints = match raw.attr_type {
            AttrType::Boolean => AttrConstraints::None,
            AttrType::String => AttrConstraints::Length {
                min_length: raw.min_length,
                max_length: raw.max_length,
            },
            AttrType::Integer | AttrType::Float => AttrConstraints::Range {
                min: raw.min,
                max: raw.max,
            },
            AttrType::Date => AttrConstraints::Date(DateConstraint::from_label(
                raw.date_constraint.as_deref().unwrap_or(""),
            )),
            AttrType::Enum => AttrConstraints::Values(raw.enum_values.unwrap_or_default()),
        };
        Self {
            name: raw.name,
            attr_type: raw.attr_type,
            constraints,
            required: raw.required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_mapping_is_total() {
        let expected = [
            (AttrType::String, "string"),
            (AttrType::Integer, "int64"),
            (AttrType::Float, "float64"),
            (AttrType::Boolean, "bool"),
            (AttrType::Date, "JDate"),
            (AttrType::Enum, "enum"),
        ];
        assert_eq!(expected.len(), AttrType::ALL.len());
        for (attr_type, storage) in expected {
            assert_eq!(attr_type.storage_type(), storage);
        }
    }

    #[test]
    fn test_date_constraint_from_label() {
        assert_eq!(DateConstraint::from_label("None"), DateConstraint::None);
        assert_eq!(
            DateConstraint::from_label("Past dates only"),
            DateConstraint::Past
        );
        assert_eq!(
            DateConstraint::from_label("Future dates only"),
            DateConstraint::Future
        );
        assert_eq!(DateConstraint::from_label(""), DateConstraint::None);
        assert_eq!(
            DateConstraint::from_label("anything else"),
            DateConstraint::None
        );
    }

    #[test]
    fn test_serialize_string_attr_flat() {
        let attr = AttrDefinition {
            name: "title".to_string(),
            attr_type: AttrType::String,
            constraints: AttrConstraints::Length {
                min_length: Some(1),
                max_length: Some(80),
            },
            required: true,
        };
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["attrName"], "title");
        assert_eq!(json["attrType"], "String");
        assert_eq!(json["attrImplType"], "string");
        assert_eq!(json["minLength"], 1);
        assert_eq!(json["maxLength"], 80);
        assert_eq!(json["required"], true);
        // Fields for other declared types are absent, not null
        assert!(json.get("min").is_none());
        assert!(json.get("enumValues").is_none());
    }

    #[test]
    fn test_serialize_date_attr_encodes_constraint() {
        let attr = AttrDefinition {
            name: "born".to_string(),
            attr_type: AttrType::Date,
            constraints: AttrConstraints::Date(DateConstraint::Past),
            required: false,
        };
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["attrImplType"], "JDate");
        assert_eq!(json["dateConstraint"], "Past");
    }

    #[test]
    fn test_round_trip_every_constraint_variant() {
        let attrs = vec![
            AttrDefinition {
                name: "title".to_string(),
                attr_type: AttrType::String,
                constraints: AttrConstraints::Length {
                    min_length: None,
                    max_length: Some(255),
                },
                required: true,
            },
            AttrDefinition {
                name: "count".to_string(),
                attr_type: AttrType::Integer,
                constraints: AttrConstraints::Range {
                    min: Some(0.0),
                    max: None,
                },
                required: true,
            },
            AttrDefinition {
                name: "score".to_string(),
                attr_type: AttrType::Float,
                constraints: AttrConstraints::Range {
                    min: Some(-1.5),
                    max: Some(1.5),
                },
                required: false,
            },
            AttrDefinition {
                name: "active".to_string(),
                attr_type: AttrType::Boolean,
                constraints: AttrConstraints::None,
                required: true,
            },
            AttrDefinition {
                name: "due".to_string(),
                attr_type: AttrType::Date,
                constraints: AttrConstraints::Date(DateConstraint::Future),
                required: false,
            },
            AttrDefinition {
                name: "status".to_string(),
                attr_type: AttrType::Enum,
                constraints: AttrConstraints::Values(vec![
                    "Draft".to_string(),
                    "Published".to_string(),
                ]),
                required: true,
            },
        ];
        for attr in attrs {
            let json = serde_json::to_string(&attr).unwrap();
            let back: AttrDefinition = serde_json::from_str(&json).unwrap();
            assert_eq!(back, attr);
        }
    }

    #[test]
    fn test_load_tolerates_stray_constraint_fields() {
        // A Boolean attribute with leftover length fields; they are ignored.
        let json = r#"{
            "attrName": "active",
            "attrType": "Boolean",
            "attrImplType": "bool",
            "minLength": 3,
            "required": true
        }"#;
        let attr: AttrDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(attr.constraints, AttrConstraints::None);
    }

    #[test]
    fn test_empty_date_constraint_loads_as_none() {
        let json = r#"{
            "attrName": "seen",
            "attrType": "Date",
            "attrImplType": "JDate",
            "dateConstraint": "",
            "required": false
        }"#;
        let attr: AttrDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(
            attr.constraints,
            AttrConstraints::Date(DateConstraint::None)
        );
    }

    #[test]
    fn test_go_type_mapping() {
        assert_eq!(AttrType::String.go_type(), "string");
        assert_eq!(AttrType::Integer.go_type(), "int64");
        assert_eq!(AttrType::Float.go_type(), "float64");
        assert_eq!(AttrType::Boolean.go_type(), "bool");
        assert_eq!(AttrType::Date.go_type(), "time.Time");
        assert_eq!(AttrType::Enum.go_type(), "string");
    }
}
