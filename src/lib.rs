//! entigen library
//!
//! Interactive entity scaffolding for generated Go projects. The session
//! flow is: load `generator.json`, collect attribute definitions at the
//! prompt, merge the entity into the configuration (replace-by-name), and
//! render the data/domain/web layer files plus the rewritten configuration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod scaffold;
pub mod templates;

pub use config::{ConfigError, EntityDefinition, GeneratorConfig, CONFIG_FILE};
pub use scaffold::{
    collect_attributes, AttrConstraints, AttrDefinition, AttrType, DateConstraint,
    EntityGenerator, GeneratedFile, Prompter, TermPrompter,
};
