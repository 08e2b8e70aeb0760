//! Entity scaffolding: attribute collection and file generation

pub mod attr_type;
pub mod collector;
pub mod generator;
pub mod prompt;

pub use attr_type::{AttrConstraints, AttrDefinition, AttrType, DateConstraint};
pub use collector::collect_attributes;
pub use generator::{EntityGenerator, GeneratedFile};
pub use prompt::{Prompter, TermPrompter};
