//! CLI command implementations

pub mod entity;

pub use entity::EntityCommand;
