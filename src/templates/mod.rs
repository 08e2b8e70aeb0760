//! Handlebars template registry
//!
//! All templates are compiled up front so a bad template fails before any
//! prompting or file writing. HTML escaping is disabled since the output is
//! source code, not markup.

use anyhow::{Context, Result};
use handlebars::Handlebars;

pub mod files;

/// Compiled template set for the fixed output files.
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile every template in [`files::ALL`].
    ///
    /// # Errors
    ///
    /// Returns an error if any template fails to compile.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        for (name, source) in files::ALL {
            handlebars
                .register_template_string(name, source)
                .with_context(|| format!("failed to compile template: {name}"))?;
        }
        Ok(Self { handlebars })
    }

    /// Render a registered template against `context`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or rendering fails.
    pub fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render(name, context)
            .with_context(|| format!("failed to render template: {name}"))
    }
}
