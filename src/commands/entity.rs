//! Entity scaffolding command
//!
//! Drives one full session: load the configuration, collect attributes
//! interactively, merge the entity, render the output files, write them.
//! The rewritten `generator.json` is part of the rendered set, so the
//! configuration is persisted exactly once, at the end of the session.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::scaffold::{collect_attributes, EntityGenerator, Prompter, TermPrompter};

/// Scaffold the data, domain, and web layers for one entity.
pub struct EntityCommand {
    name: String,
    project_root: PathBuf,
}

impl EntityCommand {
    /// Create a command for the entity named on the command line, rooted at
    /// the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new(name: String) -> Result<Self> {
        let project_root =
            std::env::current_dir().context("failed to get current directory")?;
        Ok(Self { name, project_root })
    }

    /// Run the session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded (reported
    /// before any prompting), a prompt cannot be read, or rendering or
    /// writing an output file fails.
    pub fn execute(&self) -> Result<()> {
        // Config load failure aborts before the first prompt.
        let mut config = GeneratorConfig::load(&self.project_root)?;

        println!(
            "\n{} {} {}",
            style("Scaffolding entity").cyan().bold(),
            style(&self.name).green().bold(),
            style("...").cyan().bold()
        );

        let mut prompter = TermPrompter::new();
        let attr_count = self.collect_and_merge(&mut prompter, &mut config)?;
        println!(
            "\n{} {} attributes for {}",
            style("Collected").green().bold(),
            attr_count,
            style(&self.name).green()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Rendering entity files...");

        let generator = EntityGenerator::new(&config, &self.name)?;
        let files = generator.generate()?;

        spinner.finish_and_clear();

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );

        for file in &files {
            let full_path = self.project_root.join(&file.path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(&full_path, &file.content)
                .with_context(|| format!("failed to write file: {}", full_path.display()))?;

            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        self.print_success();
        Ok(())
    }

    /// Run the attribute loop and fold the result into the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt cannot be read.
    fn collect_and_merge(
        &self,
        prompter: &mut dyn Prompter,
        config: &mut GeneratorConfig,
    ) -> Result<usize> {
        let attrs = collect_attributes(prompter)?;
        let count = attrs.len();
        config.merge_entity(&self.name, attrs);
        Ok(count)
    }

    /// Print the epilogue with next steps.
    fn print_success(&self) {
        println!(
            "\n{} Entity {} is ready!",
            style("✨").green().bold(),
            style(&self.name).green().bold()
        );
        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Review the generated files under {}, {}, and {}",
            style(format!("data/{}", self.name)).yellow(),
            style(format!("domain/{}", self.name)).yellow(),
            style(format!("web/{}", self.name)).yellow()
        );
        println!(
            "  2. Serve the app locally: {}",
            style("goapp serve").yellow()
        );
    }
}
