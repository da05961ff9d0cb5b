//! # CLI Command Implementations
//!
//! Each subcommand lives in its own module with an `Args` struct derived
//! with `clap` and an `execute` function. Both commands read the project the
//! same way, through [`SourceArgs`].

pub mod patch;
pub mod resolve;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use manifest_resolver::attributes::AttributeMap;
use manifest_resolver::config;
use manifest_resolver::environment::EnvironmentSnapshot;
use manifest_resolver::project::Project;

/// Where the project description and declared properties come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the project description.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = config::DEFAULT_CONFIG_FILE,
        env = "MANIFEST_RESOLVER_CONFIG"
    )]
    pub config: PathBuf,

    /// Java-style properties file merged into the declared properties.
    ///
    /// Entries from the file replace those declared in the project
    /// description.
    #[arg(short, long, value_name = "FILE")]
    pub properties: Option<PathBuf>,

    /// System property definition (repeatable), e.g. `-D BUILD_ID=42`.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,
}

impl SourceArgs {
    /// Load the project and take the environment snapshot for this run.
    pub fn load(&self) -> Result<(Project, EnvironmentSnapshot)> {
        let mut project = config::from_file(&self.config).with_context(|| {
            format!(
                "Failed to load project description from {}",
                self.config.display()
            )
        })?;

        if let Some(path) = &self.properties {
            config::load_properties_file(&mut project, path)
                .with_context(|| format!("Failed to load properties from {}", path.display()))?;
        }

        let mut system_properties = AttributeMap::new();
        for definition in &self.defines {
            let (key, value) = config::parse_definition(definition)?;
            system_properties.insert(key, value);
        }

        Ok((project, EnvironmentSnapshot::capture(system_properties)))
    }
}
