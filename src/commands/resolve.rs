//! # Resolve Command Implementation
//!
//! Runs a resolution pass and prints the resulting attributes. By default
//! the attributes of a `jar` manifest are printed; `--archive-kind war`
//! prints those of a web archive and `--patched` prints the set used to
//! patch built archives.
//!
//! Diagnostics (such as a missing extension) are logged to stderr, so stdout
//! only ever carries the attributes.

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};

use manifest_resolver::environment::SystemClock;
use manifest_resolver::output::{render_attributes, AttributeFormat, OutputConfig};
use manifest_resolver::project::ArchiveKind;
use manifest_resolver::resolver::resolve;

use super::SourceArgs;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Manifest,
    Json,
    Yaml,
}

impl From<FormatArg> for AttributeFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Manifest => AttributeFormat::Manifest,
            FormatArg::Json => AttributeFormat::Json,
            FormatArg::Yaml => AttributeFormat::Yaml,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKindArg {
    Jar,
    War,
}

impl From<ArchiveKindArg> for ArchiveKind {
    fn from(value: ArchiveKindArg) -> Self {
        match value {
            ArchiveKindArg::Jar => ArchiveKind::Jar,
            ArchiveKindArg::War => ArchiveKind::War,
        }
    }
}

/// Resolve and print manifest attributes
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "manifest")]
    pub format: FormatArg,

    /// Print the attributes for this kind of archive.
    #[arg(long, value_enum, default_value = "jar", conflicts_with = "patched")]
    pub archive_kind: ArchiveKindArg,

    /// Print the patched attribute set instead of the primary one.
    #[arg(long)]
    pub patched: bool,
}

/// Execute the `resolve` command.
pub fn execute(args: ResolveArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let (project, env) = args.source.load()?;
    let resolution = resolve(&project, &SystemClock, &env)?;

    let attributes = if args.patched {
        match resolution.patched {
            Some(patched) => patched,
            None => bail!(
                "Archive patching is disabled. Set 'plugins.manifest.properties.patchArchives' \
                 to true to resolve the patched attributes."
            ),
        }
    } else {
        let kind = ArchiveKind::from(args.archive_kind);
        if !resolution.archive_kinds.contains(&kind) {
            bail!(
                "Project '{}' does not produce {:?} archives",
                project.current.name,
                kind
            );
        }
        resolution.attributes_for(kind)
    };

    print!("{}", render_attributes(&attributes, args.format.into(), &out)?);
    Ok(())
}
