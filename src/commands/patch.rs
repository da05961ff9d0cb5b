//! # Patch Command Implementation
//!
//! Resolves the patched attribute set and merges it into already built
//! archives with the `jar` tool. Archives that do not exist are skipped with
//! a warning; the first archiver failure aborts the command.

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use manifest_resolver::archive::{patch_archive, JarArchiver, PatchOutcome};
use manifest_resolver::environment::SystemClock;
use manifest_resolver::output::{emoji, OutputConfig};
use manifest_resolver::resolver::resolve;

use super::SourceArgs;

/// Patch the manifests of built archives
#[derive(Args, Debug)]
pub struct PatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// The `jar` executable used to update archives.
    #[arg(long, value_name = "PATH", default_value = "jar", env = "MANIFEST_RESOLVER_JAR")]
    pub jar: PathBuf,

    /// Archives to patch.
    #[arg(value_name = "ARCHIVE", required = true)]
    pub archives: Vec<PathBuf>,
}

/// Execute the `patch` command.
pub fn execute(args: PatchArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let (project, env) = args.source.load()?;
    let resolution = resolve(&project, &SystemClock, &env)?;

    let Some(patched) = resolution.patched else {
        bail!(
            "Archive patching is disabled for '{}'. Set \
             'plugins.manifest.properties.patchArchives' to true.",
            project.current.name
        );
    };

    let archiver = JarArchiver::new(&args.jar);
    let mut patched_count = 0;
    for archive in &args.archives {
        match patch_archive(archive, &patched, &archiver)? {
            PatchOutcome::Patched => {
                patched_count += 1;
                println!("{} Patched {}", emoji(&out, "✅", "[OK]"), archive.display());
            }
            PatchOutcome::Skipped => {
                println!(
                    "{} Skipped {} (not found)",
                    emoji(&out, "⏭️", "[SKIP]"),
                    archive.display()
                );
            }
        }
    }

    println!(
        "{} {} of {} archive(s) patched",
        emoji(&out, "📦", "[DONE]"),
        patched_count,
        args.archives.len()
    );
    Ok(())
}
