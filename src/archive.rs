//! # Archive Patching
//!
//! Rewrites the manifest of an already built archive with the patched
//! attribute set. The manifest is staged as `META-INF/MANIFEST.MF` next to
//! the archive and merged in by an [`Archiver`], by default the JDK's `jar`
//! tool (`jar ufm <archive> META-INF/MANIFEST.MF`).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::attributes::AttributeMap;
use crate::error::{Error, Result};

/// Manifest location relative to the archive's directory.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Merges a staged manifest file into an archive.
pub trait Archiver {
    /// Update `archive` (a file name inside `working_dir`) with the manifest
    /// at `manifest` (relative to `working_dir`).
    ///
    /// Returns the exit code, or `None` when the process did not exit
    /// normally.
    fn update_manifest(&self, working_dir: &Path, archive: &str, manifest: &str)
        -> Result<Option<i32>>;
}

/// Archiver running the `jar` executable.
#[derive(Debug, Clone)]
pub struct JarArchiver {
    program: PathBuf,
}

impl JarArchiver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for JarArchiver {
    fn default() -> Self {
        Self::new("jar")
    }
}

impl Archiver for JarArchiver {
    fn update_manifest(
        &self,
        working_dir: &Path,
        archive: &str,
        manifest: &str,
    ) -> Result<Option<i32>> {
        let status = Command::new(&self.program)
            .args(["ufm", archive, manifest])
            .current_dir(working_dir)
            .status()
            .map_err(|e| Error::ArchiverLaunch {
                command: self.program.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(status.code())
    }
}

/// What happened to a single archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched,
    /// The archive does not exist (yet).
    Skipped,
}

/// Patch one archive with the given attributes.
///
/// A missing archive is skipped with a warning. The staged manifest is
/// removed whether or not the archiver succeeded.
pub fn patch_archive(
    archive: &Path,
    attributes: &AttributeMap,
    archiver: &dyn Archiver,
) -> Result<PatchOutcome> {
    if !archive.is_file() {
        warn!(
            "The archive '{}' does not exist, skipping the patch process for it",
            archive.display()
        );
        return Ok(PatchOutcome::Skipped);
    }

    let file_name = archive
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::ConfigParse {
            message: format!("'{}' does not name an archive file", archive.display()),
            hint: None,
        })?;
    let working_dir = match archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let manifest_file = working_dir.join(MANIFEST_PATH);
    if let Some(meta_inf) = manifest_file.parent() {
        fs::create_dir_all(meta_inf)?;
    }
    fs::write(&manifest_file, attributes.to_manifest_string())?;

    let result = archiver.update_manifest(&working_dir, &file_name, MANIFEST_PATH);
    fs::remove_file(&manifest_file)?;

    match result? {
        Some(0) => {
            info!("Patched archive '{}'", archive.display());
            Ok(PatchOutcome::Patched)
        }
        exit_code => Err(Error::ArchivePatch {
            archive: archive.display().to_string(),
            exit_code,
        }),
    }
}
