//! # Extension Lookup
//!
//! A build may carry a named extension, a flat map with product metadata
//! (`version`, `rc`, `released`, `udi_eu`, `udi_usa`, `vendor`). Which
//! extension applies is decided by a fixed, ordered list of candidates:
//!
//! 1. the override name (property `plugins.manifest.properties.differentExtension`,
//!    read from the current scope, falling back to the root scope) on the
//!    current scope;
//! 2. the current scope's own name on the current scope;
//! 3. for sub-projects only: the override name on the root scope;
//! 4. for sub-projects only: the root scope's own name on the root scope.
//!
//! The first candidate that names an existing extension wins. When none does,
//! resolution carries on without an extension and the caller receives
//! diagnostics describing what will be missing.

use log::warn;

use crate::project::{Extension, Project, Scope};
use crate::properties::KEY_EXTENSION;

/// Which scope a candidate is looked up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeLevel {
    Current,
    Root,
}

/// A single (scope, name) pair tried during extension lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCandidate {
    pub level: ScopeLevel,
    pub name: String,
    /// Whether the name came from the override property rather than a
    /// scope's own name.
    pub overridden: bool,
}

/// Outcome of extension lookup.
#[derive(Debug, Clone, Default)]
pub struct ExtensionLookup {
    pub extension: Option<Extension>,
    /// The candidate that matched, if any.
    pub matched: Option<ExtensionCandidate>,
    /// Non-fatal diagnostics for the caller.
    pub diagnostics: Vec<String>,
}

/// The override name: current scope first, root scope second. A scope that
/// declares the property with a blank value still stops the search.
pub fn override_name(project: &Project) -> Option<String> {
    let declared_on = |scope: &Scope| {
        scope
            .properties
            .contains_key(KEY_EXTENSION)
            .then(|| scope.properties.raw(KEY_EXTENSION).present().map(str::to_string))
    };

    declared_on(&project.current)
        .or_else(|| project.root.as_ref().and_then(declared_on))
        .flatten()
}

/// Candidates in the order they are tried.
pub fn candidates(project: &Project) -> Vec<ExtensionCandidate> {
    let override_name = override_name(project);
    let mut list = Vec::new();

    let mut push = |level, name: &str, overridden| {
        list.push(ExtensionCandidate {
            level,
            name: name.to_string(),
            overridden,
        })
    };

    if let Some(name) = &override_name {
        push(ScopeLevel::Current, name, true);
    }
    push(ScopeLevel::Current, &project.current.name, false);

    if let Some(root) = &project.root {
        if let Some(name) = &override_name {
            push(ScopeLevel::Root, name, true);
        }
        push(ScopeLevel::Root, &root.name, false);
    }

    list
}

/// Find the extension that applies to the project.
pub fn lookup(project: &Project) -> ExtensionLookup {
    for candidate in candidates(project) {
        let scope = match candidate.level {
            ScopeLevel::Current => Some(&project.current),
            ScopeLevel::Root => project.root.as_ref(),
        };

        if let Some(extension) = scope.and_then(|s| s.extension(&candidate.name)) {
            return ExtensionLookup {
                extension: Some(extension.clone()),
                matched: Some(candidate),
                diagnostics: Vec::new(),
            };
        }
    }

    let diagnostics = missing_extension_diagnostics(project);
    for message in &diagnostics {
        warn!("{}", message);
    }

    ExtensionLookup {
        extension: None,
        matched: None,
        diagnostics,
    }
}

fn missing_extension_diagnostics(project: &Project) -> Vec<String> {
    vec![
        format!(
            "No (root) project extension was found. Check the property '{}' if it is set, \
             otherwise no extension named after the (root) project exists.",
            KEY_EXTENSION
        ),
        format!(
            "The optional extension properties 'rc', 'released', 'udi_eu', 'udi_usa' and \
             'vendor' won't be available. The extension property 'version' will be replaced \
             with '{}' (project version).",
            project.current.version
        ),
    ]
}
