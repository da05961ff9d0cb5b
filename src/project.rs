//! # Project Model
//!
//! The in-memory description of the build being resolved: the current scope
//! (the project whose archives get the manifest), an optional root scope for
//! multi-project builds, and the host facts that feed computed defaults.

use crate::properties::DeclaredProperties;

/// Version reported by build hosts for projects without a version.
pub const UNSPECIFIED_VERSION: &str = "unspecified";

/// Plugin that provides the archive packaging toolchain.
pub const PLUGIN_JAVA: &str = "java";
/// Plugin that adds web archives.
pub const PLUGIN_WAR: &str = "war";

/// A named extension: a flat map of sub-keys to scalar values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    values: DeclaredProperties,
}

impl Extension {
    pub fn new(values: DeclaredProperties) -> Self {
        Self { values }
    }

    /// The non-blank value of a sub-key.
    pub fn value(&self, sub_key: &str) -> Option<&str> {
        self.values.raw(sub_key).present()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One level of the project hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub name: String,
    pub version: String,
    pub plugins: Vec<String>,
    pub properties: DeclaredProperties,
    pub extensions: Vec<(String, Extension)>,
}

impl Scope {
    /// A scope with the given name, no version and nothing declared.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: UNSPECIFIED_VERSION.to_string(),
            plugins: Vec::new(),
            properties: DeclaredProperties::new(),
            extensions: Vec::new(),
        }
    }

    pub fn has_plugin(&self, plugin: &str) -> bool {
        self.plugins.iter().any(|p| p == plugin)
    }

    pub fn extension(&self, name: &str) -> Option<&Extension> {
        self.extensions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, extension)| extension)
    }

    /// Register an extension under a name, replacing any previous one.
    pub fn add_extension(&mut self, name: impl Into<String>, extension: Extension) {
        let name = name.into();
        match self.extensions.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = extension,
            None => self.extensions.push((name, extension)),
        }
    }
}

/// Facts about the build host used for computed defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub tool_version: String,
    pub runtime_version: String,
    pub runtime_vendor: String,
}

impl Default for HostInfo {
    fn default() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            runtime_version: "unknown".to_string(),
            runtime_vendor: "unknown".to_string(),
        }
    }
}

/// Kind of archive a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    Jar,
    War,
}

/// The project a resolution pass runs for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub current: Scope,
    /// Root of a multi-project build; `None` when `current` is the root.
    pub root: Option<Scope>,
    pub host: HostInfo,
}

impl Project {
    /// A single-project build
    pub fn single(current: Scope) -> Self {
        Self {
            current,
            root: None,
            host: HostInfo::default(),
        }
    }

    /// Whether the packaging toolchain is applied, directly or through the
    /// `war` plugin which brings it along.
    pub fn has_packaging_toolchain(&self) -> bool {
        self.current.has_plugin(PLUGIN_JAVA) || self.current.has_plugin(PLUGIN_WAR)
    }

    /// Properties visible to the current scope: those of the root scope,
    /// overlaid with the current scope's own declarations.
    pub fn effective_properties(&self) -> DeclaredProperties {
        match &self.root {
            Some(root) => {
                let mut properties = root.properties.clone();
                properties.overlay(&self.current.properties);
                properties
            }
            None => self.current.properties.clone(),
        }
    }

    /// Archive kinds produced, derived from the applied plugins.
    pub fn archive_kinds(&self) -> Vec<ArchiveKind> {
        let mut kinds = Vec::new();
        if self.has_packaging_toolchain() {
            kinds.push(ArchiveKind::Jar);
        }
        if self.current.has_plugin(PLUGIN_WAR) {
            kinds.push(ArchiveKind::War);
        }
        kinds
    }
}
