//! # Project Description
//!
//! Parses the YAML project description (`manifest.yaml` by default) into a
//! [`Project`]. A description names the current scope, optionally the root
//! scope of a multi-project build, and optionally host facts:
//!
//! ```yaml
//! project:
//!   name: viewer
//!   version: 8.1.0
//!   plugins: [java]
//!   properties:
//!     manifest.PROP_VENDOR_NAME: ""
//!     plugins.manifest.properties.patchArchives: true
//!   extensions:
//!     viewer:
//!       rc: RC02
//!       released: false
//! root:
//!   name: suite
//! host:
//!   tool_version: "7.6"
//! ```
//!
//! Property and extension values may be strings, integers or booleans; they
//! are stringified on load. Unquoted floating point numbers are rejected
//! since `1.10` would silently become `1.1`. `null` is kept as a
//! declared-but-empty value. Key order is preserved.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::project::{Extension, HostInfo, Project, Scope};
use crate::properties::DeclaredProperties;

/// Default file name of the project description.
pub const DEFAULT_CONFIG_FILE: &str = "manifest.yaml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectFile {
    project: ScopeConfig,
    #[serde(default)]
    root: Option<ScopeConfig>,
    #[serde(default)]
    host: Option<HostConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScopeConfig {
    name: String,
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    plugins: Vec<String>,
    #[serde(default)]
    properties: Mapping,
    #[serde(default)]
    extensions: Mapping,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct HostConfig {
    tool_version: Option<String>,
    runtime_version: Option<String>,
    runtime_vendor: Option<String>,
}

/// Parse a project description from YAML.
pub fn parse(yaml_content: &str) -> Result<Project> {
    let file: ProjectFile = serde_yaml::from_str(yaml_content).map_err(Error::Yaml)?;

    let current = convert_scope(file.project)?;
    let root = file.root.map(convert_scope).transpose()?;

    let mut host = HostInfo::default();
    if let Some(config) = file.host {
        if let Some(v) = config.tool_version {
            host.tool_version = v;
        }
        if let Some(v) = config.runtime_version {
            host.runtime_version = v;
        }
        if let Some(v) = config.runtime_vendor {
            host.runtime_vendor = v;
        }
    }

    Ok(Project { current, root, host })
}

/// Parse a project description from a file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Project> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Merge a Java-style properties file into the current scope's declared
/// properties.
pub fn load_properties_file<P: AsRef<Path>>(project: &mut Project, path: P) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    project.current.properties.merge_properties_str(&content)
}

/// Split a `KEY=VALUE` definition. The value may itself contain `=`.
pub fn parse_definition(definition: &str) -> Result<(String, String)> {
    match definition.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidDefinition {
            definition: definition.to_string(),
        }),
    }
}

fn convert_scope(config: ScopeConfig) -> Result<Scope> {
    let mut scope = Scope::named(config.name);
    if let Some(version) = scalar_to_string(&config.version.unwrap_or(Value::Null), "version")? {
        if !version.trim().is_empty() {
            scope.version = version;
        }
    }
    scope.plugins = config.plugins;
    scope.properties = convert_table(&config.properties, "properties")?;

    for (name, values) in &config.extensions {
        let name = key_to_string(name, "extensions")?;
        let values = match values {
            Value::Mapping(map) => convert_table(map, &name)?,
            Value::Null => DeclaredProperties::new(),
            _ => {
                return Err(Error::ConfigParse {
                    message: format!("Extension '{}' must be a mapping", name),
                    hint: Some(format!("write it as `{}: {{ version: 1.0 }}`", name)),
                })
            }
        };
        scope.add_extension(name, Extension::new(values));
    }

    Ok(scope)
}

fn convert_table(map: &Mapping, context: &str) -> Result<DeclaredProperties> {
    let mut table = DeclaredProperties::new();
    for (key, value) in map {
        let key = key_to_string(key, context)?;
        let value = scalar_to_string(value, &key)?;
        table.insert(key, value);
    }
    Ok(table)
}

fn key_to_string(key: &Value, context: &str) -> Result<String> {
    scalar_to_string(key, context)?.ok_or_else(|| Error::ConfigParse {
        message: format!("Null key in '{}'", context),
        hint: None,
    })
}

fn scalar_to_string(value: &Value, context: &str) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) if n.is_f64() => Err(Error::ConfigParse {
            message: format!("Value of '{}' is a floating point number", context),
            hint: Some(format!(
                "quote it to keep the text as written; unquoted it reads as {}",
                n
            )),
        }),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value, context),
        Value::Sequence(_) | Value::Mapping(_) => Err(Error::ConfigParse {
            message: format!("Value of '{}' must be a scalar", context),
            hint: Some("quote the value to keep it as a single string".to_string()),
        }),
    }
}
