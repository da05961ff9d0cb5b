//! # Manifest Resolver Library
//!
//! Resolves the attributes written onto archive manifests (`jar`/`war`) from
//! several overlapping sources, and the second attribute set used to patch
//! archives after they were built. The `manifest-resolver` binary is a thin
//! wrapper around this crate.
//!
//! ## Quick Example
//!
//! ```
//! use manifest_resolver::config;
//! use manifest_resolver::environment::{EnvironmentSnapshot, SystemClock};
//! use manifest_resolver::resolver::resolve;
//!
//! let project = config::parse(r#"
//! project:
//!   name: viewer
//!   version: "2.0"
//!   plugins: [java]
//!   properties:
//!     manifest.Implementation-Title: "${PROP_PRODUCT_NAME} ${PROP_PRODUCT_VERSION}"
//! "#).unwrap();
//!
//! let env = EnvironmentSnapshot::new(Default::default(), Default::default());
//! let resolution = resolve(&project, &SystemClock, &env).unwrap();
//! assert_eq!(
//!     resolution.attributes.get("Implementation-Title"),
//!     Some("viewer 2.0")
//! );
//! ```
//!
//! ## Sources and Precedence
//!
//! - **Computed defaults (`defaults`)**: host facts, user, host name and
//!   timestamps. They seed the substitution mapping.
//! - **Extension (`extension`)**: an optional named table of product
//!   metadata, looked up over the current and root scopes.
//! - **Declared properties (`properties`)**: `manifest.`-prefixed entries
//!   override both of the above; a blank value suppresses an attribute.
//! - **Overrides (`overrides`)**: environment variables and system
//!   properties with the same prefix win over everything.
//!
//! ## Execution Flow
//!
//! [`resolver::resolve`] checks its precondition, looks up the extension,
//! runs every recognized key through its policy, applies the released gate,
//! appends the remaining declarations, applies overrides and finally runs
//! placeholder substitution (`substitution`). When patching is enabled the
//! version patch policy (`version_patch`) runs and the patched set is
//! resolved; `archive` then merges it into built archives.

pub mod archive;
pub mod attributes;
pub mod config;
pub mod defaults;
pub mod environment;
pub mod error;
pub mod extension;
pub mod keys;
pub mod output;
pub mod overrides;
pub mod project;
pub mod properties;
pub mod resolver;
pub mod substitution;
pub mod version_patch;

#[cfg(test)]
mod substitution_proptest;
