//! # Attribute Resolution
//!
//! A resolution pass turns a [`Project`] into the attributes of its archive
//! manifests. Every recognized attribute goes through one of three policies:
//!
//! - **easy**: declared property, else the computed default. A blank
//!   declaration suppresses the attribute.
//! - **default entry**: declared property, else the extension value. A blank
//!   declaration suppresses the attribute but the extension value still
//!   lands in the substitution mapping.
//! - **version**: like default entry, reading the extension's `version`
//!   sub-key, with the project version as a last resort unless it is
//!   `unspecified`.
//!
//! Each policy consumes its key from the declared table, so only unrecognized
//! declarations remain to be appended verbatim at the end. After that the
//! override layer and placeholder substitution run over the whole set.
//!
//! When archive patching is enabled, a second "patched" set is resolved from
//! the `patched.manifest.` namespace after the version patch policy ran on
//! the mapping.

use log::{debug, info};

use crate::attributes::{ResolvedAttributes, SubstitutionMapping};
use crate::defaults::computed_mapping;
use crate::environment::{Clock, EnvironmentSnapshot};
use crate::error::{Error, Result};
use crate::extension::{self, ExtensionLookup};
use crate::keys::*;
use crate::overrides::apply_overrides;
use crate::project::{ArchiveKind, Extension, Project};
use crate::properties::{
    is_true, DeclaredProperties, RawValue, KEY_PATCH, KEY_VERSION, PREFIX_DEFAULT, PREFIX_PATCHED,
};
use crate::substitution::substitute;
use crate::version_patch::{is_unspecified, patch_version};

/// Everything a resolution pass produces.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Attributes for the primary manifest of every archive.
    pub attributes: ResolvedAttributes,
    /// Attributes used to patch built archives, when patching is enabled.
    pub patched: Option<ResolvedAttributes>,
    /// The substitution mapping as it stood at the end of the pass.
    pub mapping: SubstitutionMapping,
    pub extension: ExtensionLookup,
    pub archive_kinds: Vec<ArchiveKind>,
}

impl Resolution {
    /// Attributes to write onto an archive of the given kind. Web archives
    /// never carry a `Main-Class`.
    pub fn attributes_for(&self, kind: ArchiveKind) -> ResolvedAttributes {
        let mut attributes = self.attributes.clone();
        if kind == ArchiveKind::War {
            attributes.remove(MAIN_CLASS);
        }
        attributes
    }

    /// Non-fatal diagnostics raised during the pass.
    pub fn diagnostics(&self) -> &[String] {
        &self.extension.diagnostics
    }
}

/// Resolve an attribute from declared properties and a default.
pub fn resolve_easy(
    key: &str,
    default: &str,
    attributes: &mut ResolvedAttributes,
    declared: &mut DeclaredProperties,
) {
    match declared.raw(key) {
        RawValue::Absent => {
            attributes.insert(key, default);
        }
        RawValue::Present(value) => {
            attributes.insert(key, value);
        }
        RawValue::Blank => debug!("Attribute '{}' suppressed by blank declaration", key),
    }
    declared.remove(key);
}

/// Resolve an attribute backed by an extension sub-key.
pub fn resolve_default_entry(
    key: &str,
    sub_key: &str,
    extension: Option<&Extension>,
    attributes: &mut ResolvedAttributes,
    mapping: &mut SubstitutionMapping,
    declared: &mut DeclaredProperties,
) {
    let from_extension = extension.and_then(|e| e.value(sub_key));
    apply_tiers(key, from_extension, None, attributes, mapping, declared);
}

/// Resolve the product version attribute.
///
/// `host_version` is only used when neither the extension nor the declared
/// table has anything to say, and only when it is a real version.
pub fn resolve_version(
    key: &str,
    host_version: &str,
    extension: Option<&Extension>,
    attributes: &mut ResolvedAttributes,
    mapping: &mut SubstitutionMapping,
    declared: &mut DeclaredProperties,
) {
    let from_extension = extension.and_then(|e| e.value(EXT_VERSION));
    let fallback = Some(host_version).filter(|v| !is_unspecified(v));
    apply_tiers(key, from_extension, fallback, attributes, mapping, declared);
}

fn apply_tiers(
    key: &str,
    from_extension: Option<&str>,
    fallback: Option<&str>,
    attributes: &mut ResolvedAttributes,
    mapping: &mut SubstitutionMapping,
    declared: &mut DeclaredProperties,
) {
    match (declared.raw(key), from_extension) {
        (RawValue::Present(value), _) => {
            attributes.insert(key, value);
            mapping.insert(key, value);
        }
        (RawValue::Absent, Some(value)) => {
            attributes.insert(key, value);
            mapping.insert(key, value);
        }
        (RawValue::Blank, Some(value)) => {
            debug!("Attribute '{}' suppressed, kept in mapping", key);
            mapping.insert(key, value);
        }
        (RawValue::Absent, None) => match fallback {
            Some(value) => {
                attributes.insert(key, value);
                mapping.insert(key, value);
            }
            None => debug!("Attribute '{}' has no source", key),
        },
        (RawValue::Blank, None) => debug!("Attribute '{}' suppressed by blank declaration", key),
    }
    declared.remove(key);
}

/// Add the release-only attributes when `PROP_PRODUCT_RELEASED` resolved to
/// `true`. Returns whether the gate opened.
pub fn apply_released_gate(
    attributes: &mut ResolvedAttributes,
    mapping: &SubstitutionMapping,
    declared: &mut DeclaredProperties,
) -> bool {
    if !attributes.get(PROP_PRODUCT_RELEASED).is_some_and(is_true) {
        return false;
    }

    for key in RELEASED_KEYS {
        resolve_easy(key, mapping.get(key).unwrap_or_default(), attributes, declared);
    }
    true
}

/// Append the declarations no policy consumed, skipping blank ones.
pub fn append_remaining(attributes: &mut ResolvedAttributes, declared: &DeclaredProperties) {
    for (key, value) in declared.non_blank() {
        attributes.insert(key, value);
    }
}

/// Run a full resolution pass.
///
/// Fails before touching any attribute when the project cannot produce
/// archives.
pub fn resolve(
    project: &Project,
    clock: &dyn Clock,
    env: &EnvironmentSnapshot,
) -> Result<Resolution> {
    if !project.has_packaging_toolchain() {
        return Err(Error::PreconditionViolation {
            requirement: "java plugin".to_string(),
            message: format!(
                "project '{}' neither applies the java plugin directly nor through the war plugin",
                project.current.name
            ),
        });
    }

    let lookup = extension::lookup(project);
    let extension = lookup.extension.as_ref();
    let mut mapping = computed_mapping(project, clock, env);
    let properties = project.effective_properties();
    let mut declared = properties.prefixed(PREFIX_DEFAULT);
    let mut attributes = ResolvedAttributes::new();

    for key in EASY_KEYS {
        let default = mapping.get(key).unwrap_or_default().to_string();
        resolve_easy(key, &default, &mut attributes, &mut declared);
    }

    let host_version = project.current.version.clone();
    resolve_version(
        PROP_PRODUCT_VERSION,
        &host_version,
        extension,
        &mut attributes,
        &mut mapping,
        &mut declared,
    );

    for (key, sub_key) in EXTENSION_KEYS {
        resolve_default_entry(key, sub_key, extension, &mut attributes, &mut mapping, &mut declared);
    }

    if apply_released_gate(&mut attributes, &mapping, &mut declared) {
        debug!("Product is released, release attributes added");
    }

    append_remaining(&mut attributes, &declared);
    apply_overrides(&mut attributes, PREFIX_DEFAULT, env);
    substitute(&mut attributes, &mapping, None);

    let patched = if properties.flag(KEY_PATCH) {
        info!("Archive patching enabled for '{}'", project.current.name);
        Some(resolve_patched(&properties, &attributes, &mut mapping, env))
    } else {
        None
    };

    Ok(Resolution {
        attributes,
        patched,
        mapping,
        extension: lookup,
        archive_kinds: project.archive_kinds(),
    })
}

fn resolve_patched(
    properties: &DeclaredProperties,
    primary: &ResolvedAttributes,
    mapping: &mut SubstitutionMapping,
    env: &EnvironmentSnapshot,
) -> ResolvedAttributes {
    let version_enabled = properties.flag(KEY_VERSION);
    let mut declared = properties.prefixed(PREFIX_PATCHED);
    let mut patched = ResolvedAttributes::new();

    patch_version(mapping, version_enabled, env);
    if version_enabled {
        if let Some(version) = mapping.get(PROP_PRODUCT_VERSION).filter(|v| !is_unspecified(v)) {
            patched.insert(PROP_PRODUCT_VERSION, version);
        }
    }

    for key in PATCHED_KEYS {
        resolve_easy(key, mapping.get(key).unwrap_or_default(), &mut patched, &mut declared);
    }

    append_remaining(&mut patched, &declared);
    apply_overrides(&mut patched, PREFIX_PATCHED, env);
    substitute(&mut patched, mapping, Some(primary));
    patched
}
