//! # Version Patch Policy
//!
//! Appends the ticket id and build id of a CI build to the product version
//! held in the substitution mapping, producing e.g. `1.0.JIRA-1-42`.
//!
//! Patching is skipped entirely when the feature flag is off, when the
//! version is still the `unspecified` sentinel, or when the release
//! candidate tag has the finalized form `RC` followed by exactly two digits.
//! The resolved primary attributes are never touched.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::attributes::SubstitutionMapping;
use crate::environment::{EnvironmentSnapshot, SYS_BUILD, SYS_TICKET};
use crate::keys::{PROP_PRODUCT_RC, PROP_PRODUCT_VERSION};
use crate::project::UNSPECIFIED_VERSION;

fn release_candidate_regex() -> &'static Regex {
    static RC: OnceLock<Regex> = OnceLock::new();
    RC.get_or_init(|| Regex::new(r"^RC\d{2}$").expect("release candidate regex is valid"))
}

/// Whether a release candidate tag marks a finalized build (`RC01`, `RC12`).
pub fn is_finalized_release_candidate(tag: &str) -> bool {
    release_candidate_regex().is_match(tag)
}

/// Whether a version is missing or still the `unspecified` sentinel.
pub fn is_unspecified(version: &str) -> bool {
    let version = version.trim();
    version.is_empty() || version == UNSPECIFIED_VERSION
}

/// Inputs of a single version patch decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPatchState {
    pub base_version: String,
    pub ticket_id: Option<String>,
    pub build_id: Option<String>,
    pub release_candidate: Option<String>,
    pub patch_enabled: bool,
}

impl VersionPatchState {
    /// Gather the state from the mapping and the external signals.
    ///
    /// Signals that are defined but blank count as absent.
    pub fn from_mapping(
        mapping: &SubstitutionMapping,
        patch_enabled: bool,
        env: &EnvironmentSnapshot,
    ) -> Self {
        let signal = |name: &str| {
            env.signal(name)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        };

        Self {
            base_version: mapping.get(PROP_PRODUCT_VERSION).unwrap_or_default().to_string(),
            ticket_id: signal(SYS_TICKET),
            build_id: signal(SYS_BUILD),
            release_candidate: mapping.get(PROP_PRODUCT_RC).map(str::to_string),
            patch_enabled,
        }
    }

    pub fn is_disabled(&self) -> bool {
        !self.patch_enabled
            || is_unspecified(&self.base_version)
            || self
                .release_candidate
                .as_deref()
                .is_some_and(is_finalized_release_candidate)
    }

    /// The version after applying the policy.
    pub fn patched_version(&self) -> String {
        let mut version = self.base_version.clone();
        if self.is_disabled() {
            return version;
        }
        if let Some(ticket) = &self.ticket_id {
            version.push('.');
            version.push_str(ticket);
        }
        if let Some(build) = &self.build_id {
            version.push('-');
            version.push_str(build);
        }
        version
    }
}

/// Run the policy against the mapping, rewriting `PROP_PRODUCT_VERSION` in
/// place. Returns whether the version changed.
pub fn patch_version(
    mapping: &mut SubstitutionMapping,
    patch_enabled: bool,
    env: &EnvironmentSnapshot,
) -> bool {
    let state = VersionPatchState::from_mapping(mapping, patch_enabled, env);
    let patched = state.patched_version();
    if patched == state.base_version {
        return false;
    }

    debug!("Patching product version '{}' to '{}'", state.base_version, patched);
    mapping.insert(PROP_PRODUCT_VERSION, patched);
    true
}
