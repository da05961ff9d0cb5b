//! Computed default values for manifest attributes.
//!
//! These seed the substitution mapping at the start of every pass, so any
//! attribute can reference `${PROP_BUILD_HOST}` and friends whether or not
//! the attribute itself ends up in the manifest.

use crate::attributes::SubstitutionMapping;
use crate::environment::{Clock, EnvironmentSnapshot};
use crate::keys::*;
use crate::project::Project;

/// Value of the `Permissions` attribute unless overridden.
pub const DEFAULT_PERMISSIONS: &str = "all-permissions";
/// Value of the `Codebase` attribute unless overridden.
pub const DEFAULT_CODEBASE: &str = "*";

/// Build the default substitution mapping for a project.
///
/// Time-based entries are all derived from one reading of the clock.
pub fn computed_mapping(
    project: &Project,
    clock: &dyn Clock,
    env: &EnvironmentSnapshot,
) -> SubstitutionMapping {
    let now = clock.now();
    let today = now.format("%Y-%m-%d").to_string();
    let host = &project.host;
    let name = project.current.name.as_str();

    let mut mapping = SubstitutionMapping::new();
    mapping.insert(GRADLE_VERSION, host.tool_version.as_str());
    mapping.insert(
        CREATED_BY,
        format!("{} ({})", host.runtime_version, host.runtime_vendor),
    );
    mapping.insert(PERMISSIONS, DEFAULT_PERMISSIONS);
    mapping.insert(CODEBASE, DEFAULT_CODEBASE);
    mapping.insert(APPLICATION_NAME, name);
    mapping.insert(PROP_PRODUCT_NAME, name);
    mapping.insert(PROP_PRODUCT_VERSION, project.current.version.as_str());
    mapping.insert(PROP_RELEASE_DATE, today.as_str());
    mapping.insert(PROP_RELEASE_DATE_YYMMDD, now.format("%y%m%d").to_string());
    mapping.insert(PROP_BUILD_USER, env.user_name());
    mapping.insert(PROP_BUILD_HOST, env.host_name());
    mapping.insert(PROP_BUILD_DATE, today);
    mapping.insert(PROP_BUILD_TIME, now.format("%H:%M").to_string());
    mapping
}
