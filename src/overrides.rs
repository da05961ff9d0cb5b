//! # Override Layer
//!
//! Environment variables and system properties named `<prefix><KEY>` replace
//! or inject attribute `KEY`. Environment variables win over system
//! properties for the same key.
//!
//! Keys already present keep their position. New keys are appended, those
//! coming from environment variables first.

use log::debug;

use crate::attributes::AttributeMap;
use crate::environment::EnvironmentSnapshot;

fn strip_prefixed(source: &AttributeMap, prefix: &str) -> AttributeMap {
    source
        .iter()
        .filter_map(|(key, value)| key.strip_prefix(prefix).map(|stripped| (stripped, value)))
        .collect()
}

/// Apply overrides with the given prefix to `target`.
pub fn apply_overrides(target: &mut AttributeMap, prefix: &str, env: &EnvironmentSnapshot) {
    let variables = strip_prefixed(env.variables(), prefix);
    let properties = strip_prefixed(env.system_properties(), prefix);

    let existing: Vec<String> = target.keys().map(str::to_string).collect();
    for key in &existing {
        if let Some(value) = variables.get(key).or_else(|| properties.get(key)) {
            debug!("Overriding attribute '{}' from environment", key);
            target.insert(key.as_str(), value);
        }
    }

    for (key, value) in variables.iter().chain(properties.iter()) {
        if !target.contains_key(key) {
            debug!("Injecting attribute '{}' from environment", key);
            target.insert(key, value);
        }
    }
}
