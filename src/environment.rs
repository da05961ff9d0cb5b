//! # Ambient Capabilities
//!
//! The resolver never reads process state on its own. Time comes from a
//! [`Clock`], environment variables and system properties come from an
//! [`EnvironmentSnapshot`] captured once at the start of a pass. Tests supply
//! fixed values for both.
//!
//! "System properties" are `KEY=VALUE` definitions handed to the process
//! explicitly (the CLI's repeated `-D` flag), the counterpart of JVM system
//! properties in the build tools whose manifests this crate produces.

use chrono::{Local, NaiveDateTime};

use crate::attributes::AttributeMap;

/// Name of the ticket id signal used by the version patch policy.
pub const SYS_TICKET: &str = "TICKET_ID";
/// Name of the build id signal used by the version patch policy.
pub const SYS_BUILD: &str = "BUILD_ID";

/// Source of the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Immutable view of environment variables and system properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    variables: AttributeMap,
    system_properties: AttributeMap,
}

impl EnvironmentSnapshot {
    /// Build a snapshot from explicit values.
    pub fn new(variables: AttributeMap, system_properties: AttributeMap) -> Self {
        Self {
            variables,
            system_properties,
        }
    }

    /// Capture the current process environment together with the given
    /// system properties. Variables that are not valid unicode are skipped.
    ///
    /// Process variables are sorted by name so that injected overrides land
    /// in a stable order.
    pub fn capture(system_properties: AttributeMap) -> Self {
        let mut vars: Vec<(String, String)> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        vars.sort();
        Self {
            variables: vars.into_iter().collect(),
            system_properties,
        }
    }

    pub fn variables(&self) -> &AttributeMap {
        &self.variables
    }

    pub fn system_properties(&self) -> &AttributeMap {
        &self.system_properties
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.variables.get(name)
    }

    pub fn system_property(&self, name: &str) -> Option<&str> {
        self.system_properties.get(name)
    }

    /// Look up an external signal: environment variable first, then system
    /// property.
    pub fn signal(&self, name: &str) -> Option<&str> {
        self.var(name).or_else(|| self.system_property(name))
    }

    /// Name of the user running the build.
    pub fn user_name(&self) -> String {
        self.var("USER")
            .or_else(|| self.var("USERNAME"))
            .or_else(|| self.system_property("user.name"))
            .unwrap_or("unknown")
            .to_string()
    }

    /// Name of the machine running the build.
    pub fn host_name(&self) -> String {
        self.var("HOSTNAME")
            .or_else(|| self.var("COMPUTERNAME"))
            .or_else(|| self.system_property("host.name"))
            .map(str::to_string)
            .or_else(read_etc_hostname)
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[cfg(unix)]
fn read_etc_hostname() -> Option<String> {
    std::fs::read_to_string("/etc/hostname")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(not(unix))]
fn read_etc_hostname() -> Option<String> {
    None
}
