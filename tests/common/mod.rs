//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common project descriptions, a fixture directory and
//! a fake `jar` tool so that tests do not depend on an installed JDK.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::MINIMAL);
//!     fixture.command().arg("resolve").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common project descriptions for testing.
#[allow(dead_code)]
pub mod configs {
    /// Smallest description that passes the precondition check.
    pub const MINIMAL: &str = r#"
project:
  name: viewer
  version: "1.0"
  plugins: [java]
host:
  tool_version: "7.6"
  runtime_version: "17.0.9"
  runtime_vendor: Temurin
"#;

    /// Description with a full extension and a released product.
    pub const WITH_EXTENSION: &str = r#"
project:
  name: viewer
  version: unspecified
  plugins: [java, war]
  properties:
    manifest.Main-Class: com.example.Main
    manifest.Implementation-Title: "${PROP_PRODUCT_NAME} ${PROP_PRODUCT_VERSION}"
  extensions:
    viewer:
      version: 8.1.0
      rc: RC03
      released: true
      udi_eu: EU-123
      udi_usa: US-456
      vendor: VISUS
"#;

    /// Description with archive and version patching enabled.
    pub const PATCHING: &str = r#"
project:
  name: viewer
  version: "1.0"
  plugins: [java]
  properties:
    plugins.manifest.properties.patchArchives: true
    plugins.manifest.properties.patchVersion: true
    patched.manifest.Patched-By: "${PROP_BUILD_USER}"
"#;

    /// Description without the packaging toolchain.
    pub const NO_JAVA: &str = r#"
project:
  name: docs
  version: "1.0"
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "project: [unclosed";
}

/// A test fixture that provides a temporary directory with a project
/// description.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `manifest.yaml` project description with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("manifest.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Install a fake `jar` tool that records its arguments and the staged
    /// manifest into `jar.log`, then exits with `exit_code`.
    #[cfg(unix)]
    pub fn with_fake_jar(self, exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho \"$@\" >> jar.log\ncat \"$3\" >> jar.log\nexit {}\n",
            exit_code
        );
        let path = self.temp_dir.path().join("fake-jar");
        std::fs::write(&path, script).expect("Failed to write fake jar");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake jar executable");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("manifest.yaml")
    }

    /// Get the path to the fake `jar` tool.
    pub fn fake_jar_path(&self) -> PathBuf {
        self.temp_dir.path().join("fake-jar")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory, with a
    /// predictable environment: fixed user and host, no CI signals and no
    /// stray overrides.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("manifest-resolver");
        cmd.current_dir(self.path())
            .env("USER", "tester")
            .env("HOSTNAME", "ci-box")
            .env("NO_COLOR", "1")
            .env_remove("TICKET_ID")
            .env_remove("BUILD_ID")
            .env_remove("MANIFEST_RESOLVER_CONFIG")
            .env_remove("MANIFEST_RESOLVER_JAR")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config(configs::MINIMAL);
        assert!(fixture.config_path().exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        let configs = [
            configs::MINIMAL,
            configs::WITH_EXTENSION,
            configs::PATCHING,
            configs::NO_JAVA,
        ];

        for config in configs {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
