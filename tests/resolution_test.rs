//! Integration tests for the resolution pass, driven through project
//! descriptions the way the CLI reads them, with a fixed clock and a fixed
//! environment.

use chrono::NaiveDate;

use manifest_resolver::attributes::AttributeMap;
use manifest_resolver::config;
use manifest_resolver::environment::{EnvironmentSnapshot, FixedClock};
use manifest_resolver::keys::*;
use manifest_resolver::project::ArchiveKind;
use manifest_resolver::resolver::{resolve, Resolution};

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap(),
    )
}

fn env(vars: &[(&str, &str)], props: &[(&str, &str)]) -> EnvironmentSnapshot {
    let mut variables: AttributeMap = [("USER", "tester"), ("HOSTNAME", "box")].into_iter().collect();
    for (key, value) in vars {
        variables.insert(*key, *value);
    }
    EnvironmentSnapshot::new(variables, props.iter().copied().collect())
}

fn run(yaml: &str, env: &EnvironmentSnapshot) -> Resolution {
    let project = config::parse(yaml).expect("valid project description");
    resolve(&project, &clock(), env).expect("resolution succeeds")
}

#[test]
fn test_easy_policy_through_declared_properties() {
    let resolution = run(
        r#"
project:
  name: viewer
  plugins: [java]
  properties:
    manifest.Permissions: sandbox
    manifest.Codebase: ""
"#,
        &env(&[], &[]),
    );

    assert_eq!(resolution.attributes.get(PERMISSIONS), Some("sandbox"));
    assert!(!resolution.attributes.contains_key(CODEBASE));
    assert_eq!(resolution.attributes.get(APPLICATION_NAME), Some("viewer"));
    // the project has no version, so neither does the manifest
    assert!(!resolution.attributes.contains_key(PROP_PRODUCT_VERSION));
}

#[test]
fn test_blank_declaration_keeps_extension_value_substitutable() {
    let resolution = run(
        r#"
project:
  name: viewer
  plugins: [java]
  properties:
    manifest.PROP_UNIQUE_DEVICE_IDENTIFICATION_EU: ""
    manifest.UDI: "udi=${PROP_UNIQUE_DEVICE_IDENTIFICATION_EU}"
  extensions:
    viewer:
      udi_eu: "(01)0123"
"#,
        &env(&[], &[]),
    );

    assert!(!resolution
        .attributes
        .contains_key(PROP_UNIQUE_DEVICE_IDENTIFICATION_EU));
    assert_eq!(
        resolution.mapping.get(PROP_UNIQUE_DEVICE_IDENTIFICATION_EU),
        Some("(01)0123")
    );
    assert_eq!(resolution.attributes.get("UDI"), Some("udi=(01)0123"));
}

#[test]
fn test_substitution_order_referenced_first() {
    let resolution = run(
        r#"
project:
  name: viewer
  plugins: [java]
  properties:
    manifest.B: x
    manifest.A: "${B}"
"#,
        &env(&[], &[]),
    );
    assert_eq!(resolution.attributes.get("A"), Some("x"));
    assert_eq!(resolution.attributes.get("B"), Some("x"));
}

#[test]
fn test_substitution_order_referencing_first() {
    // A is rewritten while B still holds its raw text
    let resolution = run(
        r#"
project:
  name: viewer
  plugins: [java]
  properties:
    manifest.A: "${B}"
    manifest.B: "${PROP_BUILD_HOST}"
"#,
        &env(&[], &[]),
    );
    assert_eq!(resolution.attributes.get("A"), Some("${PROP_BUILD_HOST}"));
    assert_eq!(resolution.attributes.get("B"), Some("box"));
}

#[test]
fn test_unresolved_placeholder_is_kept() {
    let resolution = run(
        r#"
project:
  name: viewer
  plugins: [java]
  properties:
    manifest.A: "${UNKNOWN}"
"#,
        &env(&[], &[]),
    );
    assert_eq!(resolution.attributes.get("A"), Some("${UNKNOWN}"));
}

#[test]
fn test_override_layering() {
    let yaml = r#"
project:
  name: viewer
  plugins: [java]
  properties:
    manifest.start: finish
"#;

    let both = run(
        yaml,
        &env(&[("manifest.start", "motor")], &[("manifest.start", "engine")]),
    );
    assert_eq!(both.attributes.get("start"), Some("motor"));

    let property_only = run(yaml, &env(&[], &[("manifest.start", "engine")]));
    assert_eq!(property_only.attributes.get("start"), Some("engine"));

    let none = run(yaml, &env(&[], &[]));
    assert_eq!(none.attributes.get("start"), Some("finish"));
}

#[test]
fn test_released_gate() {
    let released = run(
        r#"
project:
  name: viewer
  version: "3.0"
  plugins: [java]
  properties:
    manifest.PROP_PRODUCT_RELEASED: "True"
    manifest.PROP_BUILD_TIME: ""
"#,
        &env(&[], &[]),
    );
    let attributes = &released.attributes;
    assert_eq!(attributes.get(PROP_RELEASE_DATE), Some("2024-02-29"));
    assert_eq!(attributes.get(PROP_RELEASE_DATE_YYMMDD), Some("240229"));
    assert_eq!(attributes.get(PROP_BUILD_DATE), Some("2024-02-29"));
    assert_eq!(attributes.get(PROP_BUILD_USER), Some("tester"));
    assert_eq!(attributes.get(PROP_BUILD_HOST), Some("box"));
    assert!(!attributes.contains_key(PROP_BUILD_TIME));

    let unreleased = run(
        r#"
project:
  name: viewer
  version: "3.0"
  plugins: [java]
  extensions:
    viewer:
      released: false
"#,
        &env(&[], &[]),
    );
    for key in RELEASED_KEYS {
        assert!(!unreleased.attributes.contains_key(key), "{}", key);
    }
}

#[test]
fn test_extension_override_name_from_root() {
    let resolution = run(
        r#"
project:
  name: module-a
  plugins: [java]
root:
  name: suite
  properties:
    plugins.manifest.properties.differentExtension: product
  extensions:
    product:
      vendor: Root Vendor
    suite:
      vendor: Suite Vendor
"#,
        &env(&[], &[]),
    );
    assert_eq!(resolution.attributes.get(PROP_VENDOR_NAME), Some("Root Vendor"));
    assert!(resolution.diagnostics().is_empty());
}

const PATCHING: &str = r#"
project:
  name: viewer
  version: "1.0"
  plugins: [java, war]
  properties:
    plugins.manifest.properties.patchArchives: true
    plugins.manifest.properties.patchVersion: true
    manifest.Main-Class: com.example.Main
"#;

#[test]
fn test_version_patch_composition() {
    let resolution = run(
        PATCHING,
        &env(&[("TICKET_ID", "JIRA-1")], &[("BUILD_ID", "42")]),
    );
    let patched = resolution.patched.as_ref().unwrap();
    assert_eq!(patched.get(PROP_PRODUCT_VERSION), Some("1.0.JIRA-1-42"));
    assert!(!patched.contains_key(MAIN_CLASS));
    assert_eq!(resolution.attributes.get(PROP_PRODUCT_VERSION), Some("1.0"));
}

#[test]
fn test_version_patch_skips_finalized_release_candidate() {
    let yaml = format!("{}    manifest.PROP_PRODUCT_RC: RC01\n", PATCHING);
    let resolution = run(
        &yaml,
        &env(&[("TICKET_ID", "JIRA-1"), ("BUILD_ID", "42")], &[]),
    );
    let patched = resolution.patched.as_ref().unwrap();
    assert_eq!(patched.get(PROP_PRODUCT_VERSION), Some("1.0"));
}

#[test]
fn test_war_attributes() {
    let resolution = run(PATCHING, &env(&[], &[]));
    assert_eq!(
        resolution.attributes_for(ArchiveKind::Jar).get(MAIN_CLASS),
        Some("com.example.Main")
    );
    assert!(!resolution
        .attributes_for(ArchiveKind::War)
        .contains_key(MAIN_CLASS));
}
