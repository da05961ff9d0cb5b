//! Attribute keys recognized by the resolver, and the extension sub-keys
//! that feed them.

pub const GRADLE_VERSION: &str = "Gradle-Version";
pub const CREATED_BY: &str = "Created-By";
pub const PERMISSIONS: &str = "Permissions";
pub const CODEBASE: &str = "Codebase";
pub const APPLICATION_NAME: &str = "Application-Name";
pub const MAIN_CLASS: &str = "Main-Class";

pub const PROP_PRODUCT_NAME: &str = "PROP_PRODUCT_NAME";
pub const PROP_PRODUCT_VERSION: &str = "PROP_PRODUCT_VERSION";
pub const PROP_PRODUCT_RC: &str = "PROP_PRODUCT_RC";
pub const PROP_PRODUCT_RELEASED: &str = "PROP_PRODUCT_RELEASED";
pub const PROP_UNIQUE_DEVICE_IDENTIFICATION_EU: &str = "PROP_UNIQUE_DEVICE_IDENTIFICATION_EU";
pub const PROP_UNIQUE_DEVICE_IDENTIFICATION_USA: &str = "PROP_UNIQUE_DEVICE_IDENTIFICATION_USA";
pub const PROP_VENDOR_NAME: &str = "PROP_VENDOR_NAME";
pub const PROP_RELEASE_DATE: &str = "PROP_RELEASE_DATE";
pub const PROP_RELEASE_DATE_YYMMDD: &str = "PROP_RELEASE_DATE_yyMMdd";
pub const PROP_BUILD_DATE: &str = "PROP_BUILD_DATE";
pub const PROP_BUILD_TIME: &str = "PROP_BUILD_TIME";
pub const PROP_BUILD_USER: &str = "PROP_BUILD_USER";
pub const PROP_BUILD_HOST: &str = "PROP_BUILD_HOST";

// extension sub-keys
pub const EXT_VERSION: &str = "version";
pub const EXT_RC: &str = "rc";
pub const EXT_RELEASED: &str = "released";
pub const EXT_UDI_EU: &str = "udi_eu";
pub const EXT_UDI_USA: &str = "udi_usa";
pub const EXT_VENDOR: &str = "vendor";

/// Attributes resolved from declared properties and computed defaults only.
pub const EASY_KEYS: [&str; 6] = [
    GRADLE_VERSION,
    CREATED_BY,
    PERMISSIONS,
    CODEBASE,
    APPLICATION_NAME,
    PROP_PRODUCT_NAME,
];

/// Extension-aware attributes with the extension sub-key backing each.
pub const EXTENSION_KEYS: [(&str, &str); 5] = [
    (PROP_PRODUCT_RC, EXT_RC),
    (PROP_PRODUCT_RELEASED, EXT_RELEASED),
    (PROP_UNIQUE_DEVICE_IDENTIFICATION_EU, EXT_UDI_EU),
    (PROP_UNIQUE_DEVICE_IDENTIFICATION_USA, EXT_UDI_USA),
    (PROP_VENDOR_NAME, EXT_VENDOR),
];

/// Attributes only emitted for released products.
pub const RELEASED_KEYS: [&str; 6] = [
    PROP_RELEASE_DATE,
    PROP_RELEASE_DATE_YYMMDD,
    PROP_BUILD_USER,
    PROP_BUILD_HOST,
    PROP_BUILD_DATE,
    PROP_BUILD_TIME,
];

/// Attributes always present in the patched set.
pub const PATCHED_KEYS: [&str; 4] = [PROP_BUILD_USER, PROP_BUILD_HOST, PROP_BUILD_DATE, PROP_BUILD_TIME];
