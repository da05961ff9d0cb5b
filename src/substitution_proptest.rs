//! Property-based tests for placeholder substitution and the version patch
//! policy.

#[cfg(test)]
mod proptest_tests {
    use crate::attributes::AttributeMap;
    use crate::environment::{EnvironmentSnapshot, SYS_BUILD, SYS_TICKET};
    use crate::keys::{PROP_PRODUCT_RC, PROP_PRODUCT_VERSION};
    use crate::substitution::{placeholders, substitute};
    use crate::version_patch::patch_version;
    use proptest::prelude::*;

    // ============================================================================
    // substitution
    // ============================================================================

    proptest! {
        /// Property: values without `$` are never changed
        #[test]
        fn values_without_dollar_are_untouched(
            entries in prop::collection::vec(("[A-Z_]{1,8}", "[^$]{0,20}"), 0..8),
        ) {
            let original: AttributeMap = entries.into_iter().collect();
            let mut target = original.clone();
            let mapping: AttributeMap = [("A", "x")].into_iter().collect();
            substitute(&mut target, &mapping, None);
            prop_assert_eq!(target, original);
        }

        /// Property: substitution keeps the key set and order
        #[test]
        fn keys_and_order_are_preserved(
            entries in prop::collection::vec(("[A-Z]{1,4}", "(\\$\\{[A-Z]{1,4}\\}|[a-z ]){0,6}"), 0..10),
        ) {
            let mut target: AttributeMap = entries.into_iter().collect();
            let keys_before: Vec<String> = target.keys().map(str::to_string).collect();
            let mapping: AttributeMap = [("AB", "mapped"), ("Z", "zed")].into_iter().collect();
            substitute(&mut target, &mapping, None);
            let keys_after: Vec<String> = target.keys().map(str::to_string).collect();
            prop_assert_eq!(keys_before, keys_after);
        }

        /// Property: unresolvable placeholders survive verbatim
        #[test]
        fn unresolved_placeholders_stay_literal(name in "[A-Z]{1,10}") {
            let token = format!("${{UNKNOWN_{}}}", name);
            let mut target: AttributeMap = [("A", token.as_str())].into_iter().collect();
            substitute(&mut target, &AttributeMap::new(), None);
            prop_assert_eq!(target.get("A"), Some(token.as_str()));
        }

        /// Property: a value made only of mapped placeholders resolves fully
        /// in one pass
        #[test]
        fn mapped_placeholders_resolve(
            names in prop::collection::vec("[A-Z]{1,6}", 1..6),
            value in "[a-z0-9.]{0,10}",
        ) {
            let template: String = names.iter().map(|n| format!("${{M_{}}}", n)).collect();
            let mapping: AttributeMap = names
                .iter()
                .map(|n| (format!("M_{}", n), value.clone()))
                .collect();
            let mut target: AttributeMap = [("T", template.as_str())].into_iter().collect();
            substitute(&mut target, &mapping, None);

            prop_assert_eq!(target.get("T").map(str::to_string), Some(value.repeat(names.len())));
        }

        /// Property: placeholders() finds every well-formed token
        #[test]
        fn placeholders_finds_every_token(names in prop::collection::vec("[A-Za-z_]{0,6}", 0..6)) {
            let value: String = names.iter().map(|n| format!("-${{{}}}", n)).collect();
            let found: Vec<&str> = placeholders(&value);
            let expected: Vec<&str> = names.iter().map(String::as_str).collect();
            prop_assert_eq!(found, expected);
        }
    }

    // ============================================================================
    // version patch
    // ============================================================================

    proptest! {
        /// Property: a finalized release candidate is never patched
        #[test]
        fn finalized_release_candidates_never_patch(
            version in "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}",
            digits in "[0-9]{2}",
            ticket in "[A-Z]{2,5}-[0-9]{1,4}",
            build in "[0-9]{1,5}",
        ) {
            let mut mapping: AttributeMap = [
                (PROP_PRODUCT_VERSION, version.clone()),
                (PROP_PRODUCT_RC, format!("RC{}", digits)),
            ]
            .into_iter()
            .collect();
            let env = EnvironmentSnapshot::new(
                [(SYS_TICKET, ticket), (SYS_BUILD, build)].into_iter().collect(),
                AttributeMap::new(),
            );

            prop_assert!(!patch_version(&mut mapping, true, &env));
            prop_assert_eq!(mapping.get(PROP_PRODUCT_VERSION), Some(version.as_str()));
        }

        /// Property: an enabled patch always yields version.ticket-build
        #[test]
        fn patch_composes_ticket_then_build(
            version in "[0-9]{1,2}(\\.[0-9]{1,2}){0,2}",
            ticket in "[A-Z]{2,5}-[0-9]{1,4}",
            build in "[0-9]{1,5}",
        ) {
            let mut mapping: AttributeMap = [(PROP_PRODUCT_VERSION, version.clone())].into_iter().collect();
            let env = EnvironmentSnapshot::new(
                AttributeMap::new(),
                [(SYS_TICKET, ticket.clone()), (SYS_BUILD, build.clone())].into_iter().collect(),
            );

            prop_assert!(patch_version(&mut mapping, true, &env));
            let expected = format!("{}.{}-{}", version, ticket, build);
            prop_assert_eq!(mapping.get(PROP_PRODUCT_VERSION), Some(expected.as_str()));
        }
    }
}
