//! # Placeholder Substitution
//!
//! Rewrites `${NAME}` placeholders in attribute values. A placeholder name
//! may not contain `{`, `}` or `$`, so placeholders never nest.
//!
//! Values are rewritten in place, walking the target map in insertion order.
//! A placeholder is looked up in this order:
//!
//! 1. the target map itself, with whatever value the key holds at that point
//!    of the walk (already rewritten if the key came earlier);
//! 2. the optional `other` map;
//! 3. the substitution mapping.
//!
//! Placeholders that resolve nowhere are left untouched. Each value is
//! scanned once: its placeholders are collected before any replacement, then
//! each one replaces all of its occurrences in turn. There is no second pass.

use std::sync::OnceLock;

use regex::Regex;

use crate::attributes::{AttributeMap, SubstitutionMapping};

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}{$]*)\}").expect("placeholder regex is valid"))
}

/// Placeholder names in a value, in order of appearance.
pub fn placeholders(value: &str) -> Vec<&str> {
    placeholder_regex()
        .captures_iter(value)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Rewrite every value of `target` in place.
pub fn substitute(
    target: &mut AttributeMap,
    mapping: &SubstitutionMapping,
    other: Option<&AttributeMap>,
) {
    for index in 0..target.len() {
        let original = target.value_at(index).to_string();
        let mut rewritten = original.clone();

        for name in placeholders(&original) {
            let replacement = target
                .get(name)
                .or_else(|| other.and_then(|map| map.get(name)))
                .or_else(|| mapping.get(name));

            if let Some(replacement) = replacement {
                let token = format!("${{{}}}", name);
                rewritten = rewritten.replace(&token, replacement);
            }
        }

        target.set_value_at(index, rewritten);
    }
}
