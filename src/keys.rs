//! Key-name adapters between the crate's internal snake_case convention and
//! the wire names the preferences API expects.

use serde_json::{Map, Value};

/// Locale preference key as used internally.
pub const PREF_LANG: &str = "pref_lang";

/// Keys whose wire names differ from snake_case. New translations go here,
/// not inline in request-building code.
const API_KEY_RENAMES: &[(&str, &str)] = &[(PREF_LANG, "pref-lang")];

/// Rewrites every key to snake_case, then applies the API rename table.
/// Values pass through untouched.
pub(crate) fn to_api_object(preferences: &Map<String, Value>) -> Map<String, Value> {
    preferences
        .iter()
        .map(|(key, value)| (rename_for_api(&snake_case(key)), value.clone()))
        .collect()
}

fn rename_for_api(key: &str) -> String {
    API_KEY_RENAMES
        .iter()
        .find(|(internal, _)| *internal == key)
        .map_or_else(|| key.to_string(), |(_, wire)| (*wire).to_string())
}

fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    let mut prev: Option<char> = None;
    while let Some(c) = chars.next() {
        if c == '-' || c == ' ' {
            out.push('_');
        } else if c.is_uppercase() {
            // word boundary: after a lowercase/digit, or where an acronym
            // run ends ("ABTest" -> "ab_test")
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_numeric() => true,
                Some(p) if p.is_uppercase() => {
                    chars.peek().is_some_and(|n| n.is_lowercase())
                }
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
