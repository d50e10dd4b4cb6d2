//! Property-based tests for naming and encoding laws.

#![allow(missing_docs)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use querystring::prelude::*;

#[derive(Record)]
pub struct Probe {
    #[record(url = "kept")]
    pub kept: String,
    #[record(url = "optional,omitempty")]
    pub optional: String,
    #[record(url = "-")]
    pub skipped: String,
    #[record(url = "items,omitempty")]
    pub items: Vec<u32>,
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.-]{0,12}[a-zA-Z0-9]"
}

fn lower_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 1..5)
}

proptest! {
    #[test]
    fn prop_conversion_is_deterministic(name in identifier()) {
        for case in [NameCase::Camel, NameCase::Pascal, NameCase::Snake] {
            prop_assert_eq!(case.convert(&name), case.convert(&name));
            prop_assert!(!case.convert(&name).is_empty());
        }
    }

    #[test]
    fn prop_invalid_start_gives_empty(digit in "[0-9_.-]", tail in "[a-z0-9]{0,8}") {
        let name = format!("{digit}{tail}");
        for case in [NameCase::Camel, NameCase::Pascal, NameCase::Snake] {
            prop_assert_eq!(case.convert(&name), "");
        }
    }

    #[test]
    fn prop_trailing_separator_gives_empty(name in identifier(), sep in "[_.-]") {
        let name = format!("{name}{sep}");
        for case in [NameCase::Camel, NameCase::Pascal, NameCase::Snake] {
            prop_assert_eq!(case.convert(&name), "");
        }
    }

    #[test]
    fn prop_none_is_identity(name in ".{0,20}") {
        prop_assert_eq!(NameCase::None.convert(&name), name);
    }

    #[test]
    fn prop_camel_has_no_separators(name in identifier()) {
        let camel = NameCase::Camel.convert(&name);
        prop_assert!(!camel.contains(['_', '-', '.']));
    }

    #[test]
    fn prop_snake_camel_roundtrip(words in lower_words()) {
        let snake = words.join("_");
        let camel = NameCase::Camel.convert(&snake);
        prop_assert_eq!(NameCase::Snake.convert(&camel), snake);
    }

    #[test]
    fn prop_map_encoding_is_idempotent(
        map in prop::collection::btree_map("[a-z]{1,5}", ".{0,10}", 0..8)
    ) {
        let first = querystring::values(&map).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let second = querystring::values(&first).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(first.len(), map.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_omission_and_skip(
        kept in ".{0,8}",
        optional in ".{0,8}",
        skipped in ".{0,8}",
        items in prop::collection::vec(any::<u32>(), 0..4),
    ) {
        let probe = Probe {
            kept: kept.clone(),
            optional: optional.clone(),
            skipped,
            items: items.clone(),
        };
        let values = querystring::values(&probe).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(values.get("kept"), Some(kept.as_str()));
        prop_assert_eq!(values.contains_key("optional"), !optional.is_empty());
        prop_assert_eq!(values.contains_key("items"), !items.is_empty());
        prop_assert_eq!(values.get_all("items").len(), items.len());
        prop_assert!(!values.contains_key("skipped"));
        prop_assert!(!values.contains_key("-"));
    }

    #[test]
    fn prop_query_string_decodes_back(
        map in prop::collection::btree_map("[a-z]{1,5}", ".{0,10}", 0..8)
    ) {
        let query = querystring::to_query_string(&map).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let decoded: BTreeMap<String, String> = querystring::url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        let expected: BTreeMap<String, String> = map.into_iter().collect();
        prop_assert_eq!(decoded, expected);
    }
}
