//! Integration tests for map inputs, naming and the values container.

#![allow(missing_docs)]

use std::collections::{BTreeMap, HashMap};

use assert2::{check, let_assert};
use querystring::prelude::*;

#[derive(Record)]
pub struct Filter {
    #[record(url = "q")]
    pub query: String,
    #[record(url = "tag")]
    pub tags: Vec<&'static str>,
    #[record(url = "limit,omitempty")]
    pub limit: usize,
}

#[test]
fn test_string_map() {
    let input = BTreeMap::from([("hello", "world"), ("foo", "bar")]);

    let_assert!(Ok(values) = querystring::values(&input));

    check!(values.len() == 2);
    check!(values.get_all("hello") == ["world"]);
    check!(values.get_all("foo") == ["bar"]);
}

#[test]
fn test_owned_string_map() {
    let input: HashMap<String, String> =
        HashMap::from([("name".to_string(), "Grace Hopper".to_string())]);

    let_assert!(Ok(query) = querystring::to_query_string(&input));
    check!(query == "name=Grace+Hopper");
}

#[test]
fn test_map_with_non_string_values() {
    let input = BTreeMap::from([("count", vec!["1"])]);

    let_assert!(Err(error) = querystring::values(&input));
    check!(error.is_type_mismatch());
}

#[test]
fn test_empty_map_with_non_string_keys() {
    let input = HashMap::<i32, String>::new();

    let_assert!(Err(error) = querystring::values(&input));
    check!(error.is_type_mismatch());

    let_assert!(Ok(values) = querystring::values(&HashMap::<String, String>::new()));
    check!(values.is_empty());
}

#[test]
fn test_map_of_optionals_is_a_mismatch() {
    let input = BTreeMap::from([("a", Some("1"))]);

    let_assert!(Err(error) = querystring::values(&input));
    check!(error.is_type_mismatch());
}

#[test]
fn test_unsupported_inputs() {
    let_assert!(Err(error) = querystring::values("text"));
    check!(error.is_unsupported_type());

    let_assert!(Err(error) = querystring::values(&[1, 2, 3]));
    check!(error.is_unsupported_type());

    let_assert!(Err(error) = querystring::values(&Some(BTreeMap::from([("a", "b")]))));
    check!(error.is_unsupported_type());
}

#[test]
fn test_encoding_values_is_idempotent() {
    let filter = Filter {
        query: "rust".to_string(),
        tags: vec!["web", "cli"],
        limit: 0,
    };

    let_assert!(Ok(first) = querystring::values(&filter));
    let_assert!(Ok(second) = querystring::values(&first));
    check!(first == second);

    let map = BTreeMap::from([("a", "1")]);
    let_assert!(Ok(first) = querystring::values(&map));
    let_assert!(Ok(second) = querystring::values(&first));
    check!(first == second);
}

#[test]
fn test_converter_reuse() {
    let converter = Converter::with_options(&Options::builder().naming("pascal").build());

    for limit in [0, 5] {
        let filter = Filter {
            query: String::new(),
            tags: vec![],
            limit,
        };
        let_assert!(Ok(values) = converter.encode(&filter));
        check!(values.contains_key("limit") == (limit != 0));
        check!(values.get("q") == Some(""));
    }
}

#[test]
fn test_convert_name() {
    check!(convert_name(NameCase::Camel, "foo-bar") == "fooBar");
    check!(convert_name(NameCase::Camel, "foo-bar-") == "");
    check!(convert_name(NameCase::Pascal, "hello_2-bar") == "Hello2Bar");
    check!(convert_name(NameCase::Snake, "hello2World") == "hello_2_world");
    check!(convert_name(NameCase::None, "foo-bar-") == "foo-bar-");

    check!(convert_name("camel", "user.id") == "userId");
    check!(convert_name("kebab", "user.id") == "user.id");
}

#[test]
fn test_values_container() {
    let mut values: Values = [("tag", "a"), ("q", "rust")].into_iter().collect();
    values.add("tag", "b");
    values.extend([("page", "2")]);

    check!(values.keys().collect::<Vec<_>>() == ["tag", "q", "page"]);
    check!(values.get_all("tag") == ["a", "b"]);
    check!(values.get_all("missing").is_empty());

    values.set("tag", "c");
    check!(values.get_all("tag") == ["c"]);

    let_assert!(Some(removed) = values.remove("q"));
    check!(removed == ["rust"]);

    let pairs: Vec<(String, String)> = values.into();
    check!(
        pairs
            == [
                ("tag".to_string(), "c".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
    );
}

#[test]
fn test_query_string_escaping() {
    let filter = Filter {
        query: "a+b=c & d/é".to_string(),
        tags: vec!["x y", "z"],
        limit: 10,
    };

    let_assert!(Ok(query) = querystring::to_query_string(&filter));
    insta::assert_snapshot!(query, @"q=a%2Bb%3Dc+%26+d%2F%C3%A9&tag=x+y&tag=z&limit=10");
}
