//! Property-based tests for the decoder.
//!
//! Documents are generated from the supported syntax so every case is
//! expected to decode; the properties check what the tree looks like.

use proptest::prelude::*;
use serde_minitoml::{decode, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

// Plain text that needs no escaping inside a basic string.
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 #\\[\\]{}=,.:-]{0,16}"
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

proptest! {
    #[test]
    fn prop_integer_roundtrip(k in key(), n in 0..=i64::MAX) {
        let root = decode(&format!("{k} = {n}")).unwrap();
        prop_assert_eq!(root.get(&k).unwrap().as_integer().unwrap(), n);
    }

    #[test]
    fn prop_string_roundtrip(k in key(), s in text()) {
        let root = decode(&format!("{k} = \"{}\"", escape(&s))).unwrap();
        prop_assert_eq!(root.get(&k).unwrap().as_str().unwrap(), s.as_str());
    }

    #[test]
    fn prop_escaped_quotes_and_backslashes(k in key(), s in "[a-z\"\\\\]{0,12}") {
        let root = decode(&format!("{k} = \"{}\"", escape(&s))).unwrap();
        prop_assert_eq!(root.get(&k).unwrap().as_str().unwrap(), s.as_str());
    }

    #[test]
    fn prop_trailing_comment_ignored(k in key(), n in 0..1000i64, c in "[ -~]{0,20}") {
        let root = decode(&format!("{k} = {n} #{c}\n")).unwrap();
        prop_assert_eq!(root.len(), 1);
        prop_assert_eq!(root.get(&k).unwrap().as_integer().unwrap(), n);
    }

    #[test]
    fn prop_array_preserves_order(items in prop::collection::vec(0..10_000i64, 0..20)) {
        let body: Vec<String> = items.iter().map(i64::to_string).collect();
        let root = decode(&format!("a = [{}]", body.join(",\n "))).unwrap();
        let decoded: Vec<i64> = root
            .get("a")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_integer().unwrap())
            .collect();
        prop_assert_eq!(decoded, items);
    }

    #[test]
    fn prop_decoding_is_deterministic(
        pairs in prop::collection::vec((key(), 0..100i64), 0..10),
        header in key(),
    ) {
        let mut doc = String::new();
        for (k, n) in &pairs {
            doc.push_str(&format!("{k} = {n}\n"));
        }
        doc.push_str(&format!("[{header}]\n"));
        for (k, n) in &pairs {
            doc.push_str(&format!("{k} = [{n}]\n"));
        }

        let first = decode(&doc).unwrap();
        let second = decode(&doc).unwrap();
        let first_keys: Vec<&String> = first.keys().collect();
        let second_keys: Vec<&String> = second.keys().collect();
        prop_assert_eq!(first_keys, second_keys);
        prop_assert_eq!(&first, &second);
        prop_assert!(matches!(first.get(&header), Ok(Value::Table(_))));
    }
}
