//! Property-based tests for the file operations
//!
//! These tests use proptest to check round-trip and append invariants across
//! many random inputs.

use proptest::prelude::*;
use serde_json::{Map, Value};
use tempfile::TempDir;

use crate::encoding::TextEncoding;

use super::{
    append_csv, append_json, append_txt, read_csv, read_json, read_txt, write_csv, write_json,
    write_txt,
};

// ===== STRATEGY HELPERS =====

/// Generate a JSON object with a few scalar fields
fn any_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(
        "[a-z]{1,6}",
        prop_oneof![
            any::<i64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
            ".{0,12}".prop_map(Value::from),
            Just(Value::Null),
        ],
        0..4,
    )
    .prop_map(|fields| Value::Object(fields.into_iter().collect::<Map<String, Value>>()))
}

/// Generate a JSON array of objects
fn any_object_array() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(any_object(), 0..5)
}

/// Generate a table whose rows and fields exercise quoting and blank lines
fn any_table() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[a-zA-Zа-я0-9 ,;\"\r\n]{0,8}", 0..4),
        0..6,
    )
}

proptest! {
    /// Property: JSON documents read back equal to what was written, and the
    /// file is pure ASCII
    #[test]
    fn test_json_round_trip(doc in prop_oneof![
        any_object(),
        any_object_array().prop_map(Value::Array),
    ]) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("doc.json");

        write_json(&doc, &path, TextEncoding::utf8()).unwrap();
        prop_assert!(std::fs::read(&path).unwrap().is_ascii());
        let read: Value = read_json(&path, TextEncoding::utf8()).unwrap();
        prop_assert_eq!(read, doc);
    }

    /// Property: appending A to an array E yields E ++ A
    #[test]
    fn test_json_append_concatenates(
        existing in any_object_array(),
        appended in any_object_array(),
    ) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("list.json");

        write_json(&existing, &path, TextEncoding::utf8()).unwrap();
        append_json(&appended, &path, TextEncoding::utf8()).unwrap();

        let mut expected = existing.clone();
        expected.extend(appended);
        let read: Vec<Value> = read_json(&path, TextEncoding::utf8()).unwrap();
        prop_assert_eq!(read, expected);
    }

    /// Property: appending to a missing file behaves like appending to []
    #[test]
    fn test_json_append_to_missing_file(appended in any_object_array()) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        append_json(&appended, &path, TextEncoding::utf8()).unwrap();

        let read: Vec<Value> = read_json(&path, TextEncoding::utf8()).unwrap();
        prop_assert_eq!(read, appended);
    }

    /// Property: CSV tables read back equal to what was written
    #[test]
    fn test_csv_round_trip(rows in any_table(), delimiter in prop_oneof![Just(b','), Just(b';'), Just(b'\t')]) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("table.csv");

        write_csv(&rows, &path, TextEncoding::utf8(), delimiter).unwrap();
        prop_assert_eq!(read_csv(&path, TextEncoding::utf8(), delimiter).unwrap(), rows);
    }

    /// Property: CSV append reads back as existing rows followed by new rows
    #[test]
    fn test_csv_append_concatenates(existing in any_table(), appended in any_table()) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("table.csv");

        write_csv(&existing, &path, TextEncoding::utf8(), b',').unwrap();
        append_csv(&appended, &path, TextEncoding::utf8(), b',').unwrap();

        let mut expected = existing.clone();
        expected.extend(appended);
        prop_assert_eq!(read_csv(&path, TextEncoding::utf8(), b',').unwrap(), expected);
    }

    /// Property: text reads back byte-for-byte
    #[test]
    fn test_txt_round_trip(text in "(?s).{0,64}") {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.txt");

        write_txt(&text, &path, TextEncoding::utf8()).unwrap();
        prop_assert_eq!(read_txt(&path, TextEncoding::utf8()).unwrap(), text);
    }

    /// Property: text append is plain concatenation
    #[test]
    fn test_txt_append_concatenates(first in "(?s).{0,32}", second in "(?s).{0,32}") {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.txt");

        write_txt(&first, &path, TextEncoding::utf8()).unwrap();
        append_txt(&second, &path, TextEncoding::utf8()).unwrap();
        prop_assert_eq!(read_txt(&path, TextEncoding::utf8()).unwrap(), format!("{}{}", first, second));
    }
}
