/// Filter-map traversal tests for `ArrayInspector::each`.
///
/// `each` is the only scan operation: it visits entries in insertion order,
/// keeps `Some` results, and drops `None` results. The end-to-end case
/// builds typed domain models out of a mixed collection, using a nested
/// inspector per entry the way decoding callers do in practice.
use array_inspector::ArrayInspector;
use serde_json::json;

/// A minimal domain model built from well-formed entries.
#[derive(Debug, PartialEq, Eq)]
struct Chapter {
    title: String,
    sequence: i64,
}

// ============================================================================
// 1. Basics
// ============================================================================

#[test]
fn each_over_empty_collection_yields_nothing() {
    let data = json!({});
    let items: Vec<&str> = ArrayInspector::new(&data).each(|_, _| Some("anything"));
    assert!(items.is_empty());
}

#[test]
fn each_over_scalar_yields_nothing() {
    let data = json!(42);
    let items: Vec<&str> = ArrayInspector::new(&data).each(|_, _| Some("anything"));
    assert!(items.is_empty());
}

#[test]
fn each_keeps_only_some_results_in_order() {
    let data = json!([1, true, "zebra", false, "apple", null, "bat"]);
    let strings = ArrayInspector::new(&data).each(|_, value| value.as_str());

    assert_eq!(strings, vec!["zebra", "apple", "bat"]);
}

#[test]
fn each_passes_object_keys_in_insertion_order() {
    let data = json!({"zebra": 1, "apple": 2, "bat": 3});
    let keys = ArrayInspector::new(&data).each(|key, _| Some(key.to_string()));

    // preserve_order keeps object members in insertion order, not sorted.
    assert_eq!(keys, vec!["zebra", "apple", "bat"]);
}

#[test]
fn each_passes_array_positions_as_index_keys() {
    let data = json!(["a", "b"]);
    let keys = ArrayInspector::new(&data).each(|key, _| Some(key.to_string()));

    assert_eq!(keys, vec!["0", "1"]);
}

#[test]
fn each_output_type_is_caller_defined() {
    let data = json!({"a": 1, "b": "skip", "c": 3});
    let doubled: Vec<i64> =
        ArrayInspector::new(&data).each(|_, value| Some(value.as_i64()? * 2));

    assert_eq!(doubled, vec![2, 6]);
}

// ============================================================================
// 2. End-to-end: build models from a mixed collection
// ============================================================================

#[test]
fn each_builds_models_from_well_formed_entries_only() {
    let data = json!([
        1,
        true,
        {"key1": "value1"},
        {"title": 100, "sequence": false},
        {"title": "First Title", "sequence": 3},
        {"title": "Second Title", "sequence": 4},
    ]);

    let chapters = ArrayInspector::new(&data).each(|_, value| {
        let entry = ArrayInspector::new(value);
        let title = entry.get_string("title")?;
        let sequence = entry.get_integer("sequence")?;

        Some(Chapter {
            title: title.to_owned(),
            sequence,
        })
    });

    assert_eq!(
        chapters,
        vec![
            Chapter {
                title: "First Title".to_owned(),
                sequence: 3,
            },
            Chapter {
                title: "Second Title".to_owned(),
                sequence: 4,
            },
        ]
    );
}
