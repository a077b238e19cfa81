//! Field-level access: the three-way get_field contract and in-place
//! update_field semantics.

use serde_json::{json, Value};

use crate::common::{doc, people_store, Error, Store};

// ----------------------------------------------------------------------
// get_field
// ----------------------------------------------------------------------

#[test]
fn get_field_returns_value_for_present_key_and_field() {
    let store = people_store();
    assert_eq!(store.get_field("alice", "city").unwrap(), Some(&json!("Lisbon")));
}

#[test]
fn get_field_absent_key_is_ok_none() {
    // No entry at all is an unexceptional miss, not an error.
    let store = people_store();
    assert_eq!(store.get_field("nobody", "age").unwrap(), None);
}

#[test]
fn get_field_present_key_missing_field_is_field_not_found() {
    let store = people_store();
    let err = store.get_field("carol", "city").unwrap_err();
    match err {
        Error::FieldNotFound { key, field } => {
            assert_eq!(key, "carol");
            assert_eq!(field, "city");
        }
        other => panic!("expected FieldNotFound, got {other:?}"),
    }
}

#[test]
fn get_field_distinguishes_stored_null_from_missing() {
    let mut store = Store::new();
    store.put("k", doc(json!({"maybe": null})));
    // A stored JSON null is a present field.
    assert_eq!(store.get_field("k", "maybe").unwrap(), Some(&Value::Null));
    // An unknown field on the same document is the error case.
    assert!(matches!(
        store.get_field("k", "other"),
        Err(Error::FieldNotFound { .. })
    ));
}

// ----------------------------------------------------------------------
// update_field
// ----------------------------------------------------------------------

#[test]
fn update_field_overwrites_existing_field_in_place() {
    let mut store = people_store();
    store.update_field("alice", "age", Some(json!(31))).unwrap();

    let alice = store.get("alice").unwrap();
    assert_eq!(alice.get("age"), Some(&json!(31)));
    // Untouched fields survive.
    assert_eq!(alice.get("city"), Some(&json!("Lisbon")));
}

#[test]
fn update_field_adds_missing_field() {
    let mut store = people_store();
    store
        .update_field("carol", "city", Some(json!("Braga")))
        .unwrap();
    assert_eq!(store.get_field("carol", "city").unwrap(), Some(&json!("Braga")));
}

#[test]
fn update_field_returns_borrow_of_mutated_document() {
    let mut store = people_store();
    let updated = store
        .update_field("bob", "team", Some(json!("platform")))
        .unwrap();
    assert_eq!(updated.get("team"), Some(&json!("platform")));
    assert_eq!(updated.get("age"), Some(&json!(25)));
}

#[test]
fn update_field_absent_key_is_key_not_found() {
    // Unlike get_field, the key here is a hard precondition.
    let mut store = people_store();
    let err = store
        .update_field("nobody", "age", Some(json!(1)))
        .unwrap_err();
    assert!(matches!(err, Error::KeyNotFound(key) if key == "nobody"));
    // And no entry materializes as a side effect.
    assert!(!store.contains_key("nobody"));
}

#[test]
fn update_field_none_removes_the_field() {
    let mut store = people_store();
    store.update_field("alice", "city", None).unwrap();

    let alice = store.get("alice").unwrap();
    assert!(!alice.contains_field("city"));
    assert!(alice.contains_field("age"));
}

#[test]
fn update_field_none_on_missing_field_is_quiet_noop() {
    let mut store = people_store();
    let before = store.get("bob").cloned().unwrap();
    let after = store.update_field("bob", "no_such", None).unwrap().clone();
    assert_eq!(after, before);
}

#[test]
fn update_field_some_null_stores_explicit_null() {
    // The absent sentinel is None; Some(Null) is real data.
    let mut store = people_store();
    store
        .update_field("alice", "nickname", Some(Value::Null))
        .unwrap();
    assert_eq!(
        store.get_field("alice", "nickname").unwrap(),
        Some(&Value::Null)
    );
}

#[test]
fn update_field_accepts_structured_values() {
    let mut store = people_store();
    store
        .update_field("alice", "pets", Some(json!(["cat", "dog"])))
        .unwrap();
    store
        .update_field("alice", "address", Some(json!({"street": "Rua A", "nr": 7})))
        .unwrap();

    assert_eq!(
        store.get_field("alice", "pets").unwrap(),
        Some(&json!(["cat", "dog"]))
    );
    assert_eq!(
        store.get_field("alice", "address").unwrap(),
        Some(&json!({"street": "Rua A", "nr": 7}))
    );
}

#[test]
fn failed_update_leaves_store_unchanged() {
    let mut store = people_store();
    let before = store.clone();
    let _ = store.update_field("nobody", "f", Some(json!(1)));
    assert_eq!(store, before);
}
