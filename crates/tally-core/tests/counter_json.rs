#![allow(clippy::unwrap_used)]

use serde_json::json;
use tally_core::Counter;

#[test]
fn counter_serializes_under_its_own_name() {
    let v = serde_json::to_value(Counter::new("foo", 3)).unwrap();
    assert_eq!(v, json!({ "foo": 3 }));
}

#[test]
fn name_is_used_verbatim_as_key() {
    let s = serde_json::to_string(&Counter::new("with space\"q", 0)).unwrap();
    assert_eq!(s, r#"{"with space\"q":0}"#);
}
