//! Stored record migration
//!
//! The wallet record has had two shapes in LocalStorage:
//! - Legacy: flat array of up to 4 photo strings (or nulls), no sub-photos
//! - Current: array of up to 4 `{ main, sub }` slot objects
//!
//! The shape is sniffed from the first element only. An empty array and an
//! array starting with `null` are read as legacy; both readings agree on the
//! empty case, and a leading `null` has always meant legacy.

use serde_json::Value;

use super::slot::{PhotoRef, WalletSlot, WalletState};
use crate::consts::{SLOT_COUNT, SUB_PHOTO_COUNT};

/// Which branch a stored record was read through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSchema {
    /// No record (missing key, read/decode failure, or JSON `null`)
    Absent,
    /// Flat array of photo strings
    Legacy,
    /// Array of slot objects
    Current,
    /// Decoded fine but matches neither schema
    Unrecognized,
}

impl RecordSchema {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSchema::Absent => "absent",
            RecordSchema::Legacy => "legacy",
            RecordSchema::Current => "current",
            RecordSchema::Unrecognized => "unrecognized",
        }
    }
}

/// Result of normalizing a stored record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub state: WalletState,
    pub schema: RecordSchema,
}

/// Turn any decoded record into a valid 4-slot state. Never fails.
pub fn normalize(raw: Option<&Value>) -> Normalized {
    let (state, schema) = match raw {
        None | Some(Value::Null) => (WalletState::empty(), RecordSchema::Absent),
        Some(Value::Array(items)) => match items.first() {
            None | Some(Value::String(_)) | Some(Value::Null) => {
                (from_legacy(items), RecordSchema::Legacy)
            }
            // Arrays count as objects here, as they did for the web app
            Some(Value::Object(_)) | Some(Value::Array(_)) => {
                (from_current(items), RecordSchema::Current)
            }
            Some(_) => (WalletState::empty(), RecordSchema::Unrecognized),
        },
        Some(_) => (WalletState::empty(), RecordSchema::Unrecognized),
    };
    Normalized { state, schema }
}

/// Only non-empty strings are photos
fn photo_from(value: &Value) -> Option<PhotoRef> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn from_legacy(items: &[Value]) -> WalletState {
    let mut state = WalletState::empty();
    for (slot, photo) in state.slots_mut().iter_mut().zip(items) {
        slot.main = photo_from(photo);
    }
    state
}

fn from_current(items: &[Value]) -> WalletState {
    let slots: [WalletSlot; SLOT_COUNT] = std::array::from_fn(|i| {
        items.get(i).map(slot_from).unwrap_or_else(WalletSlot::empty)
    });
    WalletState::from_slots(slots)
}

fn slot_from(value: &Value) -> WalletSlot {
    let main = value.get("main").and_then(photo_from);
    // Short arrays pad with None, long ones are cut at 3; non-arrays give all None
    let sub: [Option<PhotoRef>; SUB_PHOTO_COUNT] = match value.get("sub").and_then(Value::as_array) {
        Some(entries) => std::array::from_fn(|i| entries.get(i).and_then(photo_from)),
        None => std::array::from_fn(|_| None),
    };
    WalletSlot { main, sub }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn state_of(raw: Value) -> WalletState {
        normalize(Some(&raw)).state
    }

    fn main_of(state: &WalletState, i: usize) -> Option<&str> {
        state.slot(i).and_then(|s| s.main.as_deref())
    }

    #[test]
    fn test_absent_and_null_give_empty() {
        let n = normalize(None);
        assert_eq!(n.state, WalletState::empty());
        assert_eq!(n.schema, RecordSchema::Absent);

        let n = normalize(Some(&Value::Null));
        assert_eq!(n.state, WalletState::empty());
        assert_eq!(n.schema, RecordSchema::Absent);
    }

    #[test]
    fn test_legacy_record() {
        let n = normalize(Some(&json!(["a.png", null, "c.png"])));
        assert_eq!(n.schema, RecordSchema::Legacy);
        assert_eq!(main_of(&n.state, 0), Some("a.png"));
        assert_eq!(main_of(&n.state, 1), None);
        assert_eq!(main_of(&n.state, 2), Some("c.png"));
        assert!(n.state.slot(3).unwrap().is_empty());
        for slot in n.state.slots() {
            assert!(slot.sub.iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_legacy_extra_entries_discarded() {
        let state = state_of(json!(["a", "b", "c", "d", "e", "f"]));
        assert_eq!(main_of(&state, 3), Some("d"));
        assert_eq!(state.photo_count(), 4);
    }

    #[test]
    fn test_legacy_leading_null_and_junk_entries() {
        // Leading null always reads as legacy, even when objects follow
        let n = normalize(Some(&json!([null, {"main": "x", "sub": []}, "", 7])));
        assert_eq!(n.schema, RecordSchema::Legacy);
        assert_eq!(n.state, WalletState::empty());
    }

    #[test]
    fn test_empty_array_is_legacy_and_empty() {
        let n = normalize(Some(&json!([])));
        assert_eq!(n.schema, RecordSchema::Legacy);
        assert_eq!(n.state, WalletState::empty());
    }

    #[test]
    fn test_current_record_pads_slots_and_subs() {
        let n = normalize(Some(&json!([{"main": "x", "sub": ["s1"]}])));
        assert_eq!(n.schema, RecordSchema::Current);

        let slot0 = n.state.slot(0).unwrap();
        assert_eq!(slot0.main.as_deref(), Some("x"));
        assert_eq!(slot0.sub, [Some("s1".to_string()), None, None]);
        for i in 1..SLOT_COUNT {
            assert!(n.state.slot(i).unwrap().is_empty());
        }
    }

    #[test]
    fn test_current_record_truncates() {
        let state = state_of(json!([
            {"main": "a", "sub": ["1", "2", "3", "4", "5"]},
            {"main": "b"},
            {"main": "c", "sub": "not-an-array"},
            {"main": "d", "sub": [null, "q"]},
            {"main": "e", "sub": ["overflow"]},
        ]));
        assert_eq!(state.slot(0).unwrap().sub[2].as_deref(), Some("3"));
        assert!(state.slot(1).unwrap().sub.iter().all(Option::is_none));
        assert!(state.slot(2).unwrap().sub.iter().all(Option::is_none));
        assert_eq!(state.slot(3).unwrap().sub, [None, Some("q".to_string()), None]);
        assert_eq!(main_of(&state, 3), Some("d"));
        assert_eq!(state.photo_count(), 8);
    }

    #[test]
    fn test_current_record_drops_non_string_photos() {
        let state = state_of(json!([
            {"main": 5, "sub": [true, "", {"x": 1}]},
            "stray",
            null,
        ]));
        assert_eq!(state, WalletState::empty());
    }

    #[test]
    fn test_leading_array_reads_as_current() {
        let n = normalize(Some(&json!([["a.png"], {"main": "b"}])));
        assert_eq!(n.schema, RecordSchema::Current);
        assert_eq!(main_of(&n.state, 0), None);
        assert_eq!(main_of(&n.state, 1), Some("b"));
    }

    #[test]
    fn test_unrecognized_shapes_give_empty() {
        for raw in [json!(42), json!("garbage"), json!(true), json!({"main": "x"}), json!([1, "a"]), json!([false])] {
            let n = normalize(Some(&raw));
            assert_eq!(n.schema, RecordSchema::Unrecognized, "input {raw}");
            assert_eq!(n.state, WalletState::empty(), "input {raw}");
        }
    }

    fn arb_photo() -> impl Strategy<Value = Option<PhotoRef>> {
        prop::option::of("[a-z]{1,8}\\.png")
    }

    fn arb_slot() -> impl Strategy<Value = WalletSlot> {
        (arb_photo(), prop::array::uniform3(arb_photo()))
            .prop_map(|(main, sub)| WalletSlot { main, sub })
    }

    fn arb_state() -> impl Strategy<Value = WalletState> {
        prop::array::uniform4(arb_slot()).prop_map(WalletState::from_slots)
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-z.]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("main|sub|other", inner), 0..3)
                    .prop_map(|fields| Value::Object(fields.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_current_schema_round_trips(state in arb_state()) {
            let record = serde_json::to_value(&state).unwrap();
            let n = normalize(Some(&record));
            prop_assert_eq!(n.state, state);
        }

        #[test]
        fn prop_legacy_mains_map_by_index(entries in prop::collection::vec(arb_photo(), 0..=4)) {
            let record = Value::Array(
                entries.iter().map(|e| e.clone().map_or(Value::Null, Value::String)).collect(),
            );
            let state = state_of(record);
            for (i, entry) in entries.iter().enumerate() {
                prop_assert_eq!(&state.slot(i).unwrap().main, entry);
            }
            for slot in state.slots() {
                prop_assert!(slot.sub.iter().all(Option::is_none));
            }
        }

        #[test]
        fn prop_normalize_is_idempotent(raw in arb_json()) {
            let once = normalize(Some(&raw)).state;
            let record = serde_json::to_value(&once).unwrap();
            let again = normalize(Some(&record));
            prop_assert_eq!(again.schema, RecordSchema::Current);
            prop_assert_eq!(again.state, once);
        }

        #[test]
        fn prop_every_slot_has_three_subs(raw in arb_json()) {
            let record = serde_json::to_value(normalize(Some(&raw)).state).unwrap();
            let slots = record.as_array().unwrap();
            prop_assert_eq!(slots.len(), SLOT_COUNT);
            for slot in slots {
                prop_assert_eq!(slot["sub"].as_array().unwrap().len(), SUB_PHOTO_COUNT);
            }
        }

        #[test]
        fn prop_non_sequences_give_empty(raw in arb_json().prop_filter("not an array", |v| !v.is_array())) {
            prop_assert_eq!(normalize(Some(&raw)).state, WalletState::empty());
        }
    }
}
