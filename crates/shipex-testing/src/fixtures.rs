//! Sample event payloads in the shapes production emits.

use serde_json::{Value, json};

/// A typical state-change event: terminal at the top level, details under
/// `Data`.
pub fn terminal_event(terminal: &str, pro: &str) -> Value {
    json!({
        "eventType": "StateChanged",
        "currentTerminal": terminal,
        "Data": {
            "proNumber": pro,
            "stop": {
                "city": "Charlotte",
                "state": "NC"
            },
            "pieces": [1, 2]
        }
    })
}

/// The degenerate shape some feeds emit: terminal only under `Data`, with
/// the one-character misspelling and arbitrary casing.
pub fn misspelled_nested_event(terminal: &str) -> Value {
    json!({
        "eventType": "StateChanged",
        "Data": {
            "currenttermminal": terminal
        }
    })
}

/// An event with no terminal field anywhere.
pub fn untagged_event() -> Value {
    json!({
        "eventType": "Heartbeat",
        "Data": {
            "ok": true
        }
    })
}
