use chrono::NaiveDate;
use serde_json::Value;

/// The canonical key plus a known one-character misspelling seen in
/// production payloads.
const TERMINAL_KEYS: [&str; 2] = ["currentTerminal", "currentTermminal"];

/// Extract the current-terminal value from an event payload.
///
/// Candidates are checked in a fixed order: the top-level object first,
/// then the nested `Data` object if present. Within each candidate the
/// exact key spellings are tried before a case-insensitive re-check, and
/// the first hit wins. A payload carrying neither spelling anywhere yields
/// `None`; that is not an error.
pub fn extract_terminal(payload: &Value) -> Option<&Value> {
    let root = payload.as_object()?;
    let mut candidates = vec![root];
    if let Some(Value::Object(data)) = root.get("Data") {
        candidates.push(data);
    }

    for obj in candidates {
        for key in TERMINAL_KEYS {
            if let Some(value) = obj.get(key) {
                return Some(value);
            }
        }
        for key in TERMINAL_KEYS {
            if let Some((_, value)) = obj.iter().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
                return Some(value);
            }
        }
    }
    None
}

/// Filter predicate: exact string equality against the target terminal
/// code. Absent or non-string values never match.
pub fn matches_terminal(payload: &Value, terminal: &str) -> bool {
    extract_terminal(payload).and_then(Value::as_str) == Some(terminal)
}

/// Flatten nested JSON into dotted-key leaves. Objects recurse; arrays and
/// scalars stay as leaves and are stringified only at export time.
pub fn flatten(payload: &Value) -> Vec<(String, Value)> {
    let mut fields = Vec::new();
    flatten_into("", payload, &mut fields);
    fields
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(&path, child, out);
            }
        }
        leaf => out.push((prefix.to_string(), leaf.clone())),
    }
}

/// One matching event, flattened, with provenance.
#[derive(Debug, Clone)]
pub struct FlatRecord {
    pub fields: Vec<(String, Value)>,
}

impl FlatRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set a field, replacing an existing one with the same key.
    pub fn set(&mut self, key: &str, value: Value) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key.to_string(), value));
        }
    }
}

/// Flatten a matching payload and set the three provenance fields. The
/// provenance values come from the traversal position that produced the
/// record, never from the payload itself; a payload field with the same
/// name is overwritten.
pub fn build_record(
    payload: &Value,
    date: NaiveDate,
    entity_name: &str,
    source_path: &str,
) -> FlatRecord {
    let mut record = FlatRecord {
        fields: flatten(payload),
    };
    record.set("_file_date", Value::String(date.to_string()));
    record.set("_pro_folder", Value::String(entity_name.to_string()));
    record.set("_source_path", Value::String(source_path.to_string()));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_top_level_exact() {
        let payload = json!({"currentTerminal": "010-CLT"});
        assert!(matches_terminal(&payload, "010-CLT"));
    }

    #[test]
    fn test_extract_nested_misspelled_wrong_case() {
        let payload = json!({"Data": {"currenttermminal": "010-CLT"}});
        assert!(matches_terminal(&payload, "010-CLT"));
    }

    #[test]
    fn test_top_level_wins_over_nested() {
        let payload = json!({
            "currentTerminal": "099-XYZ",
            "Data": {"currentTerminal": "010-CLT"}
        });
        assert_eq!(
            extract_terminal(&payload).and_then(Value::as_str),
            Some("099-XYZ")
        );
        assert!(!matches_terminal(&payload, "010-CLT"));
    }

    #[test]
    fn test_exact_case_wins_over_insensitive_in_same_candidate() {
        let payload = json!({
            "CURRENTTERMINAL": "099-XYZ",
            "currentTermminal": "010-CLT"
        });
        // Exact spellings are checked first, even the misspelled one.
        assert_eq!(
            extract_terminal(&payload).and_then(Value::as_str),
            Some("010-CLT")
        );
    }

    #[test]
    fn test_absent_terminal_is_none_not_error() {
        let payload = json!({"status": "delivered"});
        assert_eq!(extract_terminal(&payload), None);
        assert!(!matches_terminal(&payload, "010-CLT"));
    }

    #[test]
    fn test_non_string_terminal_never_matches() {
        let payload = json!({"currentTerminal": 10});
        assert!(!matches_terminal(&payload, "10"));
    }

    #[test]
    fn test_data_that_is_not_an_object_is_ignored() {
        let payload = json!({"Data": "010-CLT"});
        assert_eq!(extract_terminal(&payload), None);
    }

    #[test]
    fn test_flatten_joins_nested_keys_with_dots() {
        let payload = json!({
            "pro": "123",
            "Data": {"stop": {"city": "Charlotte"}},
            "tags": ["a", "b"]
        });
        let fields = flatten(&payload);
        let record = FlatRecord { fields };
        assert_eq!(record.get("pro"), Some(&json!("123")));
        assert_eq!(record.get("Data.stop.city"), Some(&json!("Charlotte")));
        assert_eq!(record.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_provenance_overwrites_colliding_payload_field() {
        let payload = json!({"currentTerminal": "010-CLT", "_file_date": "1999-01-01"});
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let record = build_record(&payload, date, "PRO123", "2025-8-1/PRO123/evt.json");

        assert_eq!(record.get("_file_date"), Some(&json!("2025-08-01")));
        assert_eq!(
            record.fields.iter().filter(|(k, _)| k == "_file_date").count(),
            1
        );
    }

    #[test]
    fn test_build_record_provenance_round_trip() {
        let payload = json!({"currentTerminal": "010-CLT"});
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let record = build_record(&payload, date, "PRO123", "2025-8-1/PRO123/evt.json");

        assert_eq!(record.get("_file_date"), Some(&json!("2025-08-01")));
        assert_eq!(record.get("_pro_folder"), Some(&json!("PRO123")));
        assert_eq!(
            record.get("_source_path"),
            Some(&json!("2025-8-1/PRO123/evt.json"))
        );
    }
}
