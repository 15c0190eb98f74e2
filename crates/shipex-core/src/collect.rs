use crate::entities::list_entities;
use crate::events::list_event_files;
use crate::record::{FlatRecord, build_record, matches_terminal};
use crate::scan::{DateRange, scan_date_dirs};
use crate::Result;
use serde_json::Value;
use shipex_store::StoreClient;
use tracing::{debug, info, warn};

/// Options for one traversal run.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Path prefix inside the container holding the date directories.
    pub root: String,
    pub range: DateRange,
    /// Terminal code records must carry to be kept.
    pub terminal: String,
    /// Max entity directories per date, 0 = unlimited.
    pub entity_cap: usize,
    /// Max event files per entity, 0 = unlimited.
    pub file_cap: usize,
}

/// Walk date directories in ascending order, read every event JSON under
/// their entity sub-directories, and return the flattened records whose
/// current terminal equals the target. Unreadable or unparseable objects
/// are logged and skipped; they never abort the run.
pub fn collect_events(store: &dyn StoreClient, opts: &CollectOptions) -> Result<Vec<FlatRecord>> {
    let mut records = Vec::new();

    for date_dir in scan_date_dirs(store, &opts.root, &opts.range)? {
        let entities = list_entities(store, &date_dir.path, opts.entity_cap)?;
        info!(
            date = %date_dir.date,
            entities = entities.len(),
            "Processing PRO directories"
        );

        for entity_path in entities {
            let entity_name = entity_path
                .rsplit('/')
                .next()
                .unwrap_or(entity_path.as_str())
                .to_string();
            let files = list_event_files(store, &entity_path, opts.file_cap)?;
            debug!(entity = %entity_name, files = files.len(), "Listed event files");

            for file_path in files {
                let payload = match read_payload(store, &file_path) {
                    Ok(payload) => payload,
                    Err(err) => {
                        warn!(path = %file_path, error = %err, "Skipping unreadable JSON");
                        continue;
                    }
                };

                if matches_terminal(&payload, &opts.terminal) {
                    records.push(build_record(
                        &payload,
                        date_dir.date,
                        &entity_name,
                        &file_path,
                    ));
                }
            }
        }
    }

    Ok(records)
}

fn read_payload(store: &dyn StoreClient, path: &str) -> Result<Value> {
    let bytes = store.read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use shipex_store::LocalStore;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_event(root: &std::path::Path, rel: &str, payload: &Value) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_vec(payload).unwrap()).unwrap();
    }

    fn options(start: NaiveDate, end: NaiveDate) -> CollectOptions {
        CollectOptions {
            root: String::new(),
            range: DateRange::new(start, end).unwrap(),
            terminal: "010-CLT".to_string(),
            entity_cap: 0,
            file_cap: 0,
        }
    }

    #[test]
    fn test_collect_filters_by_terminal_and_range() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_event(root, "2025-8-1/PRO1/a.json", &json!({"currentTerminal": "010-CLT"}));
        write_event(root, "2025-8-1/PRO1/b.json", &json!({"currentTerminal": "099-XYZ"}));
        write_event(root, "2025-8-2/PRO2/c.json", &json!({"Data": {"currentTermminal": "010-CLT"}}));
        write_event(root, "2025-9-1/PRO3/d.json", &json!({"currentTerminal": "010-CLT"}));
        let store = LocalStore::new(root);

        let records =
            collect_events(&store, &options(date(2025, 8, 1), date(2025, 8, 31))).unwrap();

        assert_eq!(records.len(), 2);
        // Traversal order: date ascending.
        assert_eq!(records[0].get("_file_date"), Some(&json!("2025-08-01")));
        assert_eq!(records[0].get("_pro_folder"), Some(&json!("PRO1")));
        assert_eq!(records[0].get("_source_path"), Some(&json!("2025-8-1/PRO1/a.json")));
        assert_eq!(records[1].get("_pro_folder"), Some(&json!("PRO2")));
    }

    #[test]
    fn test_unreadable_json_is_skipped_not_fatal() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_event(root, "2025-8-1/PRO1/good.json", &json!({"currentTerminal": "010-CLT"}));
        std::fs::write(root.join("2025-8-1/PRO1/bad.json"), b"{not json").unwrap();
        let store = LocalStore::new(root);

        let records =
            collect_events(&store, &options(date(2025, 8, 1), date(2025, 8, 1))).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_entity_cap_limits_traversal() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for i in 0..5 {
            write_event(
                root,
                &format!("2025-8-1/PRO{}/evt.json", i),
                &json!({"currentTerminal": "010-CLT"}),
            );
        }
        let store = LocalStore::new(root);

        let mut opts = options(date(2025, 8, 1), date(2025, 8, 1));
        opts.entity_cap = 2;
        let records = collect_events(&store, &opts).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("_pro_folder"), Some(&json!("PRO0")));
        assert_eq!(records[1].get("_pro_folder"), Some(&json!("PRO1")));
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        let temp = TempDir::new().unwrap();
        write_event(
            temp.path(),
            "2025-8-1/PRO1/a.json",
            &json!({"currentTerminal": "099-XYZ"}),
        );
        let store = LocalStore::new(temp.path());

        let records =
            collect_events(&store, &options(date(2025, 8, 1), date(2025, 8, 1))).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_root_prefix_scopes_the_scan() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write_event(root, "events/2025-8-1/PRO1/a.json", &json!({"currentTerminal": "010-CLT"}));
        write_event(root, "2025-8-1/PRO9/z.json", &json!({"currentTerminal": "010-CLT"}));
        let store = LocalStore::new(root);

        let mut opts = options(date(2025, 8, 1), date(2025, 8, 1));
        opts.root = "events".to_string();
        let records = collect_events(&store, &opts).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("_source_path"),
            Some(&json!("events/2025-8-1/PRO1/a.json"))
        );
    }
}
