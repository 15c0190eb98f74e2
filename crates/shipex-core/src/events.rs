use crate::Result;
use shipex_store::{EntryKind, StoreClient};

/// List `.json` objects directly under one entity directory, in listing
/// order. Suffix matching is case-insensitive; sub-directories are not
/// entered. A cap of 0 means unlimited.
pub fn list_event_files(
    store: &dyn StoreClient,
    entity_path: &str,
    cap: usize,
) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in store.list(entity_path)? {
        if entry.kind != EntryKind::File {
            continue;
        }
        if !entry.path.to_ascii_lowercase().ends_with(".json") {
            continue;
        }
        files.push(entry.path);
        if cap > 0 && files.len() >= cap {
            break;
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipex_store::LocalStore;
    use tempfile::TempDir;

    fn sample_store() -> (TempDir, LocalStore) {
        let temp = TempDir::new().unwrap();
        let pro = temp.path().join("2025-8-1/PRO1");
        std::fs::create_dir_all(pro.join("nested")).unwrap();
        std::fs::write(pro.join("a.json"), b"{}").unwrap();
        std::fs::write(pro.join("b.JSON"), b"{}").unwrap();
        std::fs::write(pro.join("c.txt"), b"no").unwrap();
        std::fs::write(pro.join("nested/d.json"), b"{}").unwrap();
        let store = LocalStore::new(temp.path());
        (temp, store)
    }

    #[test]
    fn test_json_suffix_case_insensitive_no_recursion() {
        let (_temp, store) = sample_store();
        let files = list_event_files(&store, "2025-8-1/PRO1", 0).unwrap();
        assert_eq!(
            files,
            vec![
                "2025-8-1/PRO1/a.json".to_string(),
                "2025-8-1/PRO1/b.JSON".to_string(),
            ]
        );
    }

    #[test]
    fn test_file_cap_stops_early() {
        let (_temp, store) = sample_store();
        let files = list_event_files(&store, "2025-8-1/PRO1", 1).unwrap();
        assert_eq!(files, vec!["2025-8-1/PRO1/a.json".to_string()]);
    }
}
