use crate::client::{Entry, EntryKind, StoreClient};
use crate::Result;
use std::path::PathBuf;

/// Directory-backed store for tests and offline runs.
///
/// Container-relative paths map onto paths under `root`. Listings are
/// sorted by name so traversal order matches the lexicographic order a
/// blob listing would return.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            self.root.clone()
        } else {
            self.root.join(trimmed)
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", trimmed, name)
    }
}

impl StoreClient for LocalStore {
    fn list(&self, prefix: &str) -> Result<Vec<Entry>> {
        let dir = self.resolve(prefix);
        let mut entries = Vec::new();
        for dir_entry in std::fs::read_dir(&dir)? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let kind = if dir_entry.file_type()?.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            entries.push(Entry {
                path: join(prefix, &name),
                kind,
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn list_dirs_capped(&self, prefix: &str, cap: usize) -> Result<Vec<String>> {
        let dirs = self
            .list(prefix)?
            .into_iter()
            .filter(|e| e.kind == EntryKind::Dir)
            .map(|e| e.path)
            .take(cap)
            .collect();
        Ok(dirs)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        Ok(std::fs::read(self.resolve(path))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_store() -> (TempDir, LocalStore) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::create_dir_all(root.join("2025-8-1/PRO1")).unwrap();
        std::fs::create_dir_all(root.join("2025-8-1/PRO2")).unwrap();
        std::fs::write(root.join("2025-8-1/PRO1/a.json"), b"{}").unwrap();
        std::fs::write(root.join("2025-8-1/readme.txt"), b"hi").unwrap();
        let store = LocalStore::new(root);
        (temp, store)
    }

    #[test]
    fn test_list_tags_files_and_dirs() {
        let (_temp, store) = sample_store();
        let entries = store.list("2025-8-1").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, "2025-8-1/PRO1");
        assert_eq!(entries[0].kind, EntryKind::Dir);
        assert_eq!(entries[2].path, "2025-8-1/readme.txt");
        assert_eq!(entries[2].kind, EntryKind::File);
    }

    #[test]
    fn test_list_empty_prefix_is_root() {
        let (_temp, store) = sample_store();
        let entries = store.list("").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "2025-8-1");
    }

    #[test]
    fn test_list_dirs_capped_truncates() {
        let (_temp, store) = sample_store();
        let dirs = store.list_dirs_capped("2025-8-1", 1).unwrap();
        assert_eq!(dirs, vec!["2025-8-1/PRO1".to_string()]);
    }

    #[test]
    fn test_read_round_trips() {
        let (_temp, store) = sample_store();
        assert_eq!(store.read("2025-8-1/PRO1/a.json").unwrap(), b"{}");
    }
}
