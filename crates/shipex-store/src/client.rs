use crate::Result;

/// Whether a listed entry is an object or a directory-like prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One entry from a one-level listing. Paths are container-relative,
/// `/`-separated, with no leading or trailing slash.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: String,
    pub kind: EntryKind,
}

impl Entry {
    /// Trailing path segment, e.g. `2025-8-11/PRO123` -> `PRO123`.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// The three store calls the pipeline needs. All calls block the caller;
/// `read` must fully consume and close the object before returning.
pub trait StoreClient {
    /// List immediate children of a prefix. An empty prefix lists the
    /// container root.
    fn list(&self, prefix: &str) -> Result<Vec<Entry>>;

    /// List up to `cap` immediate sub-directories of a prefix, stopping the
    /// underlying enumeration as soon as the cap is reached. Backends where
    /// this is no cheaper than `list` may implement it on top of `list`.
    fn list_dirs_capped(&self, prefix: &str, cap: usize) -> Result<Vec<String>>;

    /// Read one object in full.
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}
