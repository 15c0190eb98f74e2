use crate::Result;
use shipex_store::{EntryKind, StoreClient};
use tracing::warn;

/// List entity (PRO) directories under one date directory, in listing
/// order. A cap of 0 means unlimited.
///
/// With a positive cap the store's capped fast path is tried first so the
/// enumeration can stop at the cap instead of fetching every page. If it
/// fails for any reason the failure is logged and the generic one-level
/// listing is used instead.
pub fn list_entities(store: &dyn StoreClient, date_path: &str, cap: usize) -> Result<Vec<String>> {
    if cap > 0 {
        match store.list_dirs_capped(date_path, cap) {
            Ok(dirs) => return Ok(dirs),
            Err(err) => {
                warn!(
                    prefix = date_path,
                    error = %err,
                    "Capped directory listing failed, falling back to full listing"
                );
            }
        }
    }

    let mut dirs: Vec<String> = store
        .list(date_path)?
        .into_iter()
        .filter(|e| e.kind == EntryKind::Dir)
        .map(|e| e.path)
        .collect();
    if cap > 0 {
        dirs.truncate(cap);
    }
    Ok(dirs)
}
