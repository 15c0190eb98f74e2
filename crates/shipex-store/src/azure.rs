use crate::client::{Entry, EntryKind, StoreClient};
use crate::config::{Credentials, StoreConfig, parse_connection_string};
use crate::Result;
use futures::StreamExt;
use object_store::ObjectStore;
use object_store::azure::{AzureConfigKey, MicrosoftAzure, MicrosoftAzureBuilder};
use object_store::path::Path as StorePath;
use tokio::runtime::Runtime;

/// Azure Blob Storage backend.
///
/// Wraps the async `object_store` client behind a current-thread runtime so
/// every call blocks the caller; the pipeline is strictly sequential and
/// nothing else runs on the runtime.
#[derive(Debug)]
pub struct AzureStore {
    store: MicrosoftAzure,
    rt: Runtime,
}

impl AzureStore {
    /// Build a client for one container from a resolved credential shape.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let mut builder =
            MicrosoftAzureBuilder::new().with_container_name(config.container.clone());

        builder = match config.credentials()? {
            Credentials::ConnectionString(raw) => {
                let parts = parse_connection_string(&raw)?;
                let mut builder = builder.with_account(parts.account);
                if let Some(key) = parts.key {
                    builder = builder.with_access_key(key);
                }
                if let Some(sas) = parts.sas {
                    builder = builder.with_config(AzureConfigKey::SasKey, sas);
                }
                builder
            }
            Credentials::AccountKey { account, key } => {
                builder.with_account(account).with_access_key(key)
            }
            Credentials::SasToken { account, token } => builder
                .with_account(account)
                .with_config(AzureConfigKey::SasKey, token),
        };

        let store = builder.build()?;
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { store, rt })
    }
}

fn to_prefix(prefix: &str) -> Option<StorePath> {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(StorePath::from(trimmed))
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

impl StoreClient for AzureStore {
    fn list(&self, prefix: &str) -> Result<Vec<Entry>> {
        let location = to_prefix(prefix);
        let listing = self
            .rt
            .block_on(self.store.list_with_delimiter(location.as_ref()))?;

        let mut entries = Vec::new();
        for dir in listing.common_prefixes {
            entries.push(Entry {
                path: dir.as_ref().to_string(),
                kind: EntryKind::Dir,
            });
        }
        for object in listing.objects {
            entries.push(Entry {
                path: object.location.as_ref().to_string(),
                kind: EntryKind::File,
            });
        }
        Ok(entries)
    }

    fn list_dirs_capped(&self, prefix: &str, cap: usize) -> Result<Vec<String>> {
        let location = to_prefix(prefix);
        let base = match &location {
            Some(p) => format!("{}/", p.as_ref()),
            None => String::new(),
        };

        // Flat blob listing is lexicographic and lazily paged, so distinct
        // first-level prefixes arrive contiguously and dropping the stream
        // at the cap stops further page requests.
        self.rt.block_on(async {
            let mut stream = self.store.list(location.as_ref());
            let mut dirs: Vec<String> = Vec::new();

            while let Some(meta) = stream.next().await {
                let meta = meta?;
                let path = meta.location.as_ref();
                let Some(rel) = path.strip_prefix(&base) else {
                    continue;
                };
                let Some((first, _)) = rel.split_once('/') else {
                    // Object directly under the prefix, not a sub-directory.
                    continue;
                };
                let dir = join(prefix, first);
                if dirs.last().map(|d| d.as_str()) == Some(dir.as_str()) {
                    continue;
                }
                dirs.push(dir);
                if dirs.len() >= cap {
                    break;
                }
            }
            Ok(dirs)
        })
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let location = StorePath::from(path);
        let bytes = self.rt.block_on(async {
            let response = self.store.get(&location).await?;
            response.bytes().await
        })?;
        Ok(bytes.to_vec())
    }
}
