//! Object-store access for the shipex pipeline.
//!
//! The pipeline only ever needs three calls: a one-level listing with
//! file/directory tags, a capped directory listing, and a full object read.
//! `StoreClient` captures those, `AzureStore` backs them with Azure Blob
//! Storage, and `LocalStore` backs them with a directory on disk for tests
//! and offline runs.

pub mod azure;
pub mod client;
pub mod config;
pub mod error;
pub mod local;

pub use azure::AzureStore;
pub use client::{Entry, EntryKind, StoreClient};
pub use config::{Credentials, StoreConfig};
pub use error::{Error, Result};
pub use local::LocalStore;
