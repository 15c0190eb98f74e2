//! Testing infrastructure for shipex integration tests.
//!
//! - `StoreWorld`: builds a container layout (date/entity/event-file) in a
//!   temp directory and runs the CLI against it via `--local-root`
//! - `fixtures`: sample event payload builders

pub mod fixtures;
pub mod world;

pub use world::StoreWorld;
