//! The shipment event pipeline: scan date directories, walk entity
//! sub-directories, read event JSONs, keep records for one terminal, and
//! export the matches as a single CSV.
//!
//! Everything runs as one sequential pass in traversal order (date
//! ascending, listing order within a date). Only two failures are fatal:
//! an unsatisfiable credential shape and an inverted date range. Unreadable
//! objects and fast-path listing failures are logged and skipped.

pub mod collect;
pub mod entities;
pub mod error;
pub mod events;
pub mod export;
pub mod record;
pub mod scan;

pub use collect::{CollectOptions, collect_events};
pub use entities::list_entities;
pub use error::{Error, Result};
pub use events::list_event_files;
pub use export::write_csv;
pub use record::{FlatRecord, build_record, extract_terminal, flatten, matches_terminal};
pub use scan::{DateDir, DateRange, parse_date_dir, scan_date_dirs};
