use crate::{Error, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use shipex_store::{EntryKind, StoreClient};

// Date folders are named YYYY-M-D with no zero-padding enforced, so both
// `2025-8-1` and `2025-08-01` name the same day.
static DATE_DIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap());

/// Inclusive calendar date range. Validated at construction, before any
/// store I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::Range(format!(
                "end date {} must be on/after start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One date directory retained by the scan.
#[derive(Debug, Clone)]
pub struct DateDir {
    pub path: String,
    pub date: NaiveDate,
}

/// Parse a folder name like `2025-8-11` into a date. Names that do not
/// match the pattern, or match it but name no real calendar day, yield
/// `None` -- they are simply not date folders.
pub fn parse_date_dir(name: &str) -> Option<NaiveDate> {
    let caps = DATE_DIR_RE.captures(name)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// List date directories under `root` whose date falls inside `range`,
/// ascending by date.
pub fn scan_date_dirs(
    store: &dyn StoreClient,
    root: &str,
    range: &DateRange,
) -> Result<Vec<DateDir>> {
    let mut dirs = Vec::new();
    for entry in store.list(root)? {
        if entry.kind != EntryKind::Dir {
            continue;
        }
        let Some(date) = parse_date_dir(entry.name()) else {
            continue;
        };
        if range.contains(date) {
            dirs.push(DateDir {
                path: entry.path,
                date,
            });
        }
    }
    dirs.sort_by_key(|d| d.date);
    Ok(dirs)
}
