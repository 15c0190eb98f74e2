use crate::record::FlatRecord;
use crate::Result;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Write all records to one CSV. The column set is the union of keys
/// across records in first-seen order; cells for keys a record lacks are
/// empty. Zero records still produce the file, containing an empty table.
pub fn write_csv(path: &Path, records: &[FlatRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if records.is_empty() {
        writer.flush()?;
        return Ok(());
    }

    let mut columns: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    for record in records {
        for (key, _) in &record.fields {
            if seen.insert(key.clone()) {
                columns.push(key.clone());
            }
        }
    }

    writer.write_record(&columns)?;
    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|column| record.get(column).map(render_cell).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Scalar leaves render bare; arrays (and any other structured leaf) render
/// as compact JSON.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
