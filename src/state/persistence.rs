use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Item;

/// On-disk state: both framings' lists plus the shared id counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizerState {
    #[serde(rename = "Items", default)]
    pub items: Vec<Item>,

    #[serde(rename = "Stocks", default)]
    pub stocks: Vec<Item>,

    #[serde(rename = "NextId", default)]
    pub next_id: u64,
}

/// Load state from a JSON file.
///
/// Records with non-positive or non-finite numbers are dropped so they can
/// never reach the selector; a warning reports how many were discarded.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<OptimizerState> {
    let content = fs::read_to_string(path)?;
    let mut state: OptimizerState = serde_json::from_str(&content)?;

    let before = state.items.len() + state.stocks.len();
    state.items.retain(Item::is_valid);
    state.stocks.retain(Item::is_valid);
    let dropped = before - state.items.len() - state.stocks.len();
    if dropped > 0 {
        eprintln!("Warning: dropped {} invalid entries from state file", dropped);
    }

    Ok(state)
}

/// Save state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &OptimizerState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

/// One row of a bulk-import CSV (`Name,Weight,Value` header).
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Weight")]
    pub weight: f64,

    #[serde(rename = "Value")]
    pub value: f64,
}

/// Read import rows from a CSV file.
///
/// Returns the parsed rows and the number of rows that failed to parse.
/// Weight/value validation happens later, at the list manager.
pub fn load_csv_items<P: AsRef<Path>>(path: P) -> Result<(Vec<CsvRecord>, usize)> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut rows = Vec::new();
    let mut skipped = 0;
    for record in reader.deserialize() {
        match record {
            Ok(row) => rows.push(row),
            Err(_) => skipped += 1,
        }
    }

    Ok((rows, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_state_roundtrip() {
        let state = OptimizerState {
            items: vec![Item::new(0, "Apples".to_string(), 10.0, 60.0)],
            stocks: vec![Item::new(1, "ACME".to_string(), 120.0, 150.0)],
            next_id: 2,
        };

        let file = NamedTempFile::new().unwrap();
        save_state(file.path(), &state).unwrap();

        let reloaded = load_state(file.path()).unwrap();
        assert_eq!(reloaded.items.len(), 1);
        assert_eq!(reloaded.items[0].name, "Apples");
        assert_eq!(reloaded.stocks.len(), 1);
        assert_eq!(reloaded.next_id, 2);
    }

    #[test]
    fn test_load_drops_invalid_entries() {
        let json = r#"{
            "Items": [
                {"Id": 0, "Name": "Good", "Weight": 5.0, "Value": 10.0},
                {"Id": 1, "Name": "ZeroWeight", "Weight": 0.0, "Value": 10.0}
            ],
            "Stocks": [],
            "NextId": 2
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let state = load_state(file.path()).unwrap();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Good");
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let state = load_state(file.path()).unwrap();
        assert!(state.items.is_empty());
        assert!(state.stocks.is_empty());
        assert_eq!(state.next_id, 0);
    }

    #[test]
    fn test_csv_import_skips_bad_rows() {
        let csv = "Name,Weight,Value\nApples,10.0,60.0\nBroken,not_a_number,5\nRice,20.0,100.0\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let (rows, skipped) = load_csv_items(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(skipped, 1);
        assert_eq!(rows[0].name, "Apples");
        assert_eq!(rows[1].name, "Rice");
    }
}
