use appwash_locations::{ExportSummary, LocationExporter, LocationLookup, LocationRecord, LocationSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

/// Scripted stand-in for the live client: ids present in `names` resolve,
/// everything else is a miss, and reaching `fail_at` raises a
/// transport-style error.
struct ScriptedSource {
    names: HashMap<u32, String>,
    fail_at: Option<u32>,
}

impl ScriptedSource {
    fn with_names(entries: &[(u32, &str)]) -> Self {
        Self {
            names: entries.iter().map(|(id, name)| (*id, name.to_string())).collect(),
            fail_at: None,
        }
    }
}

#[async_trait]
impl LocationSource for ScriptedSource {
    async fn get_location(&self, location_id: u32) -> Result<LocationLookup, Box<dyn std::error::Error>> {
        if Some(location_id) == self.fail_at {
            return Err("connection reset by peer".into());
        }
        match self.names.get(&location_id) {
            Some(name) => Ok(LocationLookup::Found(LocationRecord {
                id: location_id,
                name: name.clone(),
            })),
            None => Ok(LocationLookup::Missing),
        }
    }
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("output file should exist")
        .lines()
        .map(|line| line.to_string())
        .collect()
}

#[tokio::test]
async fn resolving_ids_are_written_in_ascending_order() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("locations.csv");

    let source = ScriptedSource::with_names(&[(7, "Sognsveien 77"), (1, "Kringsja"), (3, "Bjerke")]);
    let exporter = LocationExporter::new(0, 10);
    let summary = exporter.run(&source, &output).await.unwrap();

    assert_eq!(
        summary,
        ExportSummary {
            rows_written: 3,
            misses: 7
        }
    );
    assert_eq!(
        read_lines(&output),
        vec!["LOCATION,NAME", "1,Kringsja", "3,Bjerke", "7,Sognsveien 77"]
    );
}

#[tokio::test]
async fn misses_write_no_rows_and_do_not_stop_the_pass() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("locations.csv");

    // Only the last id in range resolves; every miss before it is skipped.
    let source = ScriptedSource::with_names(&[(4, "Sletten")]);
    let exporter = LocationExporter::new(0, 5);
    let summary = exporter.run(&source, &output).await.unwrap();

    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.misses, 4);
    assert_eq!(read_lines(&output), vec!["LOCATION,NAME", "4,Sletten"]);
}

#[tokio::test]
async fn header_is_always_the_first_row() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("locations.csv");

    let source = ScriptedSource::with_names(&[]);
    let exporter = LocationExporter::new(0, 3);
    exporter.run(&source, &output).await.unwrap();

    assert_eq!(read_lines(&output), vec!["LOCATION,NAME"]);
}

#[tokio::test]
async fn transport_error_aborts_with_earlier_rows_on_disk() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("locations.csv");

    let mut source = ScriptedSource::with_names(&[(0, "Adamstuen"), (1, "Ila"), (3, "Torshov")]);
    source.fail_at = Some(2);

    let exporter = LocationExporter::new(0, 5);
    let result = exporter.run(&source, &output).await;

    assert!(result.is_err());
    // Rows strictly before the failing id survive; nothing at or after it.
    assert_eq!(
        read_lines(&output),
        vec!["LOCATION,NAME", "0,Adamstuen", "1,Ila"]
    );
}

#[tokio::test]
async fn rerunning_appends_a_second_header_and_row_set() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("locations.csv");

    let source = ScriptedSource::with_names(&[(2, "Ulven")]);
    let exporter = LocationExporter::new(0, 4);
    exporter.run(&source, &output).await.unwrap();
    exporter.run(&source, &output).await.unwrap();

    // Re-running is not idempotent: the header and the rows duplicate.
    assert_eq!(
        read_lines(&output),
        vec!["LOCATION,NAME", "2,Ulven", "LOCATION,NAME", "2,Ulven"]
    );
}

#[tokio::test]
async fn names_with_commas_are_quoted() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("locations.csv");

    let source = ScriptedSource::with_names(&[(9, "Oslo, Sogn Studentby")]);
    let exporter = LocationExporter::new(9, 10);
    exporter.run(&source, &output).await.unwrap();

    assert_eq!(
        read_lines(&output),
        vec!["LOCATION,NAME", "9,\"Oslo, Sogn Studentby\""]
    );
}
