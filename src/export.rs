// Enumeration exporter - sequential scan over a location id range with
// CSV append output
use crate::client::AppWashClient;
use crate::models::LocationLookup;
use crate::v_summary;
use async_trait::async_trait;
use std::fs::OpenOptions;
use std::path::Path;

/// Seam between the scan loop and the remote API, so tests can substitute
/// a scripted source for the live client.
#[async_trait]
pub trait LocationSource {
    async fn get_location(&self, location_id: u32) -> Result<LocationLookup, Box<dyn std::error::Error>>;
}

#[async_trait]
impl LocationSource for AppWashClient {
    async fn get_location(&self, location_id: u32) -> Result<LocationLookup, Box<dyn std::error::Error>> {
        AppWashClient::get_location(self, location_id).await
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows_written: u32,
    pub misses: u32,
}

pub struct LocationExporter {
    first_location_id: u32,
    location_id_limit: u32,
}

impl LocationExporter {
    pub fn new(first_location_id: u32, location_id_limit: u32) -> Self {
        Self {
            first_location_id,
            location_id_limit,
        }
    }

    /// Run the full scan, appending to `output_path`. The header row is
    /// written unconditionally, so re-running against the same file
    /// duplicates it. One lookup is in flight at a time, ids ascending;
    /// the first transport or decode error aborts the pass with the rows
    /// written so far already on disk.
    pub async fn run<S: LocationSource>(
        &self,
        source: &S,
        output_path: &Path,
    ) -> Result<ExportSummary, Box<dyn std::error::Error>> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)?;
        let mut writer = csv::Writer::from_writer(file);

        writer.write_record(["LOCATION", "NAME"])?;
        writer.flush()?;

        let mut summary = ExportSummary::default();

        for location_id in self.first_location_id..self.location_id_limit {
            match source.get_location(location_id).await? {
                LocationLookup::Found(record) => {
                    writer.write_record([record.id.to_string(), record.name.clone()])?;
                    writer.flush()?;
                    v_summary!("Writing: [{}, \"{}\"]", record.id, record.name);
                    summary.rows_written += 1;
                }
                LocationLookup::Missing => {
                    v_summary!("Location {} does not exist.", location_id);
                    summary.misses += 1;
                }
            }
        }

        Ok(summary)
    }
}
