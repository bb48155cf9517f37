use anyhow::{anyhow, ensure, Context, Result};
use serde::Deserialize;
use std::{fs::File, io, path::Path};

use shared::{
    domain::{LaunchRecord, OutcomeClass, SiteSelection},
    protocol::DatasetSummary,
};

/// Immutable in-memory table of launch records plus the summaries computed
/// once at load time.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    min_payload_kg: f64,
    max_payload_kg: f64,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open launch dataset '{}'", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("failed to load launch dataset '{}'", path.display()))
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let row = row.with_context(|| format!("malformed launch record on line {line}"))?;
            let class = OutcomeClass::try_from(row.class)
                .map_err(|e| anyhow!("invalid class on line {line}: {}", e.message))?;
            records.push(LaunchRecord {
                launch_site: row.launch_site,
                payload_mass_kg: row.payload_mass_kg,
                class,
                booster_version_category: row.booster_version_category,
            });
        }

        Self::from_records(records)
    }

    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        ensure!(!records.is_empty(), "launch dataset contains no records");

        let mut sites: Vec<String> = Vec::new();
        let mut min_payload_kg = f64::INFINITY;
        let mut max_payload_kg = f64::NEG_INFINITY;
        for record in &records {
            ensure!(
                record.payload_mass_kg.is_finite(),
                "payload mass for site '{}' is not a finite number",
                record.launch_site
            );
            min_payload_kg = min_payload_kg.min(record.payload_mass_kg);
            max_payload_kg = max_payload_kg.max(record.payload_mass_kg);
            if !sites.iter().any(|site| site == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Ok(Self {
            records,
            sites,
            min_payload_kg,
            max_payload_kg,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn min_payload_kg(&self) -> f64 {
        self.min_payload_kg
    }

    pub fn max_payload_kg(&self) -> f64 {
        self.max_payload_kg
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records_for_site<'a>(
        &'a self,
        site: &'a SiteSelection,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| site.matches(&record.launch_site))
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            records: self.records.len(),
            sites: self.sites.clone(),
            min_payload_kg: self.min_payload_kg,
            max_payload_kg: self.max_payload_kg,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
