use std::path::Path;

use skyfare_core::flight::FlightRecord;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read flight data from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// The historical fare table, loaded once at startup and never mutated.
/// Requests share it behind an `Arc`; every read is over the same snapshot.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<FlightRecord>,
}

impl Dataset {
    /// Load and normalize the CSV fare table. Any read or parse failure is
    /// fatal: without the table the process cannot serve.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let read_err = |source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        };

        let mut reader = csv::Reader::from_path(path).map_err(read_err)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: FlightRecord = row.map_err(read_err)?;
            records.push(record);
        }

        let dataset = Self::from_records(records);
        tracing::info!(
            rows = dataset.len(),
            path = %path.display(),
            "flight dataset loaded"
        );
        Ok(dataset)
    }

    /// Wrap already-materialized records, applying the same normalization as
    /// `load`. Test fixtures and fakes come through here.
    pub fn from_records(mut records: Vec<FlightRecord>) -> Self {
        for record in &mut records {
            record.normalize();
        }
        Self { records }
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
