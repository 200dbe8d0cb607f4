//! Historical accident record ingestion for model training.

mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::workflows::assessment::domain::AccidentRecord;

#[derive(Debug)]
pub enum HistoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownSeverity { line: usize, label: String },
}

impl std::fmt::Display for HistoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryImportError::Io(err) => {
                write!(f, "failed to read accident history: {}", err)
            }
            HistoryImportError::Csv(err) => write!(f, "invalid accident history CSV: {}", err),
            HistoryImportError::UnknownSeverity { line, label } => write!(
                f,
                "unknown severity label '{}' in accident history at line {}",
                label, line
            ),
        }
    }
}

impl std::error::Error for HistoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryImportError::Io(err) => Some(err),
            HistoryImportError::Csv(err) => Some(err),
            HistoryImportError::UnknownSeverity { .. } => None,
        }
    }
}

impl From<std::io::Error> for HistoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for HistoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads labelled accident records from a CSV export so the severity model
/// can be trained at startup.
pub struct AccidentHistoryImporter;

impl AccidentHistoryImporter {
    pub fn from_path(path: &Path) -> Result<Vec<AccidentRecord>, HistoryImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AccidentRecord>, HistoryImportError> {
        parser::parse_records(reader)
    }
}
