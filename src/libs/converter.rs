//! JSON and CSV interchange files for any serde-enabled record type.
//!
//! JSON files are a pretty-printed array of objects. CSV files carry a header
//! row followed by one record per line. Timestamps use the ISO-8601 form
//! chrono's serde support writes, independent of the user's locale.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dewit::libs::converter::{DataConverter, DataFormat};
//! use dewit::libs::task::TaskItem;
//! use std::path::Path;
//!
//! let tasks: Vec<TaskItem> = DataConverter::import_from_file(Path::new("backup.json"), DataFormat::Json)?;
//! DataConverter::export_to_file(&tasks, Path::new("backup.csv"), DataFormat::Csv)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::error::{DewitError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{self, Display, Formatter};
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DataFormat {
    #[default]
    Json,
    Csv,
}

impl DataFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Csv => "csv",
        }
    }

    /// Guesses the format from a file extension, ignoring case.
    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(|ext| ext.parse().ok())
    }
}

impl Display for DataFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DataFormat {
    type Err = DewitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(DataFormat::Json),
            "csv" => Ok(DataFormat::Csv),
            _ => Err(DewitError::InvalidInput(format!("Unsupported format '{s}'. Use json or csv."))),
        }
    }
}

pub struct DataConverter;

impl DataConverter {
    /// Writes `records` to `path`, replacing any existing file.
    pub fn export_to_file<T: Serialize>(records: &[T], path: &Path, format: DataFormat) -> Result<()> {
        match format {
            DataFormat::Json => {
                let json = serde_json::to_string_pretty(records)?;
                File::create(path)?.write_all(json.as_bytes())?;
            }
            DataFormat::Csv => {
                let mut wtr = csv::Writer::from_path(path)?;
                for record in records {
                    wtr.serialize(record)?;
                }
                wtr.flush()?;
            }
        }

        debug!(path = %path.display(), %format, count = records.len(), "exported records");
        Ok(())
    }

    pub fn import_from_file<T: DeserializeOwned>(path: &Path, format: DataFormat) -> Result<Vec<T>> {
        if !path.is_file() {
            return Err(DewitError::NotFound(format!("File not found: {}", path.display())));
        }

        let records = match format {
            DataFormat::Json => {
                let reader = BufReader::new(File::open(path)?);
                serde_json::from_reader(reader)?
            }
            DataFormat::Csv => {
                let mut rdr = csv::Reader::from_path(path)?;
                let mut records = Vec::new();
                for record in rdr.deserialize() {
                    records.push(record?);
                }
                records
            }
        };

        debug!(path = %path.display(), %format, "imported records");
        Ok(records)
    }

    /// Creates `dir` if needed and returns `dir/<stem>.<ext>`.
    pub fn output_path(dir: &Path, stem: &str, format: DataFormat) -> Result<std::path::PathBuf> {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
        Ok(dir.join(format!("{stem}.{}", format.extension())))
    }
}
