//! Output formatting and persistence for report values.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

/// Logs a report value using Rust's debug pretty-print format.
pub fn print_pretty<T: std::fmt::Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a report value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes `value` as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    debug!(path = %path.display(), "JSON written");
    Ok(())
}

/// Writes `rows` to a CSV file at `path` with a header row.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "CSV written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{AdoptionTier, ShelterSummary};
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn summary(name: &str, adoptions: usize) -> ShelterSummary {
        ShelterSummary {
            shelter_name: name.to_string(),
            latitude: 37.5,
            longitude: 127.0,
            adoptions,
            adoption_tier: Some(AdoptionTier::from_adoptions(adoptions)),
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&summary("a", 1));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&summary("a", 1)).unwrap();
    }

    #[test]
    fn test_write_json() {
        let path = temp_path("shelter_report_test_output.json");
        let _ = fs::remove_file(&path);

        write_json(&path, &summary("보호소", 900)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["shelter_name"], "보호소");
        assert_eq!(value["adoption_tier"], "Good");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let path = temp_path("shelter_report_test_output.csv");
        let _ = fs::remove_file(&path);

        write_csv(&path, &[summary("a", 900), summary("b", 50)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "shelter_name,latitude,longitude,adoptions,adoption_tier"
        );
        assert!(lines[2].ends_with(",50,Bad"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_csv_overwrites() {
        let path = temp_path("shelter_report_test_overwrite.csv");

        write_csv(&path, &[summary("a", 1), summary("b", 2)]).unwrap();
        write_csv(&path, &[summary("c", 3)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        fs::remove_file(&path).unwrap();
    }
}
