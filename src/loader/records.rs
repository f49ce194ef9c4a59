//! CSV reader for the intake-record dataset.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::record::{AnimalRecord, NeuterStatus, ProcessState, Sex};

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap_or_else(|_| unreachable!()));

/// A single row as it appears in the source CSV. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "careNm")]
    care_nm: String,
    #[serde(rename = "happenDt")]
    happen_dt: String,
    #[serde(rename = "processState")]
    process_state: String,
    #[serde(rename = "neuterYn")]
    neuter_yn: String,
    #[serde(rename = "sexCd")]
    sex_cd: String,
    lat: f64,
    lng: f64,
}

/// Removes the first parenthesized segment from a shelter name.
///
/// `"Care(A)"` becomes `"Care"`. Surrounding whitespace is left alone.
pub fn strip_parenthesized(name: &str) -> String {
    PARENTHESIZED.replace(name, "").into_owned()
}

/// Parses an 8-digit `YYYYMMDD` date. Returns `None` on any other shape.
pub fn parse_happen_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").ok()
}

fn normalize(row: usize, raw: RawRecord) -> Result<AnimalRecord, LoadError> {
    let format_error = |message: String| LoadError::DataFormat { row, message };

    let happen_date = parse_happen_date(&raw.happen_dt)
        .ok_or_else(|| format_error(format!("invalid happenDt {:?}", raw.happen_dt)))?;
    let process_state = ProcessState::from_code(&raw.process_state)
        .ok_or_else(|| format_error(format!("unmapped processState {:?}", raw.process_state)))?;
    let neuter_status = NeuterStatus::from_code(&raw.neuter_yn)
        .ok_or_else(|| format_error(format!("unknown neuterYn code {:?}", raw.neuter_yn)))?;
    let sex = Sex::from_code(&raw.sex_cd)
        .ok_or_else(|| format_error(format!("unknown sexCd code {:?}", raw.sex_cd)))?;

    Ok(AnimalRecord {
        shelter_name: strip_parenthesized(&raw.care_nm),
        happen_date,
        process_state,
        process_state_class: process_state.class(),
        neuter_status,
        sex,
        latitude: raw.lat,
        longitude: raw.lng,
    })
}

/// Reads and normalizes every record from CSV input, preserving row order.
///
/// # Errors
///
/// Returns [`LoadError::Csv`] for malformed CSV and [`LoadError::DataFormat`]
/// for a bad date or a code outside the fixed tables. The first bad row aborts
/// the whole load.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<AnimalRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        records.push(normalize(index + 1, raw)?);
    }

    Ok(records)
}

/// Reads the record dataset at `path` without caching.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<AnimalRecord>, LoadError> {
    debug!("Reading record dataset");
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let records = parse_records(file)?;
    info!(rows = records.len(), "Record dataset loaded");
    Ok(records)
}
