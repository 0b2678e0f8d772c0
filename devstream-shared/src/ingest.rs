/// CSV ingest for the seeding pipeline
///
/// This module turns a headered CSV file into validated [`NewUser`] inserts.
/// Loading is forgiving at the row level: rows that can't be parsed or that
/// fail validation are skipped and counted, never fatal. File-level problems
/// (missing file, unreadable data) are errors.
///
/// # Row rules
///
/// - `user_id` empty or absent: accepted; a UUID is generated at insert time
/// - `name` or `email` empty: row skipped
/// - `age` missing, non-numeric, non-positive, or wider than three digits:
///   row skipped
/// - fractional ages are truncated toward zero ("35.7" becomes 35)
/// - anything failing [`NewUser`] validation (email shape, field lengths):
///   row skipped
///
/// # Example
///
/// ```no_run
/// use devstream_shared::ingest::load_users_csv;
/// use std::path::Path;
///
/// # fn example() -> Result<(), devstream_shared::ingest::IngestError> {
/// let report = load_users_csv(Path::new("user_data.csv"))?;
/// println!("{} rows loaded, {} skipped", report.records.len(), report.skipped);
/// # Ok(())
/// # }
/// ```

use crate::models::user::NewUser;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;
use validator::Validate;

/// Ingest error types
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The CSV file does not exist
    #[error("CSV file not found: {0}")]
    FileNotFound(PathBuf),

    /// The CSV file could not be read or parsed at the file level
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a single row was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowSkip {
    MissingName,
    MissingEmail,
    InvalidAge,
    FailedValidation(String),
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSkip::MissingName => write!(f, "missing name"),
            RowSkip::MissingEmail => write!(f, "missing email"),
            RowSkip::InvalidAge => write!(f, "missing or invalid age"),
            RowSkip::FailedValidation(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

/// One CSV row as it appears on disk, before any cleanup
///
/// Every field is optional so that sparse or ragged exports still parse;
/// the row rules decide what is usable.
#[derive(Debug, Deserialize)]
struct RawUserRow {
    #[serde(default)]
    user_id: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    email: Option<String>,

    /// Parsed as a float because exports sometimes carry "35.0"
    #[serde(default)]
    age: Option<f64>,
}

impl RawUserRow {
    /// Applies the row rules, producing a validated insert or a skip reason
    fn into_new_user(self) -> Result<NewUser, RowSkip> {
        let user_id = self
            .user_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let name = self
            .name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(RowSkip::MissingName)?;

        let email = self
            .email
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(RowSkip::MissingEmail)?;

        // Truncate toward zero, then require a positive three-digit-or-less age
        let age = self
            .age
            .map(f64::trunc)
            .filter(|a| *a >= 1.0 && *a <= 999.0)
            .map(|a| a as u16)
            .ok_or(RowSkip::InvalidAge)?;

        let user = NewUser {
            user_id,
            name,
            email,
            age,
        };

        user.validate()
            .map_err(|e| RowSkip::FailedValidation(e.to_string()))?;

        Ok(user)
    }
}

/// Outcome of loading a CSV file
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Usable rows, in file order
    pub records: Vec<NewUser>,

    /// Number of rows skipped by the row rules
    pub skipped: usize,
}

/// Loads user rows from a headered CSV file
///
/// The header row must name the columns (`user_id`, `name`, `email`, `age`);
/// column order doesn't matter and unknown columns are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file can't be opened or read
///
/// Individual bad rows are not errors; they are skipped, logged at WARN, and
/// counted in the returned report.
pub fn load_users_csv(path: &Path) -> Result<IngestReport, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in reader.deserialize::<RawUserRow>().enumerate() {
        // Header occupies the first line of the file
        let line = index + 2;

        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                warn!(line, error = %e, "Skipping unparseable CSV row");
                skipped += 1;
                continue;
            }
        };

        match raw.into_new_user() {
            Ok(user) => records.push(user),
            Err(reason) => {
                warn!(line, %reason, "Skipping invalid CSV row");
                skipped += 1;
            }
        }
    }

    Ok(IngestReport { records, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use uuid::Uuid;

    fn write_csv(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("user_data.csv");
        let mut file = std::fs::File::create(&path).expect("create csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        (dir, path)
    }

    #[test]
    fn test_load_valid_rows() {
        let (_dir, path) = write_csv(
            "user_id,name,email,age\n\
             00000000-0000-4000-8000-000000000001,Ada Lovelace,ada@example.com,36\n\
             00000000-0000-4000-8000-000000000002,Alan Turing,alan@example.com,41\n",
        );

        let report = load_users_csv(&path).expect("load csv");
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.records[0].name, "Ada Lovelace");
        assert_eq!(report.records[1].age, 41);
    }

    #[test]
    fn test_missing_user_id_left_for_generation() {
        let (_dir, path) = write_csv(
            "user_id,name,email,age\n\
             ,Grace Hopper,grace@example.com,85\n",
        );

        let report = load_users_csv(&path).expect("load csv");
        assert_eq!(report.records.len(), 1);
        assert!(report.records[0].user_id.is_none());

        // The record resolves to a valid generated UUID at insert time
        let record = report.records[0].clone().into_record();
        assert!(Uuid::parse_str(&record.user_id).is_ok());
    }

    #[test]
    fn test_rows_failing_rules_are_skipped() {
        let cases = [
            // (csv body line, expected reason)
            (",,bob@example.com,30", "missing name"),
            (",Bob,,30", "missing email"),
            (",Bob,bob@example.com,0", "non-positive age"),
            (",Bob,bob@example.com,", "missing age"),
            (",Bob,bob@example.com,1000", "age too wide"),
            (",Bob,not-an-email,30", "bad email"),
        ];

        for (body, reason) in cases {
            let (_dir, path) = write_csv(&format!("user_id,name,email,age\n{}\n", body));
            let report = load_users_csv(&path).expect("load csv");
            assert_eq!(report.records.len(), 0, "case should skip: {}", reason);
            assert_eq!(report.skipped, 1, "case should count skip: {}", reason);
        }
    }

    #[test]
    fn test_fractional_age_truncates() {
        let (_dir, path) = write_csv(
            "user_id,name,email,age\n\
             ,Margaret Hamilton,margaret@example.com,35.7\n",
        );

        let report = load_users_csv(&path).expect("load csv");
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].age, 35);
    }

    #[test]
    fn test_mixed_file_keeps_good_rows() {
        let (_dir, path) = write_csv(
            "user_id,name,email,age\n\
             ,Ada Lovelace,ada@example.com,36\n\
             ,,missing-name@example.com,20\n\
             ,Alan Turing,alan@example.com,41\n",
        );

        let report = load_users_csv(&path).expect("load csv");
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("does_not_exist.csv");

        let err = load_users_csv(&path).expect_err("should fail");
        assert!(matches!(err, IngestError::FileNotFound(_)));
        assert!(err.to_string().contains("not found"));
    }
}
