//! Transient file naming
//!
//! Both files live in the configured temp directory:
//! `advanced_search_<id>.xml` and `advanced_search_<id>_<YYYY-MM-DD-HHMMSS>.csv`.
//! Two runs for the same search at the same second would collide; only one
//! invocation at a time is supported.

use crate::domain::SearchId;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Timestamp layout used in CSV file names
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H%M%S";

/// Paths of the two files a run produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArtifacts {
    pub xml_path: PathBuf,
    pub csv_path: PathBuf,
}

impl RunArtifacts {
    /// Names the artifacts for `search_id`, stamping the CSV with `now`
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use jamf_report::core::pipeline::RunArtifacts;
    /// use jamf_report::domain::SearchId;
    /// use std::path::Path;
    ///
    /// let now = NaiveDate::from_ymd_opt(2026, 10, 19)
    ///     .unwrap()
    ///     .and_hms_opt(6, 5, 9)
    ///     .unwrap();
    /// let artifacts = RunArtifacts::new(Path::new("/tmp"), SearchId::new(12).unwrap(), now);
    ///
    /// assert_eq!(artifacts.xml_path, Path::new("/tmp/advanced_search_12.xml"));
    /// assert_eq!(artifacts.csv_file_name(), "advanced_search_12_2026-10-19-060509.csv");
    /// ```
    pub fn new(tmp_dir: &Path, search_id: SearchId, now: NaiveDateTime) -> Self {
        let stamp = now.format(TIMESTAMP_FORMAT);
        Self {
            xml_path: tmp_dir.join(format!("advanced_search_{search_id}.xml")),
            csv_path: tmp_dir.join(format!("advanced_search_{search_id}_{stamp}.csv")),
        }
    }

    /// File name of the CSV, as used for the email attachment
    pub fn csv_file_name(&self) -> String {
        self.csv_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
