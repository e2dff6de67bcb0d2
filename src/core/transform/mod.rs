//! Advanced search XML to CSV conversion
//!
//! - [`xml`] pulls [`DeviceRecord`](crate::domain::DeviceRecord)s out of the search document
//! - [`csv_output`] renders them with the fixed five-column header

pub mod csv_output;
pub mod xml;

pub use csv_output::{render_devices, write_devices, write_devices_to_file};
pub use xml::{parse_devices, ParsedSearch, DEVICE_ELEMENT};

use crate::config::MissingFieldPolicy;
use crate::domain::{ReportError, Result};
use std::path::Path;

/// Counts reported by [`convert_xml_to_csv`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    /// Rows written, excluding the header
    pub devices: usize,
    /// Incomplete records dropped
    pub skipped: usize,
}

/// Convert the XML file at `xml_path` into a CSV file at `csv_path`
///
/// The XML file is removed once the CSV has been written. On any failure it
/// is left in place.
///
/// # Examples
///
/// ```no_run
/// use jamf_report::config::MissingFieldPolicy;
/// use jamf_report::core::transform::convert_xml_to_csv;
/// use std::path::Path;
///
/// # fn example() -> jamf_report::domain::Result<()> {
/// let report = convert_xml_to_csv(
///     Path::new("/tmp/advanced_search_12.xml"),
///     Path::new("/tmp/advanced_search_12_2026-10-19-060000.csv"),
///     MissingFieldPolicy::Fail,
/// )?;
/// println!("{} devices", report.devices);
/// # Ok(())
/// # }
/// ```
pub fn convert_xml_to_csv(
    xml_path: &Path,
    csv_path: &Path,
    policy: MissingFieldPolicy,
) -> Result<ConversionReport> {
    let xml = std::fs::read_to_string(xml_path).map_err(|e| {
        ReportError::Io(format!(
            "Failed to read search results {}: {e}",
            xml_path.display()
        ))
    })?;

    let parsed = parse_devices(&xml, policy)?;
    write_devices_to_file(csv_path, &parsed.devices)?;

    std::fs::remove_file(xml_path).map_err(|e| {
        ReportError::Io(format!(
            "Failed to remove search results {}: {e}",
            xml_path.display()
        ))
    })?;

    tracing::info!(
        devices = parsed.devices.len(),
        skipped = parsed.skipped,
        csv = %csv_path.display(),
        "Converted advanced search to CSV"
    );

    Ok(ConversionReport {
        devices: parsed.devices.len(),
        skipped: parsed.skipped,
    })
}
