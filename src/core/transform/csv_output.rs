//! CSV rendering of device records

use crate::domain::{DeviceRecord, TransformError, CSV_HEADER};
use std::io::Write;
use std::path::Path;

/// Write the header and one row per device
///
/// Records end in `\n` and fields are quoted only when needed, so identical
/// input always yields identical bytes.
pub fn write_devices<W: Write>(writer: W, devices: &[DeviceRecord]) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for device in devices {
        csv_writer.write_record(device.as_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render devices into an in-memory CSV string
pub fn render_devices(devices: &[DeviceRecord]) -> Result<String, TransformError> {
    let mut buffer = Vec::new();
    write_devices(&mut buffer, devices).map_err(|e| TransformError::CsvWrite {
        path: "<memory>".to_string(),
        message: e.to_string(),
    })?;
    String::from_utf8(buffer).map_err(|e| TransformError::CsvWrite {
        path: "<memory>".to_string(),
        message: e.to_string(),
    })
}

/// Create (or truncate) `path` and write the devices to it
pub fn write_devices_to_file(path: &Path, devices: &[DeviceRecord]) -> Result<(), TransformError> {
    let to_error = |message: String| TransformError::CsvWrite {
        path: path.display().to_string(),
        message,
    };

    let file = std::fs::File::create(path).map_err(|e| to_error(e.to_string()))?;
    write_devices(std::io::BufWriter::new(file), devices).map_err(|e| to_error(e.to_string()))
}
