//! Advanced search XML parsing
//!
//! A Jamf advanced mobile device search looks like:
//!
//! ```xml
//! <advanced_mobile_device_search>
//!   <id>12</id>
//!   <mobile_devices>
//!     <size>1</size>
//!     <mobile_device>
//!       <id>1</id>
//!       <name>iPad-01</name>
//!       <udid>00008030-001A</udid>
//!       <Display_Name>Front Desk</Display_Name>
//!       <Activation_Lock_Enabled>true</Activation_Lock_Enabled>
//!     </mobile_device>
//!   </mobile_devices>
//! </advanced_mobile_device_search>
//! ```
//!
//! Every `mobile_device` below the root element is a record, whatever its
//! depth. Only direct children are read as fields.

use crate::config::MissingFieldPolicy;
use crate::domain::{DeviceRecord, TransformError, XML_FIELDS};
use roxmltree::{Document, Node};

/// Element name of one device record
pub const DEVICE_ELEMENT: &str = "mobile_device";

/// Outcome of parsing one search document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSearch {
    /// Complete records, in document order
    pub devices: Vec<DeviceRecord>,
    /// Records dropped under [`MissingFieldPolicy::Skip`]
    pub skipped: usize,
}

/// Extract device records from the search XML
///
/// # Errors
///
/// - [`TransformError::MalformedXml`] if the document does not parse
/// - [`TransformError::MissingField`] for an incomplete record under
///   [`MissingFieldPolicy::Fail`]
pub fn parse_devices(
    xml: &str,
    policy: MissingFieldPolicy,
) -> Result<ParsedSearch, TransformError> {
    let doc = Document::parse(xml).map_err(|e| TransformError::MalformedXml(e.to_string()))?;
    let root = doc.root_element();

    let mut parsed = ParsedSearch::default();

    let records = root
        .descendants()
        .filter(|node| *node != root && node.is_element() && node.has_tag_name(DEVICE_ELEMENT));

    for (index, node) in records.enumerate() {
        match extract_record(node) {
            Ok(record) => parsed.devices.push(record),
            Err(field) => match policy {
                MissingFieldPolicy::Fail => {
                    return Err(TransformError::MissingField { index, field });
                }
                MissingFieldPolicy::Skip => {
                    tracing::warn!(index, field, "Skipping incomplete mobile_device record");
                    parsed.skipped += 1;
                }
            },
        }
    }

    Ok(parsed)
}

/// Reads the five fields, or names the first one that is absent
fn extract_record(node: Node<'_, '_>) -> Result<DeviceRecord, &'static str> {
    let mut values: [String; 5] = Default::default();
    for (slot, field) in values.iter_mut().zip(XML_FIELDS) {
        let child = node
            .children()
            .find(|child| child.is_element() && child.has_tag_name(field))
            .ok_or(field)?;
        *slot = child.text().unwrap_or_default().to_string();
    }
    Ok(DeviceRecord::from_fields(values))
}
