//! Mobile device record reported by an advanced search

/// CSV header, in output column order
pub const CSV_HEADER: [&str; 5] = ["ID", "Name", "Display Name", "UDID", "Activation Lock Enabled"];

/// XML child element names, in the same order as [`CSV_HEADER`]
pub const XML_FIELDS: [&str; 5] = ["id", "name", "Display_Name", "udid", "Activation_Lock_Enabled"];

/// One `<mobile_device>` entry of an advanced search result
///
/// Every value is kept as the text Jamf returned. No type coercion is done,
/// so `activation_lock_enabled` stays `"true"`/`"false"` as reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub udid: String,
    pub activation_lock_enabled: String,
}

impl DeviceRecord {
    /// Builds a record from values ordered like [`XML_FIELDS`]
    pub fn from_fields([id, name, display_name, udid, activation_lock_enabled]: [String; 5]) -> Self {
        Self {
            id,
            name,
            display_name,
            udid,
            activation_lock_enabled,
        }
    }

    /// Values ordered like [`CSV_HEADER`]
    pub fn as_row(&self) -> [&str; 5] {
        [
            &self.id,
            &self.name,
            &self.display_name,
            &self.udid,
            &self.activation_lock_enabled,
        ]
    }
}
