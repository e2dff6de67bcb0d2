//! Domain identifier types with validation

use std::fmt;
use std::str::FromStr;

/// Advanced mobile device search identifier
///
/// Jamf Pro addresses saved searches by a positive integer id.
///
/// # Examples
///
/// ```
/// use jamf_report::domain::ids::SearchId;
/// use std::str::FromStr;
///
/// let search_id = SearchId::from_str("42").unwrap();
/// assert_eq!(search_id.value(), 42);
/// assert_eq!(search_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchId(u64);

impl SearchId {
    /// Creates a new SearchId
    ///
    /// Returns `Err` for zero, which Jamf never assigns.
    pub fn new(id: u64) -> Result<Self, String> {
        if id == 0 {
            return Err("Search ID must be a positive integer".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SearchId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Search ID cannot be empty".to_string());
        }
        let id: u64 = trimmed
            .parse()
            .map_err(|_| format!("Search ID must be numeric, got '{s}'"))?;
        Self::new(id)
    }
}
