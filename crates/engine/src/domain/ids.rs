#![forbid(unsafe_code)]

use std::{borrow::Borrow, fmt};

/// Stable short code or name of a competitor within one session.
///
/// Never empty: [`DriverId::new`] refuses blank identifiers.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(String);

impl DriverId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.len() == id.len() {
            Some(Self(id))
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DriverId").field(&self.0).finish()
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DriverId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DriverId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_ids() {
        assert!(DriverId::new("").is_none());
        assert!(DriverId::new("   ").is_none());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id = DriverId::new(" HAM ").unwrap();
        assert_eq!(id.as_str(), "HAM");
        assert_eq!(id.to_string(), "HAM");
    }
}
