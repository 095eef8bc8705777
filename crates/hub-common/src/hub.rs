//! Hub record type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named hub with its outline as WKT.
///
/// Extra fields in the source JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubRecord {
    pub name: String,
    /// Hub outline, expected to be a WKT `POLYGON`.
    pub polygon: String,
}

impl HubRecord {
    pub fn new(name: impl Into<String>, polygon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            polygon: polygon.into(),
        }
    }
}

impl fmt::Display for HubRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Hub: name={}, polygon={}]", self.name, self.polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let hub = HubRecord::new("HUB", "POINT(1 2)");
        assert_eq!(hub.to_string(), "[Hub: name=HUB, polygon=POINT(1 2)]");
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let hub: HubRecord = serde_json::from_str(
            r#"{"name": "A", "polygon": "POINT(0 0)", "capacity": 12}"#,
        )
        .unwrap();
        assert_eq!(hub, HubRecord::new("A", "POINT(0 0)"));
    }

    #[test]
    fn test_deserialize_requires_polygon() {
        let result: Result<HubRecord, _> = serde_json::from_str(r#"{"name": "A"}"#);
        assert!(result.is_err());
    }
}
