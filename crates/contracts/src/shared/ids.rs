use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque server-side identifier.
///
/// Primary keys are UUIDs in the ticket database, but several endpoints and
/// fixtures emit plain integers. Both forms are accepted and kept as text,
/// since the UI only ever echoes ids back as option values or query params.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => ObjectId(n.to_string()),
            Raw::Text(s) => ObjectId(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_from_number_and_string() {
        let a: ObjectId = serde_json::from_str("7").unwrap();
        let b: ObjectId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "7");
    }

    #[test]
    fn test_object_id_uuid_text() {
        let id: ObjectId =
            serde_json::from_str("\"1b4e28ba-2fa1-11d2-883f-0016d3cca427\"").unwrap();
        assert_eq!(id.to_string(), "1b4e28ba-2fa1-11d2-883f-0016d3cca427");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"1b4e28ba-2fa1-11d2-883f-0016d3cca427\""
        );
    }

    #[test]
    fn test_object_id_is_empty() {
        assert!(ObjectId::new("").is_empty());
        assert!(ObjectId::new("  ").is_empty());
        assert!(!ObjectId::new("3").is_empty());
    }
}
