use serde::{Deserialize, Serialize};

/// Identifier carried by a row's controls in `data-id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct RecordId(pub String);

impl RecordId {
    /// Returns `None` for blank ids; a row without an id cannot be edited or deleted.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The editable fields of one registrant. Also the update request body.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RecordFields {
    pub nombre: String,
    pub email: String,
    pub programa: String,
}

/// Reply from the update and delete endpoints.
///
/// Only `success` is required. Error replies from the server use `error`,
/// some handlers use `message`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn reason(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

const TOTAL_PREFIX: &str = "Total";

/// The `Total: N` badge above the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TotalCounter(pub i64);

impl TotalCounter {
    /// Parses `Total: N`. Anything after the first `": "` must be an integer.
    pub fn parse(text: &str) -> Option<Self> {
        let (_, n) = text.trim().split_once(": ")?;
        n.trim().parse::<i64>().ok().map(Self)
    }

    pub fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn render(self) -> String {
        format!("{TOTAL_PREFIX}: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_serializes_spanish_keys() {
        let body = RecordFields {
            nombre: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            programa: "CS".to_string(),
        };
        let v = serde_json::to_value(&body).expect("should serialize");
        assert_eq!(v, serde_json::json!({"nombre": "Ana", "email": "ana@x.com", "programa": "CS"}));
    }

    #[test]
    fn test_mutation_response_minimal_contract() {
        let parsed: MutationResponse =
            serde_json::from_str(r#"{"success": true}"#).expect("should parse");
        assert!(parsed.success);
        assert!(parsed.reason().is_none());
    }

    #[test]
    fn test_mutation_response_error_shape() {
        let parsed: MutationResponse =
            serde_json::from_str(r#"{"error": "Acceso denegado"}"#).expect("should parse");
        assert!(!parsed.success);
        assert_eq!(parsed.reason(), Some("Acceso denegado"));
    }

    #[test]
    fn test_mutation_response_prefers_error_over_message() {
        let parsed: MutationResponse = serde_json::from_str(
            r#"{"success": false, "error": "dup", "message": "ignored", "extra": 1}"#,
        )
        .expect("should parse");
        assert_eq!(parsed.reason(), Some("dup"));
    }

    #[test]
    fn test_record_id_rejects_blank() {
        assert!(RecordId::parse("   ").is_none());
        assert_eq!(RecordId::parse(" 42 ").map(|id| id.0), Some("42".to_string()));
    }

    #[test]
    fn test_total_counter_decrements_by_one() {
        let total = TotalCounter::parse("Total: 10").expect("should parse");
        assert_eq!(total.decremented().render(), "Total: 9");
    }

    #[test]
    fn test_total_counter_stops_at_i64_min() {
        let total = TotalCounter::parse("Total: -9223372036854775808").expect("should parse");
        assert_eq!(total.decremented(), TotalCounter(i64::MIN));
    }

    #[test]
    fn test_total_counter_rejects_unexpected_text() {
        assert!(TotalCounter::parse("Total 10").is_none());
        assert!(TotalCounter::parse("Total: diez").is_none());
        assert_eq!(TotalCounter::parse("  Total: 3 "), Some(TotalCounter(3)));
    }
}
