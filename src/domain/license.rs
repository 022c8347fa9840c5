// SPDX-License-Identifier: MPL-2.0
//! License resource shapes as exchanged with the remote API.
//!
//! Dates are carried as the strings the server sends and accepts. The client
//! never validates them; malformed input is forwarded and judged server-side.

use serde::{Deserialize, Serialize};

/// A license as produced by the remote service.
///
/// The identifier is opaque and always comes from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(alias = "_id")]
    pub id: String,
    pub purchase_date: String,
    pub due_date: String,
    pub details: String,
    pub license_plan: String,
    pub duration: u32,
    pub status: String,
}

/// Submission payload for a new license: a [`License`] without its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLicenseRequest {
    pub purchase_date: String,
    pub due_date: String,
    pub details: String,
    pub license_plan: String,
    pub duration: u32,
    pub status: String,
}

/// Uniform `{ message, data? }` wrapper returned by every license endpoint.
///
/// `data` is optional on the wire; its absence is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub message: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    #[must_use]
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn license_accepts_underscore_id() {
        let license: License = serde_json::from_value(json!({
            "_id": "65a1",
            "purchase_date": "2024-01-01",
            "due_date": "2025-01-01",
            "details": "x",
            "license_plan": "pro",
            "duration": 12,
            "status": "active",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .expect("license should parse");

        assert_eq!(license.id, "65a1");
        assert_eq!(license.duration, 12);
    }

    #[test]
    fn request_serializes_with_snake_case_fields() {
        let request = CreateLicenseRequest {
            purchase_date: "2024-01-01".into(),
            due_date: "2025-01-01".into(),
            details: "x".into(),
            license_plan: "pro".into(),
            duration: 12,
            status: "active".into(),
        };

        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(value["license_plan"], "pro");
        assert_eq!(value["duration"], 12);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn envelope_without_data_parses() {
        let envelope: ResponseEnvelope<Vec<License>> =
            serde_json::from_str(r#"{"message":"nothing here"}"#).expect("parse envelope");
        assert_eq!(envelope.message, "nothing here");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_without_message_is_rejected() {
        let parsed = serde_json::from_str::<ResponseEnvelope<License>>(r#"{"data":null}"#);
        assert!(parsed.is_err());
    }
}
