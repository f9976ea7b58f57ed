//! # Guestbook Data Transfer Objects
//!
//! The guestbook lives in a remote GraphQL store authenticated with a static
//! `x-api-key` header. These types cover both directions: the generic
//! request/response envelopes and the entry payloads inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted guestbook entry, as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookEntry {
    pub id: String,
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for the create mutation. The store assigns `id` and `createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGuestbookEntry {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// GraphQL request envelope: a query document plus its variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

impl GraphQlRequest {
    pub fn new(query: &str, variables: serde_json::Value) -> Self {
        Self { query: query.to_string(), variables }
    }
}

/// GraphQL response envelope. A response may carry data, errors, or both.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload of the list query.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntriesData {
    #[serde(rename = "listEntries")]
    pub list_entries: EntryConnection,
}

/// AppSync-style connection wrapper around the listed items.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryConnection {
    pub items: Vec<GuestbookEntry>,
}

/// `data` payload of the create mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntryData {
    #[serde(rename = "createEntry")]
    pub create_entry: GuestbookEntry,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_entry_serializes_camel_case() {
        let input = NewGuestbookEntry {
            name: "Ada".to_string(),
            message: "hello".to_string(),
            country: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        // country omitted entirely when absent
        assert_eq!(value, json!({"name": "Ada", "message": "hello"}));
    }

    #[test]
    fn test_list_response_deserializes() {
        let body = json!({
            "data": {
                "listEntries": {
                    "items": [{
                        "id": "e1",
                        "name": "Grace Hopper",
                        "message": "nice stars",
                        "country": "US",
                        "createdAt": "2024-03-01T12:00:00Z"
                    }]
                }
            }
        });
        let resp: GraphQlResponse<ListEntriesData> =
            serde_json::from_value(body).unwrap();
        let items = resp.data.unwrap().list_entries.items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Grace Hopper");
        assert_eq!(items[0].country.as_deref(), Some("US"));
        assert!(resp.errors.is_empty());
    }

    #[test]
    fn test_error_response_deserializes_without_data() {
        let body = json!({
            "data": null,
            "errors": [{"message": "Unauthorized"}]
        });
        let resp: GraphQlResponse<CreateEntryData> =
            serde_json::from_value(body).unwrap();
        assert!(resp.data.is_none());
        assert_eq!(resp.errors[0].message, "Unauthorized");
    }
}
