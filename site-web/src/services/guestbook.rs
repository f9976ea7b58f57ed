//! Guestbook store client
//!
//! The guestbook lives behind a GraphQL endpoint authenticated with a
//! static `x-api-key` header: one list query and one create mutation.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::json;
use shared::dto::{
    CreateEntryData, GraphQlRequest, GraphQlResponse, GuestbookEntry, ListEntriesData,
    NewGuestbookEntry,
};

use crate::state::config::SiteConfig;
use crate::utils::constants::GUESTBOOK_LIST_LIMIT;

const LIST_QUERY: &str = "\
query ListEntries($limit: Int) {
  listEntries(limit: $limit) {
    items { id name message country createdAt }
  }
}";

const CREATE_MUTATION: &str = "\
mutation CreateEntry($input: EntryInput!) {
  createEntry(input: $input) { id name message country createdAt }
}";

/// Fetch recent entries.
pub async fn list_entries(config: &SiteConfig) -> Result<Vec<GuestbookEntry>, String> {
    let data: ListEntriesData = execute(
        config,
        GraphQlRequest::new(LIST_QUERY, json!({ "limit": GUESTBOOK_LIST_LIMIT })),
    )
    .await?;
    Ok(data.list_entries.items)
}

/// Persist a new entry; returns it as stored (with id and timestamp).
pub async fn create_entry(
    config: &SiteConfig,
    input: &NewGuestbookEntry,
) -> Result<GuestbookEntry, String> {
    let data: CreateEntryData = execute(
        config,
        GraphQlRequest::new(CREATE_MUTATION, json!({ "input": input })),
    )
    .await?;
    Ok(data.create_entry)
}

async fn execute<T: DeserializeOwned>(
    config: &SiteConfig,
    request: GraphQlRequest,
) -> Result<T, String> {
    let endpoint = config
        .guestbook_endpoint
        .as_ref()
        .ok_or("guestbook endpoint not configured")?;

    let mut builder = Request::post(endpoint);
    if let Some(key) = &config.guestbook_api_key {
        builder = builder.header("x-api-key", key);
    }

    let response = builder
        .json(&request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("guestbook endpoint returned {}", response.status()));
    }

    let envelope: GraphQlResponse<T> = response.json().await.map_err(|e| e.to_string())?;
    if let Some(error) = envelope.errors.first() {
        return Err(error.message.clone());
    }
    envelope.data.ok_or_else(|| "empty guestbook response".to_string())
}
