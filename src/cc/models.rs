//! Shared Cloud Controller wire models

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::cc::pagination::{ContinuationToken, Page};

/// Guid given to records whose guid is not a UUID (system users)
pub const ARTIFICIAL_USER_GUID: Uuid = Uuid::nil();

/// Metadata block carried by every v2 resource
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Metadata {
    #[serde(deserialize_with = "lenient_guid")]
    pub guid: Uuid,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn lenient_guid<'de, D>(deserializer: D) -> std::result::Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Uuid::parse_str(&raw).unwrap_or(ARTIFICIAL_USER_GUID))
}

/// A v2 resource: metadata plus a resource-specific entity
///
/// Two resources are equal when their guids are equal.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

impl<E> Resource<E> {
    pub fn guid(&self) -> Uuid {
        self.metadata.guid
    }
}

impl<E> PartialEq for Resource<E> {
    fn eq(&self, other: &Self) -> bool {
        self.metadata.guid == other.metadata.guid
    }
}

impl<E> Eq for Resource<E> {}

/// Paginated list response
#[derive(Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageResponse<T> {
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub prev_url: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub resources: Vec<T>,
}

impl<T> From<PageResponse<T>> for Page<T> {
    fn from(response: PageResponse<T>) -> Self {
        let next = response
            .next_url
            .filter(|url| !url.is_empty())
            .map(ContinuationToken::new);
        Page::new(response.resources, next, response.total_results)
    }
}

/// Structured error body returned by the Cloud Controller
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CcErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
}

/// Request body carrying just a name (create/rename)
#[derive(Serialize, Debug)]
pub(crate) struct NameRequest<'a> {
    pub name: &'a str,
}
