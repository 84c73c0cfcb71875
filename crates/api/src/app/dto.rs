use core::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use itemreg_core::Entity;
use itemreg_items::{DEFAULT_LIMIT, Item, NewItem, Page};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and update requests.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ItemRequest> for NewItem {
    fn from(body: ItemRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
        }
    }
}

/// Query string of the list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of items to skip from the start.
    #[serde(default)]
    #[param(default = 0)]
    pub skip: usize,
    /// Maximum number of items to return. Negative values select nothing.
    #[serde(default = "default_limit", deserialize_with = "saturating_limit")]
    #[param(default = 10, value_type = i64)]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Any integer is a valid limit: negatives clamp to `0`, values past `usize`
/// clamp to `usize::MAX`. Only non-integer text is rejected.
fn saturating_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().parse::<i64>() {
        Ok(n) => Ok(usize::try_from(n).unwrap_or(if n < 0 { 0 } else { usize::MAX })),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(usize::MAX),
            IntErrorKind::NegOverflow => Ok(0),
            _ => Err(serde::de::Error::custom(format!("limit: {e}"))),
        },
    }
}

impl From<ListParams> for Page {
    fn from(params: ListParams) -> Self {
        Page::new(params.skip, params.limit)
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// An item as returned by the API. `description` is always present, `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id().get(),
            name: item.name().to_string(),
            description: item.description().map(str::to_string),
        }
    }
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn for_item(item: &Item) -> Self {
        Self {
            message: format!("Item '{}' with ID {} deleted successfully", item.name(), item.id()),
        }
    }
}

/// Error body for 404 and 422 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}
