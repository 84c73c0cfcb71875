use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use itemreg_core::{Entity, ItemId};
use itemreg_items::Page;

use crate::app::dto::{DeleteResponse, ErrorBody, ItemRequest, ItemResponse, ListParams};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

type Payload = Result<Json<ItemRequest>, JsonRejection>;
type IdParam = Result<Path<String>, PathRejection>;

fn item_id(param: IdParam) -> Result<ItemId, ApiError> {
    let Path(raw) = param?;
    Ok(raw.parse::<ItemId>()?)
}

/// Create an item; it is assigned the next id and appended to the collection.
#[utoipa::path(
    post,
    path = "/items/",
    tag = "items",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 422, description = "Malformed body", body = ErrorBody),
    )
)]
pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Payload,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload?;

    let item = services.items().create(body.into());
    tracing::info!(item_id = %item.id(), "item created");

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// List items in insertion order, `limit` at most, starting at offset `skip`.
#[utoipa::path(
    get,
    path = "/items/",
    tag = "items",
    params(ListParams),
    responses(
        (status = 200, description = "A page of items", body = Vec<ItemResponse>),
        (status = 422, description = "Malformed query", body = ErrorBody),
    )
)]
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let Query(params) = params?;
    let page = Page::from(params);

    let items = services
        .items()
        .list(page)
        .into_iter()
        .map(ItemResponse::from)
        .collect::<Vec<_>>();
    tracing::debug!(skip = page.skip, limit = page.limit, returned = items.len(), "items listed");

    Ok(Json(items))
}

/// Fetch a single item by id.
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    id: IdParam,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = item_id(id)?;

    let item = services.items().get(id).inspect_err(|_| {
        tracing::debug!(item_id = %id, "item not found");
    })?;

    Ok(Json(ItemResponse::from(item)))
}

/// Replace name and description of an existing item. Never creates.
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "The updated item", body = ItemResponse),
        (status = 404, description = "No item with this id", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
    )
)]
pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    id: IdParam,
    payload: Payload,
) -> Result<Json<ItemResponse>, ApiError> {
    let id = item_id(id)?;
    let Json(body) = payload?;

    let item = services.items().update(id, body.into())?;
    tracing::info!(item_id = %id, "item updated");

    Ok(Json(ItemResponse::from(item)))
}

/// Remove an item permanently. Its id is never issued again.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = DeleteResponse),
        (status = 404, description = "No item with this id", body = ErrorBody),
    )
)]
pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    id: IdParam,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = item_id(id)?;

    let item = services.items().delete(id)?;
    tracing::info!(item_id = %id, name = item.name(), "item deleted");

    Ok(Json(DeleteResponse::for_item(&item)))
}
