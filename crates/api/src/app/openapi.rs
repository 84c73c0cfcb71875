use utoipa::OpenApi;

use crate::app::dto::{DeleteResponse, ErrorBody, ItemRequest, ItemResponse};
use crate::app::routes::{items, system};

/// OpenAPI document for the whole service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple CRUD API",
        description = "A simple API to manage items with POST, GET, PUT, and DELETE methods.",
        version = "0.1.0"
    ),
    paths(
        items::create_item,
        items::list_items,
        items::get_item,
        items::update_item,
        items::delete_item,
        system::health,
    ),
    components(schemas(ItemRequest, ItemResponse, DeleteResponse, ErrorBody)),
    tags(
        (name = "items", description = "Item registry operations"),
        (name = "system", description = "Service health"),
    )
)]
pub struct ApiDoc;
