use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for the item endpoints.
///
/// The collection is reachable both with and without a trailing slash.
pub fn router() -> Router {
    Router::new()
        .route("/items/", get(items::list_items).post(items::create_item))
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:id",
            get(items::get_item).put(items::update_item).delete(items::delete_item),
        )
}
