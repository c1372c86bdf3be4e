//! Demo HTTP application: item routes backed by the in-memory catalogue.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    routing::{get, post},
};

use crate::catalog::{Catalog, Item, NewItem};
use crate::mapping::StatusMapping;
use crate::response::Reply;

/// Build the router (public entrypoint used by `main.rs` and the tests).
pub fn build_app(catalog: Arc<Catalog>, mapping: StatusMapping) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/items", post(create_item))
        .route("/items/:id", get(get_item).delete(delete_item))
        .layer(Extension(catalog))
        .layer(Extension(mapping))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn get_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(mapping): Extension<StatusMapping>,
    Path(id): Path<u64>,
) -> Reply<Item> {
    Reply::new(catalog.get(id)).with_mapping(mapping)
}

pub async fn create_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(mapping): Extension<StatusMapping>,
    Json(body): Json<NewItem>,
) -> Reply<Item> {
    Reply::new(catalog.create(body)).with_mapping(mapping)
}

pub async fn delete_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(mapping): Extension<StatusMapping>,
    Path(id): Path<u64>,
) -> Reply<()> {
    Reply::from(catalog.remove(id)).with_mapping(mapping)
}
