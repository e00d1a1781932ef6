use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use mindfood_core::ServiceError;

use crate::model::{Listing, ListingQuery};
use crate::service::CatalogService;

type ServiceState = Arc<CatalogService>;

/// Build the catalog module router.
///
/// Routes:
/// - `GET /products/by-date`: newest products
/// - `GET /products/by-rating`: best/worst rated products
///
/// Both accept `universe_id`, `category_id`, `brand_id`, `mode`, `nb`,
/// `display` and `title` as query parameters.
pub fn router(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/products/by-date", get(products_by_date))
        .route("/products/by-rating", get(products_by_rating))
        .with_state(service)
}

/// Malformed query strings are answered with the same JSON error body as
/// every other validation failure.
fn listing_query(
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<ListingQuery, ServiceError> {
    query
        .map(|Query(q)| q)
        .map_err(|e| ServiceError::Validation(e.body_text()))
}

// ---------------------------------------------------------------------------
// GET /products/by-date
// ---------------------------------------------------------------------------

async fn products_by_date(
    State(service): State<ServiceState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<Listing>, ServiceError> {
    let query = listing_query(query)?;
    Ok(Json(service.by_date(&query)?))
}

// ---------------------------------------------------------------------------
// GET /products/by-rating
// ---------------------------------------------------------------------------

async fn products_by_rating(
    State(service): State<ServiceState>,
    query: Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<Listing>, ServiceError> {
    let query = listing_query(query)?;
    Ok(Json(service.by_rating(&query)?))
}
