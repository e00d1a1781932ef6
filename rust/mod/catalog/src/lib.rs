//! Product listing modules of the mindfood catalog.
//!
//! Two listings share one query shape: products joined with their universe,
//! category and brand, optionally filtered on those keys, ordered either by
//! date (`created`/`modified`) or by rating (`best`/`worst`), capped at `nb`.

pub mod api;
pub mod model;
pub mod query;
pub mod schema;
pub mod service;
pub mod sort;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use axum::Router;
use mindfood_core::{Module, ServiceError};
use mindfood_sql::SQLStore;

pub use model::{DateMode, Display, Filter, Listing, ListingQuery, Product, RatingMode};
pub use query::ProductQueryBuilder;
pub use service::{CatalogConfig, CatalogService};
pub use store::CatalogStore;

/// The catalog module: product listings by date and by rating.
pub struct CatalogModule {
    service: Arc<CatalogService>,
}

impl CatalogModule {
    /// Create the module and initialise the catalog schema.
    pub fn new(db: Arc<dyn SQLStore>, config: CatalogConfig) -> Result<Self, ServiceError> {
        let service = CatalogService::new(db, config)?;
        Ok(Self {
            service: Arc::new(service),
        })
    }

    pub fn service(&self) -> &Arc<CatalogService> {
        &self.service
    }
}

impl Module for CatalogModule {
    fn name(&self) -> &str {
        "catalog"
    }

    fn routes(&self) -> Router {
        api::router(Arc::clone(&self.service))
    }
}
