use std::num::NonZeroU32;
use std::sync::Arc;

use mindfood_core::ServiceError;
use mindfood_sql::SQLStore;
use serde::Deserialize;
use tracing::info;

use crate::model::{DateMode, Display, Filter, Listing, ListingQuery, Product, RatingMode};
use crate::sort::SortMode;
use crate::store::CatalogStore;

/// Widest grid a listing is laid out on, whatever `nb` is.
pub const GRID_MAX_COLUMNS: u32 = 6;

pub const DEFAULT_DATE_TITLE: &str = "Nouveautés";
pub const DEFAULT_RATING_TITLE: &str = "Livres les mieux notés";

/// Listing limits, loaded from the `[catalog]` section of the server config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// `nb` used when the caller does not pass one.
    pub default_nb: u32,
    /// Largest `nb` a caller may request.
    pub max_nb: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_nb: 4,
            max_nb: 100,
        }
    }
}

/// The two listing modules: newest products and rated products.
pub struct CatalogService {
    store: CatalogStore,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(db: Arc<dyn SQLStore>, config: CatalogConfig) -> Result<Self, ServiceError> {
        if config.default_nb == 0 || config.default_nb > config.max_nb {
            return Err(ServiceError::Validation(format!(
                "catalog config: default_nb must be in 1..={}, got {}",
                config.max_nb, config.default_nb
            )));
        }
        Ok(Self {
            store: CatalogStore::new(db)?,
            config,
        })
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Newest products ("Nouveautés").
    pub fn by_date(&self, query: &ListingQuery) -> Result<Listing, ServiceError> {
        let mode = DateMode::resolve(query.mode.as_deref());
        let nb = self.resolve_nb(query.nb)?;
        let filter = query.filter();
        let products = self.store.products_by_date(&filter, mode, nb)?;
        log_listing("by-date", &filter, mode, nb, products.len());
        Ok(listing(query, DEFAULT_DATE_TITLE, mode, nb, products))
    }

    /// Best (or worst) rated products.
    pub fn by_rating(&self, query: &ListingQuery) -> Result<Listing, ServiceError> {
        let mode = RatingMode::resolve(query.mode.as_deref());
        let nb = self.resolve_nb(query.nb)?;
        let filter = query.filter();
        let products = self.store.products_by_rating(&filter, mode, nb)?;
        log_listing("by-rating", &filter, mode, nb, products.len());
        Ok(listing(query, DEFAULT_RATING_TITLE, mode, nb, products))
    }

    fn resolve_nb(&self, nb: Option<i64>) -> Result<NonZeroU32, ServiceError> {
        let requested = nb.unwrap_or(i64::from(self.config.default_nb));
        if requested <= 0 {
            return Err(ServiceError::Validation(format!(
                "nb must be a positive integer, got {requested}"
            )));
        }
        if requested > i64::from(self.config.max_nb) {
            return Err(ServiceError::Validation(format!(
                "nb must be at most {}, got {requested}",
                self.config.max_nb
            )));
        }
        u32::try_from(requested)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| ServiceError::Validation(format!("nb out of range: {requested}")))
    }
}

fn log_listing(listing: &str, filter: &Filter, mode: impl SortMode, nb: NonZeroU32, count: usize) {
    info!(
        "catalog {listing}: universe={:?} category={:?} brand={:?} mode={} nb={nb} -> {count} products",
        filter.universe_id,
        filter.category_id,
        filter.brand_id,
        mode.name(),
    );
}

fn listing(
    query: &ListingQuery,
    default_title: &str,
    mode: impl SortMode,
    nb: NonZeroU32,
    products: Vec<Product>,
) -> Listing {
    let nb = nb.get();
    Listing {
        title: query
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_title.to_string()),
        display: Display::resolve(query.display.as_deref()),
        mode: mode.name(),
        nb,
        columns: nb.min(GRID_MAX_COLUMNS),
        products,
    }
}
