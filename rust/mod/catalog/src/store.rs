use std::num::NonZeroU32;
use std::sync::Arc;

use chrono::NaiveDateTime;
use mindfood_core::ServiceError;
use mindfood_sql::{Row, SQLStore};
use tracing::debug;

use crate::model::{pop_score, DateMode, Dimension, Filter, Product, RatingMode, TIMESTAMP_FORMAT};
use crate::query::ProductQueryBuilder;
use crate::schema;

/// Read access to the product catalog, backed by SQLStore (SQLite).
pub struct CatalogStore {
    db: Arc<dyn SQLStore>,
}

impl CatalogStore {
    /// Create a CatalogStore and make sure the catalog tables exist.
    pub fn new(db: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        schema::init_schema(db.as_ref())?;
        Ok(Self { db })
    }

    /// Up to `nb` products, newest first by `mode`'s timestamp.
    pub fn products_by_date(
        &self,
        filter: &Filter,
        mode: DateMode,
        nb: NonZeroU32,
    ) -> Result<Vec<Product>, ServiceError> {
        self.fetch(ProductQueryBuilder::by_date(*filter, mode, nb))
    }

    /// Up to `nb` products ordered by popularity (`best`) or rating (`worst`).
    pub fn products_by_rating(
        &self,
        filter: &Filter,
        mode: RatingMode,
        nb: NonZeroU32,
    ) -> Result<Vec<Product>, ServiceError> {
        self.fetch(ProductQueryBuilder::by_rating(*filter, mode, nb))
    }

    fn fetch(&self, query: ProductQueryBuilder) -> Result<Vec<Product>, ServiceError> {
        let stmt = query.build();
        debug!("catalog query: {} ({} params)", stmt.sql, stmt.params.len());

        let rows = self
            .db
            .query_statement(&stmt)
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        debug!("catalog query returned {} rows", rows.len());

        rows.iter().map(row_to_product).collect()
    }
}

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

fn row_to_product(row: &Row) -> Result<Product, ServiceError> {
    let rating = row.get_f64("rating");
    let rating_num = req_i64(row, "rating_num")?;
    Ok(Product {
        id: req_i64(row, "id")?,
        title: req_str(row, "title")?.to_string(),
        maker: req_str(row, "maker")?.to_string(),
        price: req_f64(row, "price")?,
        stock: req_i64(row, "stock")?,
        image: opt_str(row, "image"),
        rating,
        rating_num,
        pop_score: pop_score(rating, rating_num),
        created_on: timestamp(row, "created_on")?,
        modified_on: timestamp(row, "modified_on")?,
        universe: Dimension {
            id: req_i64(row, "universe_id")?,
            title: req_str(row, "universe_title")?.to_string(),
            image: opt_str(row, "universe_image"),
        },
        category: Dimension {
            id: req_i64(row, "category_id")?,
            title: req_str(row, "category_title")?.to_string(),
            image: opt_str(row, "category_image"),
        },
        brand: Dimension {
            id: req_i64(row, "brand_id")?,
            title: req_str(row, "brand_title")?.to_string(),
            image: opt_str(row, "brand_image"),
        },
    })
}

fn req_i64(row: &Row, col: &str) -> Result<i64, ServiceError> {
    row.get_i64(col)
        .ok_or_else(|| ServiceError::Internal(format!("product row: missing integer column {col}")))
}

fn req_f64(row: &Row, col: &str) -> Result<f64, ServiceError> {
    row.get_f64(col)
        .ok_or_else(|| ServiceError::Internal(format!("product row: missing numeric column {col}")))
}

fn req_str<'a>(row: &'a Row, col: &str) -> Result<&'a str, ServiceError> {
    row.get_str(col)
        .ok_or_else(|| ServiceError::Internal(format!("product row: missing text column {col}")))
}

/// Empty strings count as "no image".
fn opt_str(row: &Row, col: &str) -> Option<String> {
    row.get_str(col)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn timestamp(row: &Row, col: &str) -> Result<NaiveDateTime, ServiceError> {
    let raw = req_str(row, col)?;
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|e| ServiceError::Internal(format!("product row: bad {col} {raw:?}: {e}")))
}
