use std::num::NonZeroU32;

use mindfood_sql::{SelectBuilder, Statement, Value};

use crate::model::{DateMode, Filter, RatingMode};
use crate::sort::{SortMode, SortSpec};

/// Products joined with their three dimensions. Dimension columns are
/// aliased so they don't shadow `product.*`.
pub const PRODUCT_SELECT: &str = "\
SELECT product.*, \
universe.title AS universe_title, universe.image AS universe_image, \
category.title AS category_title, category.image AS category_image, \
brand.title AS brand_title, brand.image AS brand_image \
FROM product \
INNER JOIN universe ON universe.id = product.universe_id \
INNER JOIN category ON category.id = product.category_id \
INNER JOIN brand ON brand.id = product.brand_id";

/// Builds the read query behind both listing modules.
#[derive(Debug, Clone, Copy)]
pub struct ProductQueryBuilder {
    filter: Filter,
    sort: SortSpec,
    nb: NonZeroU32,
}

impl ProductQueryBuilder {
    pub fn new(filter: Filter, mode: impl SortMode, nb: NonZeroU32) -> Self {
        Self {
            filter,
            sort: mode.sort_spec(),
            nb,
        }
    }

    /// Newest products, by creation or modification date.
    pub fn by_date(filter: Filter, mode: DateMode, nb: NonZeroU32) -> Self {
        Self::new(filter, mode, nb)
    }

    /// Most (or least) popular products.
    pub fn by_rating(filter: Filter, mode: RatingMode, nb: NonZeroU32) -> Self {
        Self::new(filter, mode, nb)
    }

    pub fn build(&self) -> Statement {
        let mut select = SelectBuilder::new(PRODUCT_SELECT);
        for (column, id) in self.filter.predicates() {
            select = select.filter_eq(column, Value::Integer(id));
        }
        for &(expr, dir) in self.sort.terms {
            select = select.order_by(expr, dir);
        }
        select.limit(i64::from(self.nb.get())).build()
    }
}
