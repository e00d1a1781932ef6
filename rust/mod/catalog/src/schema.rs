use mindfood_core::ServiceError;
use mindfood_sql::SQLStore;

/// Catalog tables. Timestamps are TEXT in `YYYY-MM-DD HH:MM:SS` form.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS universe (
    id      INTEGER PRIMARY KEY,
    title   TEXT NOT NULL,
    image   TEXT
);
CREATE TABLE IF NOT EXISTS category (
    id      INTEGER PRIMARY KEY,
    title   TEXT NOT NULL,
    image   TEXT
);
CREATE TABLE IF NOT EXISTS brand (
    id      INTEGER PRIMARY KEY,
    title   TEXT NOT NULL,
    image   TEXT
);
CREATE TABLE IF NOT EXISTS product (
    id          INTEGER PRIMARY KEY,
    title       TEXT NOT NULL,
    maker       TEXT NOT NULL DEFAULT '',
    price       REAL NOT NULL DEFAULT 0,
    stock       INTEGER NOT NULL DEFAULT 0,
    image       TEXT,
    rating      REAL,
    rating_num  INTEGER NOT NULL DEFAULT 0,
    created_on  TEXT NOT NULL,
    modified_on TEXT NOT NULL,
    universe_id INTEGER NOT NULL REFERENCES universe(id),
    category_id INTEGER NOT NULL REFERENCES category(id),
    brand_id    INTEGER NOT NULL REFERENCES brand(id)
);
CREATE INDEX IF NOT EXISTS idx_product_universe ON product(universe_id);
CREATE INDEX IF NOT EXISTS idx_product_category ON product(category_id);
CREATE INDEX IF NOT EXISTS idx_product_brand ON product(brand_id);
CREATE INDEX IF NOT EXISTS idx_product_created_on ON product(created_on);
CREATE INDEX IF NOT EXISTS idx_product_modified_on ON product(modified_on);
";

/// Create the catalog tables if they do not exist yet.
pub fn init_schema(db: &dyn SQLStore) -> Result<(), ServiceError> {
    db.exec(SCHEMA, &[])
        .map_err(|e| ServiceError::Storage(format!("catalog schema init: {e}")))?;
    Ok(())
}
