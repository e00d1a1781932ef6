use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Storage format of `product.created_on` / `product.modified_on`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Dimensions and products
// ---------------------------------------------------------------------------

/// A classification dimension joined onto a product: universe, category or brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A product row joined with its universe, category and brand.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub maker: String,
    pub price: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Average rating; `None` when the product has not been rated.
    pub rating: Option<f64>,
    /// Number of ratings behind `rating`.
    pub rating_num: i64,
    /// `rating × rating_num`, the key of the best-rated listing.
    pub pop_score: Option<f64>,
    pub created_on: NaiveDateTime,
    pub modified_on: NaiveDateTime,

    pub universe: Dimension,
    pub category: Dimension,
    pub brand: Dimension,
}

/// Popularity metric used by the best-rated listing: `rating × rating_num`.
/// Unrated products have none.
pub fn pop_score(rating: Option<f64>, rating_num: i64) -> Option<f64> {
    rating.map(|r| r * rating_num as f64)
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Optional equality constraints on the product's foreign keys.
///
/// An id of `0` never matches a row and is treated as absent, the same way
/// the site's page controllers pass "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Filter {
    pub universe_id: Option<i64>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
}

impl Filter {
    pub fn universe(mut self, id: i64) -> Self {
        self.universe_id = Some(id);
        self
    }

    pub fn category(mut self, id: i64) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn brand(mut self, id: i64) -> Self {
        self.brand_id = Some(id);
        self
    }

    /// The present constraints as `(column, id)` pairs, in universe,
    /// category, brand order.
    pub fn predicates(&self) -> Vec<(&'static str, i64)> {
        [
            ("product.universe_id", self.universe_id),
            ("product.category_id", self.category_id),
            ("product.brand_id", self.brand_id),
        ]
        .into_iter()
        .filter_map(|(col, id)| match id {
            Some(id) if id != 0 => Some((col, id)),
            _ => None,
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

/// Ordering of the "new products" listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    /// Most recently created first.
    #[default]
    Created,
    /// Most recently modified first.
    Modified,
}

impl DateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created" => Some(Self::Created),
            "modified" => Some(Self::Modified),
            _ => None,
        }
    }

    /// Unknown or missing modes fall back to [`DateMode::Created`].
    pub fn resolve(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }
}

/// Ordering of the "rated products" listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingMode {
    /// Highest popularity score first.
    #[default]
    Best,
    /// Lowest rating first, fewest ratings breaking ties.
    Worst,
}

impl RatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Worst => "worst",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "best" => Some(Self::Best),
            "worst" => Some(Self::Worst),
            _ => None,
        }
    }

    /// Unknown or missing modes fall back to [`RatingMode::Best`].
    pub fn resolve(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }
}

/// Layout hint handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Display {
    #[default]
    #[serde(rename = "H-Blocks")]
    HBlocks,
    #[serde(rename = "V-Blocks")]
    VBlocks,
    #[serde(rename = "table")]
    Table,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HBlocks => "H-Blocks",
            Self::VBlocks => "V-Blocks",
            Self::Table => "table",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "H-Blocks" => Some(Self::HBlocks),
            "V-Blocks" => Some(Self::VBlocks),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    pub fn resolve(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Listing request / response
// ---------------------------------------------------------------------------

/// Options a page passes to a listing module.
///
/// Everything is optional; see `CatalogService` for the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub universe_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub brand_id: Option<i64>,
    /// `created`/`modified` for the date listing, `best`/`worst` for the rating listing.
    #[serde(default)]
    pub mode: Option<String>,
    /// Number of products to return.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nb: Option<i64>,
    /// `H-Blocks`, `V-Blocks` or `table`.
    #[serde(default)]
    pub display: Option<String>,
    /// Module heading.
    #[serde(default)]
    pub title: Option<String>,
}

/// Query strings carry `universe_id=` for "no filter"; treat an empty value
/// like a missing one.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid integer {s:?}: {e}"))),
    }
}

impl ListingQuery {
    pub fn filter(&self) -> Filter {
        Filter {
            universe_id: self.universe_id,
            category_id: self.category_id,
            brand_id: self.brand_id,
        }
    }
}

/// Display model of one listing module, ready for a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub title: String,
    pub display: Display,
    /// Resolved mode name (`created`, `modified`, `best`, `worst`).
    pub mode: &'static str,
    pub nb: u32,
    /// Grid columns on wide screens: `min(nb, 6)`.
    pub columns: u32,
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_predicates_follow_present_fields() {
        assert!(Filter::default().predicates().is_empty());
        assert_eq!(
            Filter::default().brand(3).predicates(),
            vec![("product.brand_id", 3)]
        );
        assert_eq!(
            Filter::default().universe(1).category(2).brand(3).predicates(),
            vec![
                ("product.universe_id", 1),
                ("product.category_id", 2),
                ("product.brand_id", 3),
            ]
        );
    }

    #[test]
    fn zero_id_is_absent() {
        let f = Filter::default().universe(0).category(4);
        assert_eq!(f.predicates(), vec![("product.category_id", 4)]);
        assert!(Filter::default().universe(0).is_empty());
    }

    #[test]
    fn modes_fall_back_to_defaults() {
        assert_eq!(DateMode::resolve(Some("modified")), DateMode::Modified);
        assert_eq!(DateMode::resolve(Some("MODIFIED")), DateMode::Created);
        assert_eq!(DateMode::resolve(None), DateMode::Created);
        assert_eq!(RatingMode::resolve(Some("worst")), RatingMode::Worst);
        assert_eq!(RatingMode::resolve(Some("created")), RatingMode::Best);
        assert_eq!(Display::resolve(Some("table")), Display::Table);
        assert_eq!(Display::resolve(Some("grid")), Display::HBlocks);
    }

    #[test]
    fn display_serializes_as_layout_name() {
        let json = serde_json::to_value(Display::VBlocks).unwrap();
        assert_eq!(json, serde_json::json!("V-Blocks"));
        assert_eq!(Display::VBlocks.as_str(), "V-Blocks");
    }

    #[test]
    fn pop_score_needs_a_rating() {
        assert_eq!(pop_score(Some(4.5), 120), Some(540.0));
        assert_eq!(pop_score(Some(3.0), 0), Some(0.0));
        assert_eq!(pop_score(None, 40), None);
    }
}
