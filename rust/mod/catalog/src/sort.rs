//! Mode → ORDER BY tables.

use mindfood_sql::Direction;

use crate::model::{DateMode, RatingMode};

/// Ordered list of `(sort expression, direction)` terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub terms: &'static [(&'static str, Direction)],
}

const CREATED_DESC: SortSpec = SortSpec {
    terms: &[("product.created_on", Direction::Desc)],
};

const MODIFIED_DESC: SortSpec = SortSpec {
    terms: &[("product.modified_on", Direction::Desc)],
};

const POP_SCORE_DESC: SortSpec = SortSpec {
    terms: &[("(product.rating_num * product.rating)", Direction::Desc)],
};

const RATING_ASC: SortSpec = SortSpec {
    terms: &[
        ("product.rating", Direction::Asc),
        ("product.rating_num", Direction::Asc),
    ],
};

/// A listing mode that selects its ordering.
pub trait SortMode: Copy {
    fn sort_spec(self) -> SortSpec;

    fn name(self) -> &'static str;
}

impl SortMode for DateMode {
    fn sort_spec(self) -> SortSpec {
        match self {
            DateMode::Created => CREATED_DESC,
            DateMode::Modified => MODIFIED_DESC,
        }
    }

    fn name(self) -> &'static str {
        self.as_str()
    }
}

impl SortMode for RatingMode {
    fn sort_spec(self) -> SortSpec {
        match self {
            RatingMode::Best => POP_SCORE_DESC,
            RatingMode::Worst => RATING_ASC,
        }
    }

    fn name(self) -> &'static str {
        self.as_str()
    }
}
