//! Filter criteria for the creator directory.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::catalog::VettingStatus;
use crate::error::HubError;
use serde::{Deserialize, Serialize};

/// Category constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on the primary category.
    Only(String),
}

impl CategoryFilter {
    pub fn only(category: impl Into<String>) -> Self {
        CategoryFilter::Only(category.into())
    }

    pub fn display_name(&self) -> &str {
        match self {
            CategoryFilter::All => "All categories",
            CategoryFilter::Only(category) => category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    /// `""` and the literal `All` select every category; anything else is
    /// taken verbatim as an exact category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "All" => Ok(CategoryFilter::All),
            category => Ok(CategoryFilter::Only(category.to_string())),
        }
    }
}

/// Vetting status constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VettingFilter {
    #[default]
    All,
    Only(VettingStatus),
}

impl VettingFilter {
    pub fn display_name(&self) -> &'static str {
        match self {
            VettingFilter::All => "All",
            VettingFilter::Only(VettingStatus::Verified) => "Verified only",
            VettingFilter::Only(status) => status.as_str(),
        }
    }
}

impl FromStr for VettingFilter {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(VettingFilter::All)
        } else {
            s.parse().map(VettingFilter::Only)
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Total sales, high to low.
    #[default]
    Sales,
    /// Rating, high to low.
    Rating,
    /// Most recently vetted first. Records carry no vetting date, so this
    /// orders by sales.
    Recent,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Sales, SortMode::Rating, SortMode::Recent];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Sales => "sales",
            SortMode::Rating => "rating",
            SortMode::Recent => "recent",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Sales => "Total sales (high to low)",
            SortMode::Rating => "Rating (high to low)",
            SortMode::Recent => "Recently vetted",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sales" => Ok(SortMode::Sales),
            "rating" => Ok(SortMode::Rating),
            "recent" => Ok(SortMode::Recent),
            _ => Err(HubError::UnknownOption {
                kind: "sort mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Rating floors offered by the directory filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatingFloor {
    #[default]
    Any,
    FourPlus,
    FourHalfPlus,
    FourEightPlus,
}

impl RatingFloor {
    pub const ALL: [RatingFloor; 4] = [
        RatingFloor::Any,
        RatingFloor::FourPlus,
        RatingFloor::FourHalfPlus,
        RatingFloor::FourEightPlus,
    ];

    pub fn value(&self) -> f64 {
        match self {
            RatingFloor::Any => 0.0,
            RatingFloor::FourPlus => 4.0,
            RatingFloor::FourHalfPlus => 4.5,
            RatingFloor::FourEightPlus => 4.8,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RatingFloor::Any => "Any",
            RatingFloor::FourPlus => "4.0+",
            RatingFloor::FourHalfPlus => "4.5+",
            RatingFloor::FourEightPlus => "4.8+",
        }
    }
}

/// Everything the directory page lets a visitor choose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search; matched case-insensitively after trimming.
    pub search: String,
    pub category: CategoryFilter,
    /// Inclusive minimum rating. Values outside [0, 5] are accepted.
    pub min_rating: f64,
    pub vetting: VettingFilter,
    pub sort_by: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            min_rating: 0.0,
            vetting: VettingFilter::All,
            sort_by: SortMode::Sales,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_rating_floor(self, floor: RatingFloor) -> Self {
        self.with_min_rating(floor.value())
    }

    pub fn with_vetting(mut self, vetting: VettingFilter) -> Self {
        self.vetting = vetting;
        self
    }

    pub fn with_sort(mut self, sort_by: SortMode) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// The normalized search needle, or `None` when search is blank.
    pub fn needle(&self) -> Option<String> {
        let needle = self.search.trim();
        if needle.is_empty() {
            None
        } else {
            Some(needle.to_lowercase())
        }
    }
}
