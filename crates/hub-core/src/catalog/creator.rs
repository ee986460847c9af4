//! Creator records.

use std::fmt;
use std::str::FromStr;

use crate::catalog::ProductRecord;
use crate::error::HubError;
use crate::ids::CreatorId;
use serde::{Deserialize, Serialize};

/// Vetting status assigned by the hub's review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VettingStatus {
    #[default]
    Verified,
    #[serde(rename = "Pending review")]
    PendingReview,
    Watchlist,
}

/// Visual tone used when rendering a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Neutral,
}

impl VettingStatus {
    pub const ALL: [VettingStatus; 3] = [
        VettingStatus::Verified,
        VettingStatus::PendingReview,
        VettingStatus::Watchlist,
    ];

    /// The status text as it appears in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            VettingStatus::Verified => "Verified",
            VettingStatus::PendingReview => "Pending review",
            VettingStatus::Watchlist => "Watchlist",
        }
    }

    /// Label shown on creator cards.
    pub fn badge_label(&self) -> &'static str {
        match self {
            VettingStatus::Verified => "Verified partner",
            other => other.as_str(),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            VettingStatus::Verified => Tone::Success,
            VettingStatus::Watchlist => Tone::Warning,
            VettingStatus::PendingReview => Tone::Neutral,
        }
    }
}

impl fmt::Display for VettingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VettingStatus {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "verified" => Ok(VettingStatus::Verified),
            "pending review" | "pending" => Ok(VettingStatus::PendingReview),
            "watchlist" => Ok(VettingStatus::Watchlist),
            _ => Err(HubError::UnknownOption {
                kind: "vetting status",
                value: s.to_string(),
            }),
        }
    }
}

/// How the creator runs their affiliate program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramType {
    #[serde(rename = "Etsy Affiliate")]
    EtsyAffiliate,
    Direct,
    Hybrid,
}

impl ProgramType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::EtsyAffiliate => "Etsy Affiliate",
            ProgramType::Direct => "Direct",
            ProgramType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commission terms offered to affiliates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateProgramDetails {
    pub program_type: ProgramType,
    /// Base commission, in percent.
    pub base_commission_rate: f64,
    /// Commission once performance targets are met, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boosted_commission_rate: Option<f64>,
    pub cookie_window_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_monthly_clicks: Option<u32>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
}

impl AffiliateProgramDetails {
    /// Commission text, e.g. `8% – 12%` or `6%` without a boost.
    pub fn commission_range(&self) -> String {
        match self.boosted_commission_rate {
            Some(boosted) => format!(
                "{}% \u{2013} {}%",
                format_rate(self.base_commission_rate),
                format_rate(boosted)
            ),
            None => format!("{}%", format_rate(self.base_commission_rate)),
        }
    }

    /// Short form used on cards, e.g. `8%+`.
    pub fn base_commission_label(&self) -> String {
        format!("{}%+", format_rate(self.base_commission_rate))
    }

    pub fn cookie_window_label(&self) -> String {
        format!("{}-day", self.cookie_window_days)
    }

    pub fn min_clicks_label(&self) -> Option<String> {
        self.min_monthly_clicks
            .map(|clicks| format!("{}+ clicks / month", clicks))
    }
}

fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format!("{}", rate)
    }
}

/// Social profile links.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinterest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Present links as `(platform, url)` pairs in a fixed order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Instagram", &self.instagram),
            ("TikTok", &self.tiktok),
            ("Pinterest", &self.pinterest),
            ("YouTube", &self.youtube),
            ("Website", &self.website),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.as_deref().map(|url| (name, url)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.links().is_empty()
    }
}

/// A vetted Etsy creator listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatorRecord {
    /// Stable slug, used in `/creators/:id`.
    pub id: CreatorId,
    pub shop_name: String,
    pub owner_name: String,
    pub shop_url: String,
    pub avatar_url: String,
    pub header_image_url: String,
    pub primary_category: String,
    pub tags: Vec<String>,
    pub location: String,
    /// Average rating in [0, 5].
    pub rating: f64,
    pub review_count: u64,
    pub sales: u64,
    pub short_description: String,
    pub bio: String,
    pub vetting_status: VettingStatus,
    pub vetting_notes: String,
    #[serde(default)]
    pub badges: Vec<String>,
    pub affiliate: AffiliateProgramDetails,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub top_products: Vec<ProductRecord>,
}

impl CreatorRecord {
    /// Lower-cased text the directory search matches against.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.shop_name,
            self.owner_name,
            self.short_description,
            self.bio,
            self.tags.join(" ")
        )
        .to_lowercase()
    }

    /// The product highlighted on the creator's card.
    pub fn featured_product(&self) -> Option<&ProductRecord> {
        self.top_products.first()
    }

    /// Shop link tagged with the hub's campaign parameters.
    pub fn shop_cta_url(&self) -> String {
        let separator = if self.shop_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}utm_source=affiliate_hub&utm_medium=profile_cta",
            self.shop_url, separator
        )
    }

    /// Check the record's data invariants.
    pub fn validate(&self) -> Result<(), HubError> {
        let invalid = |reason: &str| HubError::InvalidRecord {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.as_str().trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(invalid("rating must be between 0 and 5"));
        }
        if self.primary_category.trim().is_empty() {
            return Err(invalid("primary category is empty"));
        }
        if self.tags.is_empty() {
            return Err(invalid("at least one tag is required"));
        }
        if let Some(product) = self
            .top_products
            .iter()
            .find(|p| p.price.is_nan() || p.price < 0.0)
        {
            return Err(HubError::InvalidRecord {
                id: self.id.to_string(),
                reason: format!("product {} has a negative price", product.id),
            });
        }
        Ok(())
    }
}
