//! Blog posts.

use std::fmt;

use crate::ids::PostSlug;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlogCategory {
    Strategy,
    Tactics,
    #[serde(rename = "Case Study")]
    CaseStudy,
    Platform,
}

impl BlogCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogCategory::Strategy => "Strategy",
            BlogCategory::Tactics => "Tactics",
            BlogCategory::CaseStudy => "Case Study",
            BlogCategory::Platform => "Platform",
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A long-form playbook article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: PostSlug,
    pub title: String,
    pub excerpt: String,
    pub category: BlogCategory,
    pub read_time_minutes: u32,
    pub published_at: NaiveDate,
    /// Body paragraphs.
    pub content: Vec<String>,
    pub key_takeaways: Vec<String>,
}

impl BlogPost {
    /// e.g. "Strategy · 9 min read · Oct 1, 2025".
    pub fn byline(&self) -> String {
        format!(
            "{} \u{00b7} {} min read \u{00b7} {}",
            self.category,
            self.read_time_minutes,
            self.published_at.format("%b %-d, %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post() {
        let json = r#"{
            "slug": "s",
            "title": "T",
            "excerpt": "E",
            "category": "Case Study",
            "readTimeMinutes": 9,
            "publishedAt": "2025-10-01",
            "content": ["p1"],
            "keyTakeaways": []
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.category, BlogCategory::CaseStudy);
        assert_eq!(post.published_at, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(post.byline(), "Case Study \u{00b7} 9 min read \u{00b7} Oct 1, 2025");
    }
}
