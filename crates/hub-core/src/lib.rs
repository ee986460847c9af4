//! Domain logic for Affiliate Hub, a curated directory of Etsy creators for
//! affiliate marketers.
//!
//! - **Catalog**: creator records, affiliate terms and featured products
//! - **Directory**: filtering, ordering and category extraction
//! - **Content**: blog posts and FAQs
//! - **Forms**: onboarding, contact and creator application flows
//! - **Routing**: mapping site paths to pages
//!
//! # Example
//!
//! ```rust
//! use hub_core::prelude::*;
//!
//! let store = CreatorStore::bundled().unwrap();
//! let criteria = FilterCriteria::new()
//!     .with_category(CategoryFilter::only("Jewelry"))
//!     .with_sort(SortMode::Sales);
//!
//! let results = store.query(&criteria);
//! assert_eq!(results.ids(), ["caitlynminimalist", "yakutum"]);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod content;
pub mod directory;
pub mod display;
pub mod forms;
pub mod routing;
pub mod store;

pub use error::HubError;
pub use ids::*;
pub use money::{Currency, Money};
pub use store::CreatorStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::HubError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::store::CreatorStore;

    // Catalog
    pub use crate::catalog::{
        AffiliateProgramDetails, CreatorRecord, ProductRecord, ProgramType, SocialLinks, Tone,
        VettingStatus,
    };

    // Directory
    pub use crate::directory::{
        CategoryFilter, DirectoryResults, FilterCriteria, RatingFloor, SortMode, VettingFilter,
    };

    // Content
    pub use crate::content::{BlogCategory, BlogPost, ContentLibrary, FaqItem};

    // Forms
    pub use crate::forms::{
        ContactForm, ContactRole, CreatorApplicationForm, FormFlow, FormState, OnboardingForm,
    };

    pub use crate::routing::Route;
}
