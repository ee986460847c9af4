//! Catalog module.
//!
//! Contains creator records and the products they feature.

mod creator;
mod product;

pub use creator::{
    AffiliateProgramDetails, CreatorRecord, ProgramType, SocialLinks, Tone, VettingStatus,
};
pub use product::ProductRecord;

#[cfg(test)]
pub(crate) use creator::fixtures;
