//! Static editorial content: blog posts and FAQs.

mod blog;
mod faq;

pub use blog::{BlogCategory, BlogPost};
pub use faq::FaqItem;

use crate::error::HubError;

const BUNDLED_POSTS: &str = include_str!("../../data/blog_posts.json");
const BUNDLED_FAQS: &str = include_str!("../../data/faqs.json");

/// Blog posts and FAQ entries, in publication order.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    posts: Vec<BlogPost>,
    faqs: Vec<FaqItem>,
}

impl ContentLibrary {
    /// Content compiled into the crate.
    pub fn bundled() -> Result<Self, HubError> {
        Self::from_json(BUNDLED_POSTS, BUNDLED_FAQS)
    }

    pub fn from_json(posts: &str, faqs: &str) -> Result<Self, HubError> {
        Ok(Self::new(
            serde_json::from_str(posts)?,
            serde_json::from_str(faqs)?,
        ))
    }

    pub fn new(posts: Vec<BlogPost>, faqs: Vec<FaqItem>) -> Self {
        Self { posts, faqs }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn faqs(&self) -> &[FaqItem] {
        &self.faqs
    }

    pub fn find_post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug.as_str() == slug)
    }

    /// The post to show for `slug`. Falls back to the first post when the
    /// slug is absent or unknown; `None` only when there are no posts.
    pub fn select_post(&self, slug: Option<&str>) -> Option<&BlogPost> {
        slug.and_then(|slug| self.find_post(slug))
            .or_else(|| self.posts.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content() {
        let library = ContentLibrary::bundled().unwrap();
        assert_eq!(library.posts().len(), 3);
        assert_eq!(library.faqs().len(), 5);
    }

    #[test]
    fn test_select_post_fallback() {
        let library = ContentLibrary::bundled().unwrap();
        let first = library.posts()[0].slug.clone();

        assert_eq!(library.select_post(None).unwrap().slug, first);
        assert_eq!(library.select_post(Some("no-such-post")).unwrap().slug, first);
        assert_eq!(
            library
                .select_post(Some("case-study-digital-planners"))
                .unwrap()
                .category,
            BlogCategory::CaseStudy
        );
    }

    #[test]
    fn test_select_post_empty_library() {
        assert!(ContentLibrary::default().select_post(Some("x")).is_none());
    }
}
