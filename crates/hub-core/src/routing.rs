//! Page routing.
//!
//! Paths may arrive with a hash-router prefix (`#/creators`), trailing
//! slashes or a query string; all of those resolve to the same page.

use std::fmt;

use crate::catalog::CreatorRecord;
use crate::ids::CreatorId;
use crate::store::CreatorStore;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Directory,
    CreatorProfile(CreatorId),
    AffiliateOnboarding,
    Blog,
    Contact,
    PrivacyPolicy,
    TermsOfService,
    /// Anything unrecognised, with the normalized path.
    NotFound(String),
}

impl Route {
    /// Resolve a path to a route.
    pub fn parse(path: &str) -> Self {
        let path = normalize(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["creators"] => Route::Directory,
            ["creators", id] => Route::CreatorProfile(CreatorId::new(*id)),
            ["affiliate-onboarding"] => Route::AffiliateOnboarding,
            ["blog"] => Route::Blog,
            ["contact"] => Route::Contact,
            ["privacy-policy"] => Route::PrivacyPolicy,
            ["terms-of-service"] => Route::TermsOfService,
            _ => Route::NotFound(path),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Directory => "/creators".to_string(),
            Route::CreatorProfile(id) => format!("/creators/{}", id),
            Route::AffiliateOnboarding => "/affiliate-onboarding".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::PrivacyPolicy => "/privacy-policy".to_string(),
            Route::TermsOfService => "/terms-of-service".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Directory => "Creator Discovery",
            Route::CreatorProfile(_) => "Creator Profile",
            Route::AffiliateOnboarding => "Affiliate Onboarding",
            Route::Blog => "Blog",
            Route::Contact => "Contact & Support",
            Route::PrivacyPolicy => "Privacy Policy",
            Route::TermsOfService => "Terms of Service",
            Route::NotFound(_) => "Page not found",
        }
    }

    /// The creator a profile route points at. `None` for other routes and
    /// for ids the store does not know.
    pub fn resolve_creator<'a>(&self, store: &'a CreatorStore) -> Option<&'a CreatorRecord> {
        match self {
            Route::CreatorProfile(id) => store.find(id.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn normalize(path: &str) -> String {
    let path = path.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/creators"), Route::Directory);
        assert_eq!(Route::parse("/blog"), Route::Blog);
        assert_eq!(Route::parse("/contact"), Route::Contact);
        assert_eq!(Route::parse("/privacy-policy"), Route::PrivacyPolicy);
        assert_eq!(Route::parse("/terms-of-service"), Route::TermsOfService);
        assert_eq!(Route::parse("/affiliate-onboarding"), Route::AffiliateOnboarding);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(Route::parse("#/creators"), Route::Directory);
        assert_eq!(Route::parse("/creators/"), Route::Directory);
        assert_eq!(Route::parse("creators?sort=rating"), Route::Directory);
        assert_eq!(
            Route::parse("#/creators/modparty/"),
            Route::CreatorProfile(CreatorId::new("modparty"))
        );
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            Route::parse("/creators/a/b"),
            Route::NotFound("/creators/a/b".to_string())
        );
        assert_eq!(Route::parse("/pricing").title(), "Page not found");
    }

    #[test]
    fn test_path_round_trip() {
        let route = Route::CreatorProfile(CreatorId::new("yakutum"));
        assert_eq!(route.path(), "/creators/yakutum");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_resolve_creator() {
        let store = CreatorStore::bundled().unwrap();
        let found = Route::parse("/creators/yakutum").resolve_creator(&store);
        assert_eq!(found.map(|c| c.id.as_str()), Some("yakutum"));
        assert!(Route::parse("/creators/nope").resolve_creator(&store).is_none());
        assert!(Route::Blog.resolve_creator(&store).is_none());
    }
}
