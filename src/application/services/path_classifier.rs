//! Request path classification.

use std::collections::HashSet;

/// Static table of first path segments that never resolve as slugs.
#[derive(Debug, Clone, Default)]
pub struct ReservedPaths {
    segments: HashSet<String>,
}

impl ReservedPaths {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(|s| s.as_ref().trim_matches('/').to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Adds the first segment of an absolute path such as `/login`.
    pub fn with_path(mut self, path: &str) -> Self {
        if let Some(first) = first_segment(path.trim_start_matches('/'))
            && !first.is_empty()
        {
            self.segments.insert(first.to_string());
        }
        self
    }

    pub fn is_reserved(&self, first_segment: &str) -> bool {
        self.segments.contains(first_segment)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Category of an incoming request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathClass {
    Root,
    ReservedNonDashboard,
    Dashboard,
    /// Everything else; carries the candidate slug without surrounding slashes.
    SlugCandidate(String),
}

/// Pure classifier over the request path.
#[derive(Debug, Clone)]
pub struct PathClassifier {
    dashboard_prefix: String,
    reserved: ReservedPaths,
}

impl PathClassifier {
    pub fn new(dashboard_prefix: impl Into<String>, reserved: ReservedPaths) -> Self {
        Self {
            dashboard_prefix: dashboard_prefix.into().trim_matches('/').to_string(),
            reserved,
        }
    }

    pub fn dashboard_prefix(&self) -> &str {
        &self.dashboard_prefix
    }

    /// Classifies `path` (the URI path, without query).
    ///
    /// The dashboard prefix wins over the reserved table, so listing it there
    /// has no effect.
    pub fn classify(&self, path: &str) -> PathClass {
        if path.is_empty() || path == "/" {
            return PathClass::Root;
        }

        let rest = path.strip_prefix('/').unwrap_or(path);
        let first = first_segment(rest).unwrap_or_default();

        if first == self.dashboard_prefix {
            return PathClass::Dashboard;
        }

        if self.reserved.is_reserved(first) {
            return PathClass::ReservedNonDashboard;
        }

        let slug = rest.strip_suffix('/').unwrap_or(rest);
        PathClass::SlugCandidate(slug.to_string())
    }
}

fn first_segment(rest: &str) -> Option<&str> {
    rest.split('/').next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> PathClassifier {
        PathClassifier::new(
            "dashboard",
            ReservedPaths::new(["api", "_next", "favicon.ico", "dashboard"]).with_path("/login"),
        )
    }

    #[test]
    fn test_root() {
        assert_eq!(classifier().classify("/"), PathClass::Root);
        assert_eq!(classifier().classify(""), PathClass::Root);
    }

    #[test]
    fn test_reserved_prefixes() {
        let c = classifier();

        assert_eq!(c.classify("/api"), PathClass::ReservedNonDashboard);
        assert_eq!(c.classify("/api/links/1"), PathClass::ReservedNonDashboard);
        assert_eq!(
            c.classify("/_next/static/chunk.js"),
            PathClass::ReservedNonDashboard
        );
        assert_eq!(c.classify("/favicon.ico"), PathClass::ReservedNonDashboard);
        assert_eq!(c.classify("/login"), PathClass::ReservedNonDashboard);
    }

    #[test]
    fn test_dashboard_wins_over_reserved_table() {
        let c = classifier();

        assert_eq!(c.classify("/dashboard"), PathClass::Dashboard);
        assert_eq!(c.classify("/dashboard/"), PathClass::Dashboard);
        assert_eq!(c.classify("/dashboard/links/42"), PathClass::Dashboard);
    }

    #[test]
    fn test_prefix_must_match_whole_segment() {
        let c = classifier();

        assert_eq!(
            c.classify("/dashboards"),
            PathClass::SlugCandidate("dashboards".to_string())
        );
        assert_eq!(
            c.classify("/apis"),
            PathClass::SlugCandidate("apis".to_string())
        );
    }

    #[test]
    fn test_slug_candidates() {
        let c = classifier();

        assert_eq!(
            c.classify("/abc123"),
            PathClass::SlugCandidate("abc123".to_string())
        );
        assert_eq!(
            c.classify("/abc123/"),
            PathClass::SlugCandidate("abc123".to_string())
        );
        assert_eq!(
            c.classify("/a/b"),
            PathClass::SlugCandidate("a/b".to_string())
        );
    }

    #[test]
    fn test_reserved_paths_normalization() {
        let reserved = ReservedPaths::new(["/api/", "", "docs"]).with_path("/not-found");

        assert!(reserved.is_reserved("api"));
        assert!(reserved.is_reserved("docs"));
        assert!(reserved.is_reserved("not-found"));
        assert!(!reserved.is_reserved(""));
        assert_eq!(reserved.len(), 3);
    }

    #[test]
    fn test_custom_dashboard_prefix() {
        let c = PathClassifier::new("/app/", ReservedPaths::default());

        assert_eq!(c.dashboard_prefix(), "app");
        assert_eq!(c.classify("/app/settings"), PathClass::Dashboard);
        assert_eq!(
            c.classify("/dashboard"),
            PathClass::SlugCandidate("dashboard".to_string())
        );
    }
}
