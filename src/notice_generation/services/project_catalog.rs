use crate::notice_generation::domain::ProjectRecord;
use std::collections::HashSet;

/// ProjectCatalog - deduplicates and orders the projects of a NOTICE
pub struct ProjectCatalog;

impl ProjectCatalog {
    /// Deduplicates by name, then sorts case-insensitively
    ///
    /// The result is stable for a given input order, which is what keeps the
    /// published NOTICE byte-identical between runs.
    pub fn build(projects: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
        let mut projects = Self::deduplicate(projects);
        Self::sort(&mut projects);
        projects
    }

    /// Keeps the first record seen for each name
    ///
    /// A later duplicate is dropped even when its license text differs.
    pub fn deduplicate(projects: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
        let mut seen = HashSet::new();
        projects
            .into_iter()
            .filter(|p| seen.insert(p.name().to_string()))
            .collect()
    }

    /// Stable sort by lower-cased name
    pub fn sort(projects: &mut [ProjectRecord]) {
        projects.sort_by_cached_key(|p| p.name().to_lowercase());
    }
}
