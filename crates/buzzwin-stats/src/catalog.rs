//! Ritual catalog filtering and ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use buzzwin_core::models::RitualDefinition;
use buzzwin_core::BuzzwinError;

/// Catalog predicate. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RitualFilter {
    /// Exact tag match, case-insensitive.
    pub tag: Option<String>,
    /// Exact category match, case-insensitive.
    pub category: Option<String>,
    /// Substring of name or description, case-insensitive.
    pub search: Option<String>,
}

impl RitualFilter {
    pub fn matches(&self, ritual: &RitualDefinition) -> bool {
        if let Some(tag) = non_blank(&self.tag) {
            if !ritual.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                return false;
            }
        }
        if let Some(category) = non_blank(&self.category) {
            match &ritual.category {
                Some(c) if c.eq_ignore_ascii_case(category) => {}
                _ => return false,
            }
        }
        if let Some(search) = non_blank(&self.search) {
            let needle = search.to_lowercase();
            if !ritual.name.to_lowercase().contains(&needle)
                && !ritual.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Catalog ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RitualSort {
    /// Name ascending, case-insensitive.
    #[default]
    Name,
    /// Most completed first.
    Popular,
    /// Most recently created first.
    Newest,
}

impl RitualSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Popular => "popular",
            Self::Newest => "newest",
        }
    }

    fn compare(self, a: &RitualDefinition, b: &RitualDefinition) -> Ordering {
        let primary = match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Popular => b.completion_count.cmp(&a.completion_count),
            Self::Newest => b.created_at.cmp(&a.created_at),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl FromStr for RitualSort {
    type Err = BuzzwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "popular" => Ok(Self::Popular),
            "newest" => Ok(Self::Newest),
            other => Err(BuzzwinError::ValidationError(format!(
                "unknown sort order: {other}"
            ))),
        }
    }
}

/// Apply `filter` and order the survivors by `sort`. Ties break on id.
pub fn filter_and_sort(
    rituals: &[RitualDefinition],
    filter: &RitualFilter,
    sort: RitualSort,
) -> Vec<RitualDefinition> {
    let mut out: Vec<RitualDefinition> = rituals
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect();
    out.sort_by(|a, b| sort.compare(a, b));
    out
}
