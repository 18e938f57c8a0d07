use std::collections::BTreeSet;

use super::category::{Category, SynonymRegistry};
use super::normalizer::normalize;

/// A requested category after resolution: either a known category or the
/// normalized request text, which is then matched literally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolvedCategory {
    Canonical(Category),
    Raw(String),
}

impl ResolvedCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedCategory::Canonical(category) => category.name(),
            ResolvedCategory::Raw(text) => text,
        }
    }
}

pub fn resolve(registry: &SynonymRegistry, raw_category: &str) -> ResolvedCategory {
    let normalized = normalize(raw_category);

    match registry.lookup(&normalized) {
        Some(category) => ResolvedCategory::Canonical(category),
        None => ResolvedCategory::Raw(normalized),
    }
}

pub fn resolve_all<I, S>(registry: &SynonymRegistry, raw_categories: I) -> BTreeSet<ResolvedCategory>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_categories
        .into_iter()
        .map(|raw| resolve(registry, raw.as_ref()))
        .collect()
}
