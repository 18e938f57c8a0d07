use std::collections::BTreeSet;

use regex::Regex;

use super::category::{Category, SynonymRegistry};
use super::normalizer::normalize;
use super::resolver::ResolvedCategory;

/// Predicate over a row's normalized category text.
///
/// A row matches when any synonym of any requested category occurs in it as a
/// plain substring, word boundaries are not considered.
#[derive(Debug, Clone)]
pub enum CategoryMatcher {
    All,
    Any(Regex),
}

impl CategoryMatcher {
    pub fn build(
        registry: &SynonymRegistry,
        resolved: &BTreeSet<ResolvedCategory>,
    ) -> Result<CategoryMatcher, regex::Error> {
        let needles: BTreeSet<String> = resolved
            .iter()
            .flat_map(|category| expand(registry, category))
            .map(|synonym| normalize(&synonym))
            .filter(|synonym| !synonym.is_empty())
            .collect();

        if needles.is_empty() {
            return Ok(CategoryMatcher::All);
        }

        let alternation = needles
            .iter()
            .map(|needle| regex::escape(needle))
            .collect::<Vec<String>>()
            .join("|");

        Ok(CategoryMatcher::Any(Regex::new(&alternation)?))
    }

    pub fn matches(&self, normalized_category: &str) -> bool {
        match self {
            CategoryMatcher::All => true,
            CategoryMatcher::Any(regex) => regex.is_match(normalized_category),
        }
    }
}

// A raw pass-through that spells a category name still expands to that category.
fn expand(registry: &SynonymRegistry, category: &ResolvedCategory) -> Vec<String> {
    let known = match category {
        ResolvedCategory::Canonical(category) => Some(*category),
        ResolvedCategory::Raw(text) => Category::from_name(text),
    };

    match known {
        Some(category) => registry
            .synonyms(category)
            .iter()
            .map(|synonym| synonym.to_string())
            .collect(),
        None => vec![category.as_str().to_string()],
    }
}
