use super::category::SynonymRegistry;
use super::dataset::{Dataset, Row};
use super::matcher::CategoryMatcher;
use super::resolver::resolve_all;
use crate::structs::request::RecommendRequest;

/// Rows of `dataset` whose category matches any requested category, in dataset order.
pub fn recommend<'a>(
    registry: &SynonymRegistry,
    dataset: &'a Dataset,
    request: &RecommendRequest,
) -> Result<Vec<&'a Row>, regex::Error> {
    let resolved = resolve_all(registry, &request.categories);
    let matcher = CategoryMatcher::build(registry, &resolved)?;

    Ok(dataset.filter(&matcher, request.limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::dataset::{Limit, CATEGORY_COLUMN};

    fn products() -> Dataset {
        let rows = [
            ("P1", "Bảo hiểm sức khỏe toàn diện"),
            ("P2", "Medical Care Plus"),
            ("P3", "Du lịch quốc tế"),
            ("P4", "Tai nạn 24/7"),
            ("P5", "Nha khoa thẩm mỹ"),
        ];

        Dataset::new(
            vec!["Product".to_string(), CATEGORY_COLUMN.to_string()],
            rows.iter()
                .map(|(name, category)| vec![name.to_string(), category.to_string()])
                .collect(),
        )
        .unwrap()
    }

    fn request(categories: &[&str]) -> RecommendRequest {
        RecommendRequest {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            limit: Limit::Unlimited,
        }
    }

    fn products_of(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|row| row.fields()[0].clone()).collect()
    }

    #[test]
    fn health_request_finds_vietnamese_and_english_rows() {
        let registry = SynonymRegistry::new();
        let dataset = products();

        let rows = recommend(&registry, &dataset, &request(&["sức khỏe"])).unwrap();
        assert_eq!(products_of(&rows), vec!["P1", "P2"]);
    }

    #[test]
    fn no_categories_returns_everything() {
        let registry = SynonymRegistry::new();
        let dataset = products();

        let rows = recommend(&registry, &dataset, &request(&[])).unwrap();
        assert_eq!(rows.len(), dataset.len());
    }

    #[test]
    fn mixed_request_keeps_dataset_order() {
        let registry = SynonymRegistry::new();
        let dataset = products();

        let rows = recommend(&registry, &dataset, &request(&["DENTAL", "Tai Nạn", "travel"])).unwrap();
        assert_eq!(products_of(&rows), vec!["P3", "P4", "P5"]);
    }
}
