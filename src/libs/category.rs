use std::collections::HashMap;
use std::fmt;

use super::normalizer::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Accident,
    Health,
    Life,
    CriticalIllness,
    Hospital,
    Children,
    Travel,
    Dental,
    Vision,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Accident => "accident",
            Category::Health => "health",
            Category::Life => "life",
            Category::CriticalIllness => "critical illness",
            Category::Hospital => "hospital",
            Category::Children => "children",
            Category::Travel => "travel",
            Category::Dental => "dental",
            Category::Vision => "vision",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        CATEGORY_SYNONYMS
            .iter()
            .map(|(category, _)| *category)
            .find(|category| category.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Declaration order matters: a synonym shared by two categories resolves to the later one.
pub const CATEGORY_SYNONYMS: [(Category, &[&str]); 9] = [
    (
        Category::Accident,
        &[
            "tai nan",
            "tai-nan",
            "tai nạn",
            "tai nạn cá nhân",
            "tai nạn lao động",
            "personal accident",
            "accident",
            "pa",
            "tai nạn 24/7",
        ],
    ),
    (
        Category::Health,
        &[
            "suc khoe",
            "sức khỏe",
            "suc-khoe",
            "health",
            "medical",
            "healthcare",
            "chăm sóc sức khỏe",
            "viện phí",
            "benh vien",
            "hospitalization",
        ],
    ),
    (
        Category::Life,
        &[
            "nhân thọ",
            "nhan tho",
            "nhan-tho",
            "life",
            "life insurance",
            "term life",
            "whole life",
            "bảo vệ tài chính",
            "bảo vệ gia đình",
        ],
    ),
    (
        Category::CriticalIllness,
        &[
            "bệnh hiểm nghèo",
            "critical illness",
            "ci",
            "ung thư",
            "cancer",
            "tim mạch",
            "đột quỵ",
            "tai biến",
            "man tinh",
            "mãn tính",
            "bệnh nặng",
            "bệnh nghiêm trọng",
        ],
    ),
    (
        Category::Hospital,
        &[
            "bệnh viện",
            "benh vien",
            "hospital",
            "hospitalization",
            "nằm viện",
            "viện phí",
            "medical cost",
            "inpatient",
            "outpatient",
            "ngoại trú",
            "nội trú",
            "phẫu thuật",
            "surgery",
        ],
    ),
    (
        Category::Children,
        &[
            "trẻ em",
            "trẻ con",
            "trẻ nhỏ",
            "child",
            "children",
            "kid",
            "kids",
            "bảo hiểm trẻ em",
            "student insurance",
            "baby",
            "mầm non",
            "học sinh",
        ],
    ),
    (
        Category::Travel,
        &[
            "du lịch",
            "du-lich",
            "travel",
            "travel insurance",
            "trip",
            "holiday",
            "tour",
            "overseas",
            "bảo hiểm du lịch",
            "bảo hiểm quốc tế",
        ],
    ),
    (
        Category::Dental,
        &[
            "nha khoa",
            "dental",
            "răng",
            "răng miệng",
            "chăm sóc răng",
            "chỉnh nha",
            "niềng răng",
            "nha sĩ",
            "trám răng",
            "làm răng",
            "nha khoa thẩm mỹ",
        ],
    ),
    (
        Category::Vision,
        &[
            "thị lực",
            "mắt",
            "kính",
            "mắt kính",
            "vision",
            "eye",
            "eye care",
            "optical",
            "optometry",
            "khám mắt",
            "bảo hiểm mắt",
        ],
    ),
];

/// Synonym table plus the reverse index from normalized synonym to category.
///
/// Canonical names are only found through the index when they are also listed
/// as a synonym of their own category.
#[derive(Debug, Clone)]
pub struct SynonymRegistry {
    entries: Vec<(Category, Vec<&'static str>)>,
    lookup: HashMap<String, Category>,
}

impl SynonymRegistry {
    pub fn new() -> Self {
        Self::from_table(&CATEGORY_SYNONYMS)
    }

    pub fn from_table(table: &[(Category, &'static [&'static str])]) -> Self {
        let mut lookup = HashMap::new();

        for (category, synonyms) in table {
            for synonym in synonyms.iter() {
                lookup.insert(normalize(synonym), *category);
            }
        }

        SynonymRegistry {
            entries: table
                .iter()
                .map(|(category, synonyms)| (*category, synonyms.to_vec()))
                .collect(),
            lookup,
        }
    }

    pub fn lookup(&self, normalized: &str) -> Option<Category> {
        self.lookup.get(normalized).copied()
    }

    pub fn synonyms(&self, category: Category) -> &[&'static str] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, synonyms)| synonyms.as_slice())
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(category, _)| *category)
    }
}

impl Default for SynonymRegistry {
    fn default() -> Self {
        Self::new()
    }
}
