use std::num::NonZeroUsize;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::matcher::CategoryMatcher;
use super::normalizer::normalize;

pub const CATEGORY_COLUMN: &str = "Category";

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<String>,
    category_normalized: String,
}

impl Row {
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn category_normalized(&self) -> &str {
        &self.category_normalized
    }
}

/// One immutable, fully loaded version of the product table.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    category_index: usize,
    rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCategoryColumn;

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<Vec<String>>) -> Result<Dataset, MissingCategoryColumn> {
        let category_index = columns
            .iter()
            .position(|column| column == CATEGORY_COLUMN)
            .ok_or(MissingCategoryColumn)?;

        let rows = records
            .into_iter()
            .map(|fields| {
                let category_normalized = normalize(fields.get(category_index).map(String::as_str).unwrap_or(""));
                Row {
                    fields,
                    category_normalized,
                }
            })
            .collect();

        Ok(Dataset {
            columns,
            category_index,
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn category<'a>(&self, row: &'a Row) -> &'a str {
        row.fields.get(self.category_index).map(String::as_str).unwrap_or("")
    }

    /// Matching rows in dataset order, cut to `limit`.
    pub fn filter(&self, matcher: &CategoryMatcher, limit: Limit) -> Vec<&Row> {
        let matching = self
            .rows
            .iter()
            .filter(|row| matcher.matches(&row.category_normalized));

        match limit {
            Limit::Unlimited => matching.collect(),
            Limit::Count(count) => matching.take(count.get()).collect(),
        }
    }

    /// Serializable view of a row keyed by column name, in column order.
    pub fn view<'a>(&'a self, row: &'a Row) -> RowView<'a> {
        RowView {
            columns: &self.columns,
            row,
        }
    }
}

pub struct RowView<'a> {
    columns: &'a [String],
    row: &'a Row,
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        // Short CSV lines leave trailing cells empty; those serialize as null.
        for (index, column) in self.columns.iter().enumerate() {
            map.serialize_entry(column, &self.row.fields.get(index))?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unlimited,
    Count(NonZeroUsize),
}

impl Limit {
    /// Reads a client supplied limit. Never fails: anything that is not a
    /// positive whole number means no limit. `true` counts as 1.
    pub fn parse(value: Option<&Value>) -> Limit {
        match value {
            Some(Value::String(text)) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("all") {
                    return Limit::Unlimited;
                }
                text.parse::<i64>().map(Limit::from_i64).unwrap_or_default()
            }
            Some(Value::Number(number)) => match number.as_i64() {
                Some(n) => Limit::from_i64(n),
                None => match number.as_u64() {
                    Some(n) => Limit::from_u64(n),
                    None => number.as_f64().map(|f| Limit::from_i64(f.trunc() as i64)).unwrap_or_default(),
                },
            },
            Some(Value::Bool(flag)) => Limit::from_i64(i64::from(*flag)),
            _ => Limit::Unlimited,
        }
    }

    fn from_i64(n: i64) -> Limit {
        u64::try_from(n).map(Limit::from_u64).unwrap_or_default()
    }

    fn from_u64(n: u64) -> Limit {
        usize::try_from(n)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Limit::Count)
            .unwrap_or_default()
    }
}
