/// Keyword matching over a single dataset.
///
/// A row matches when the case-folded query is a plain substring of at least
/// one of its searchable fields. Results keep file order and stop at
/// `MATCH_LIMIT`.
use crate::dataset::Dataset;
use crate::model::Record;

pub const MATCH_LIMIT: usize = 2;

/// A case-folded query, built once per request and shared by every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        record
            .searchable_fields()
            .iter()
            .any(|field| !field.is_empty() && field.to_lowercase().contains(self.0.as_str()))
    }
}

/// Lazily yields the first `MATCH_LIMIT` matching rows. Clone the iterator to restart it.
pub fn find_matches<'a, R: Record>(
    dataset: &'a Dataset<R>,
    keyword: &'a Keyword,
) -> impl Iterator<Item = &'a R> + Clone + 'a {
    dataset
        .iter()
        .filter(move |record| keyword.matches(*record))
        .take(MATCH_LIMIT)
}
