use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// ManifestEntry – one range declaration from the manifest
// ---------------------------------------------------------------------------

/// A `$ <start> <end> <name>` declaration found inside the module ID section.
///
/// `start <= end` is not enforced here; the validator's containment check
/// simply never succeeds against an inverted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Lower-case, prefix-stripped, underscore-separated matching key.
    pub normalized_name: String,
    pub start: i128,
    pub end: i128,
    /// Everything after the end number, as written.
    pub raw_name: String,
}

impl ManifestEntry {
    /// Whether `[start, end]` is non-inverted and nested inside this entry.
    pub fn contains(&self, start: i128, end: i128) -> bool {
        self.start <= start && start <= end && end <= self.end
    }
}

// ---------------------------------------------------------------------------
// Verdict / RowOutcome – per-row result
// ---------------------------------------------------------------------------

/// The value written into the result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[serde(rename = "In Range")]
    InRange,
    #[serde(rename = "Out of Range")]
    OutOfRange,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::InRange => "In Range",
            Verdict::OutOfRange => "Out of Range",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a row got its verdict. Only [`RowOutcome::Contained`] is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    /// Some matching entry fully contains the row's range.
    Contained,
    /// Start or End is not a decimal integer.
    InvalidNumber,
    /// No manifest entry name contains the row's component name.
    NoMatchingEntry,
    /// The row's own start is greater than its end.
    InvertedRange,
    /// Matching entries exist but none contains the range.
    NotContained,
}

impl RowOutcome {
    pub fn verdict(self) -> Verdict {
        match self {
            RowOutcome::Contained => Verdict::InRange,
            _ => Verdict::OutOfRange,
        }
    }
}

impl fmt::Display for RowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RowOutcome::Contained => "contained",
            RowOutcome::InvalidNumber => "invalid number",
            RowOutcome::NoMatchingEntry => "no matching entry",
            RowOutcome::InvertedRange => "inverted range",
            RowOutcome::NotContained => "not contained",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// DatasetRow / Dataset – the tabular input
// ---------------------------------------------------------------------------

/// One CSV record: column name → raw string value.
///
/// Column order lives in [`Dataset::fields`]; a field absent from `values`
/// reads and serialises as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetRow {
    pub values: BTreeMap<String, String>,
}

impl DatasetRow {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DatasetRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        DatasetRow {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The whole table with its header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Ordered column names, as read from the header.
    pub fields: Vec<String>,
    pub rows: Vec<DatasetRow>,
}

impl Dataset {
    pub fn new(fields: Vec<String>, rows: Vec<DatasetRow>) -> Self {
        Dataset { fields, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Append `field` to the header unless it is already present.
    pub fn ensure_field(&mut self, field: &str) {
        if !self.has_field(field) {
            self.fields.push(field.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: i128, end: i128) -> ManifestEntry {
        ManifestEntry {
            normalized_name: "rail".into(),
            start,
            end,
            raw_name: "M_RAIL".into(),
        }
    }

    #[test]
    fn containment_is_inclusive() {
        let e = entry(100, 200);
        assert!(e.contains(100, 200));
        assert!(e.contains(120, 180));
        assert!(e.contains(150, 150));
        assert!(!e.contains(90, 150));
        assert!(!e.contains(150, 201));
    }

    #[test]
    fn inverted_row_never_contained() {
        assert!(!entry(0, 1000).contains(150, 90));
    }

    #[test]
    fn inverted_entry_contains_nothing() {
        assert!(!entry(200, 100).contains(150, 150));
    }

    #[test]
    fn only_contained_is_in_range() {
        assert_eq!(RowOutcome::Contained.verdict(), Verdict::InRange);
        for outcome in [
            RowOutcome::InvalidNumber,
            RowOutcome::NoMatchingEntry,
            RowOutcome::InvertedRange,
            RowOutcome::NotContained,
        ] {
            assert_eq!(outcome.verdict(), Verdict::OutOfRange);
        }
    }

    #[test]
    fn verdict_serialises_as_column_text() {
        assert_eq!(
            serde_json::to_string(&Verdict::OutOfRange).unwrap(),
            "\"Out of Range\""
        );
        assert_eq!(Verdict::InRange.to_string(), "In Range");
    }

    #[test]
    fn ensure_field_appends_once() {
        let mut ds = Dataset::new(vec!["Items".into(), "Result".into()], Vec::new());
        ds.ensure_field("Result");
        ds.ensure_field("Note");
        assert_eq!(ds.fields, vec!["Items", "Result", "Note"]);
    }
}
