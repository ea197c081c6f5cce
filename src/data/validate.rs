use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{Dataset, DatasetRow, ManifestEntry, RowOutcome, Verdict};
use super::normalize::normalize_dataset_name;
use crate::config::ValidatorConfig;
use crate::error::{Result, ValidatorError};

// ---------------------------------------------------------------------------
// Summary of a validation pass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub rows: usize,
    pub in_range: usize,
    pub out_of_range: usize,
    /// Row count per outcome reason.
    pub outcomes: BTreeMap<RowOutcome, usize>,
}

impl ValidationSummary {
    pub fn from_outcomes(outcomes: &[RowOutcome]) -> Self {
        let mut summary = ValidationSummary {
            rows: outcomes.len(),
            ..Default::default()
        };
        for &outcome in outcomes {
            match outcome.verdict() {
                Verdict::InRange => summary.in_range += 1,
                Verdict::OutOfRange => summary.out_of_range += 1,
            }
            *summary.outcomes.entry(outcome).or_default() += 1;
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Row classification
// ---------------------------------------------------------------------------

/// Component name of a row: the first configured field with a non-empty value.
fn component_name<'a>(row: &'a DatasetRow, config: &ValidatorConfig) -> &'a str {
    config
        .component_fields
        .iter()
        .filter_map(|f| row.get(f))
        .find(|v| !v.is_empty())
        .unwrap_or("")
}

fn parse_bound(row: &DatasetRow, field: &str) -> Option<i128> {
    row.get(field).unwrap_or("").trim().parse::<i128>().ok()
}

/// Decide a single row against the manifest.
///
/// Entries are selected by substring: an entry matches when its normalised
/// name contains the row's normalised component name.
pub fn classify_row(
    row: &DatasetRow,
    entries: &[ManifestEntry],
    config: &ValidatorConfig,
) -> RowOutcome {
    let (Some(start), Some(end)) = (
        parse_bound(row, &config.start_field),
        parse_bound(row, &config.end_field),
    ) else {
        return RowOutcome::InvalidNumber;
    };

    let name = normalize_dataset_name(component_name(row, config));
    let mut matching = entries
        .iter()
        .filter(|e| e.normalized_name.contains(name.as_str()))
        .peekable();

    if matching.peek().is_none() {
        return RowOutcome::NoMatchingEntry;
    }
    if start > end {
        return RowOutcome::InvertedRange;
    }
    if matching.any(|e| e.contains(start, end)) {
        RowOutcome::Contained
    } else {
        RowOutcome::NotContained
    }
}

/// The header must name at least one component column. Missing bound
/// columns only degrade every row to an invalid-number outcome.
pub fn check_columns(dataset: &Dataset, config: &ValidatorConfig) -> Result<()> {
    if !config.component_fields.iter().any(|f| dataset.has_field(f)) {
        return Err(ValidatorError::MissingComponentField {
            expected: config.component_fields.clone(),
        });
    }
    for field in [&config.start_field, &config.end_field] {
        if !dataset.has_field(field) {
            log::warn!("dataset has no '{field}' column, every row will be out of range");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Annotate every row of `dataset` in place and return per-row outcomes.
///
/// Refuses a dataset whose header has none of the component columns, leaving
/// it untouched. Otherwise the result column is appended to `dataset.fields`
/// when missing and is overwritten on every row; no other value is touched
/// and row order is kept.
pub fn validate_with(
    dataset: &mut Dataset,
    entries: &[ManifestEntry],
    config: &ValidatorConfig,
) -> Result<Vec<RowOutcome>> {
    check_columns(dataset, config)?;
    dataset.ensure_field(&config.result_field);

    let outcomes: Vec<RowOutcome> = dataset
        .rows
        .iter_mut()
        .enumerate()
        .map(|(i, row)| {
            let outcome = classify_row(row, entries, config);
            log::debug!("row {}: {outcome}", i + 1);
            row.set(&config.result_field, outcome.verdict().as_str());
            outcome
        })
        .collect();

    let summary = ValidationSummary::from_outcomes(&outcomes);
    log::info!(
        "validated {} rows: {} in range, {} out of range",
        summary.rows,
        summary.in_range,
        summary.out_of_range
    );
    Ok(outcomes)
}

/// Annotated copy of `dataset` using the default column names.
pub fn validate(dataset: &Dataset, entries: &[ManifestEntry]) -> Result<(Dataset, Vec<RowOutcome>)> {
    let mut annotated = dataset.clone();
    let outcomes = validate_with(&mut annotated, entries, &ValidatorConfig::default())?;
    Ok((annotated, outcomes))
}
