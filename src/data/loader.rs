use std::io::{Read, Write};
use std::path::Path;

use super::model::{Dataset, DatasetRow};
use crate::error::{Result, ValidatorError};

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one record per following line.
/// Values are kept as raw text; nothing is trimmed or typed here.
pub fn read_dataset<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let fields: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if fields.is_empty() {
        return Err(ValidatorError::MissingHeader);
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > fields.len() {
            log::warn!(
                "CSV row {}: {} values but {} columns, extra values dropped",
                row_no + 1,
                record.len(),
                fields.len()
            );
        }
        // Short records leave trailing fields absent.
        let row: DatasetRow = fields
            .iter()
            .zip(record.iter())
            .map(|(f, v)| (f.as_str(), v))
            .collect();
        rows.push(row);
    }

    log::info!("read {} rows with columns {:?}", rows.len(), fields);
    Ok(Dataset::new(fields, rows))
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| ValidatorError::io(path, e))?;
    read_dataset(file)
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Write the header in `dataset.fields` order, then each row; absent values are empty.
pub fn write_dataset<W: Write>(dataset: &Dataset, output: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(&dataset.fields)?;
    for row in &dataset.rows {
        writer.write_record(dataset.fields.iter().map(|f| row.get(f).unwrap_or("")))?;
    }
    writer
        .flush()
        .map_err(|e| ValidatorError::Csv(csv::Error::from(e)))?;
    Ok(())
}

pub fn save_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| ValidatorError::io(path, e))?;
    write_dataset(dataset, file)
}
