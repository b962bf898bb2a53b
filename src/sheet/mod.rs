//! Reading spec sheets into raw rows and writing the generated name back out.

use crate::error::SheetError;
use crate::naming::RawEntry;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Header of the single-column result file.
pub const RESULT_HEADER: &str = "Generated Name";

/// Tab for `.tsv`/`.tab` files, comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("tsv" | "tab") => b'\t',
        _ => b',',
    }
}

pub fn read_sheet(path: &Path) -> Result<Vec<RawEntry>, SheetError> {
    let file = File::open(path).map_err(|source| SheetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let rows = parse_sheet(BufReader::new(file), delimiter_for(path))?;
    debug!(path = %path.display(), rows = rows.len(), "read spec sheet");
    Ok(rows)
}

/// Parses a header-less Key/Value sheet.
///
/// Two or more cells: the first two are key and value. A single cell is split
/// on its first `:` (`Key: Value`); without a colon the value is empty.
pub fn parse_sheet<R: Read>(reader: R, delimiter: u8) -> Result<Vec<RawEntry>, SheetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|err| match err.position() {
            Some(pos) => SheetError::Malformed {
                row: pos.line(),
                message: err.to_string(),
            },
            None => SheetError::Csv(err),
        })?;

        let entry = match (record.get(0), record.get(1)) {
            (Some(key), Some(value)) => RawEntry::new(key, value),
            (Some(cell), None) => match cell.split_once(':') {
                Some((key, value)) => RawEntry::new(key.trim(), value.trim()),
                None => RawEntry::new(cell, ""),
            },
            _ => continue,
        };
        rows.push(entry);
    }
    Ok(rows)
}

/// Writes `name` as the only data row under [`RESULT_HEADER`].
pub fn write_name_csv(path: &Path, name: &str) -> Result<(), SheetError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record([RESULT_HEADER])?;
    writer.write_record([name])?;
    writer.flush()?;
    Ok(())
}
