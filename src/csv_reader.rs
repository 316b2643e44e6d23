use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Raw CSV contents: header row plus data rows, all cells as strings.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse CSV from any reader. The first row is the header; at least one data
/// row is required.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<CsvTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to parse CSV record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        anyhow::bail!("CSV input must contain at least one data row");
    }

    Ok(CsvTable { headers, rows })
}

/// Read CSV from stdin.
pub fn read_csv_from_stdin() -> Result<CsvTable> {
    read_csv_from_reader(io::stdin().lock())
}

/// Read CSV from a file path.
pub fn read_csv_from_path(path: &Path) -> Result<CsvTable> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    read_csv_from_reader(file)
}
