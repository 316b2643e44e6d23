use anyhow::{anyhow, Result};
use serde_json::Value;

/// A loaded table: one header row plus string cells, one row per observation.
///
/// Rows are immutable once loaded; fields are accessed through accessors
/// bound (and validated) once against the header, never by ad-hoc lookup.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Create a Dataset from a parsed CSV table.
    pub fn from_csv(table: crate::csv_reader::CsvTable) -> Self {
        Self {
            headers: table.headers,
            rows: table.rows,
        }
    }

    /// Create a Dataset from a JSON array of objects.
    ///
    /// The first object fixes the column set; later objects may omit fields
    /// (the cell is left empty, i.e. missing).
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        if array.is_empty() {
            return Err(anyhow!("Input data array is empty"));
        }

        let first_obj = array[0]
            .as_object()
            .ok_or_else(|| anyhow!("Items in array must be objects"))?;

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::new();
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Items in array must be objects"))?;

            let mut row = Vec::new();
            for header in &headers {
                let val_str = match obj.get(header) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(Value::Null) | None => "".to_string(),
                    _ => return Err(anyhow!("Unsupported value type for field '{}'", header)),
                };
                row.push(val_str);
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bind an accessor for a numeric column.
    ///
    /// Validates once, up front: the column must exist and every non-missing
    /// cell must parse as a finite number. Missing cells ("" or "NA") are
    /// tolerated here and reported as `None` by [`NumericField::value`].
    pub fn numeric_field(&self, name: &str) -> Result<NumericField> {
        let index = self.find_column(name)?;
        for (row_idx, row) in self.rows.iter().enumerate() {
            let cell = row.get(index).map(String::as_str).unwrap_or("");
            if is_missing(cell) {
                continue;
            }
            match cell.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => {}
                _ => {
                    return Err(anyhow!(
                        "Column '{}' is not numeric: row {} contains '{}'",
                        name,
                        row_idx + 1,
                        cell
                    ))
                }
            }
        }
        Ok(NumericField {
            name: name.to_string(),
            index,
        })
    }

    /// Bind an accessor for a categorical column.
    pub fn category_field(&self, name: &str) -> Result<CategoryField> {
        let index = self.find_column(name)?;
        Ok(CategoryField {
            name: name.to_string(),
            index,
        })
    }

    fn find_column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("Column '{}' not found", name))
    }
}

/// Accessor for one numeric column, bound by name at construction time.
#[derive(Debug, Clone)]
pub struct NumericField {
    name: String,
    index: usize,
}

impl NumericField {
    /// The parsed value for one row, or `None` when the cell is missing.
    pub fn value(&self, row: &[String]) -> Option<f64> {
        let cell = row.get(self.index)?;
        if is_missing(cell) {
            return None;
        }
        cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Accessor for one categorical column, bound by name at construction time.
#[derive(Debug, Clone)]
pub struct CategoryField {
    name: String,
    index: usize,
}

impl CategoryField {
    pub fn label<'a>(&self, row: &'a [String]) -> &'a str {
        row.get(self.index).map(String::as_str).unwrap_or("").trim()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("null")
}
