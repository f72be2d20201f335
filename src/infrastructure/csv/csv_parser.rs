// ============================================================
// CSV PARSER
// ============================================================
// Segment contact file text into raw rows

use csv::{ReaderBuilder, Terminator, Trim};

use crate::domain::csv::RawRow;
use crate::domain::error::AppError;

const UTF8_BOM: char = '\u{feff}';

/// Naive delimited-text splitter.
///
/// Quotes carry no meaning: a quoted value that contains the delimiter is
/// split like any other, so the row ends up with the wrong column count and
/// is rejected downstream. Accepted rows depend on this exact behavior.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into non-blank rows, numbered by position among them.
    /// The header is always line 1, whatever blank lines precede it.
    pub fn parse_content(&self, content: &str) -> Result<Vec<RawRow>, AppError> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        // Blank lines are dropped here so the reader sees exactly one record per line
        let mut line_numbers = Vec::new();
        let mut body = String::with_capacity(content.len());
        for line in content.split('\n') {
            if line.trim().is_empty() {
                continue;
            }
            line_numbers.push(line_numbers.len() + 1);
            body.push_str(line);
            body.push('\n');
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .quoting(false)
            .flexible(true) // Column counts are checked per row later
            .trim(Trim::All)
            .from_reader(body.as_bytes());

        let mut rows = Vec::with_capacity(line_numbers.len());

        for (line, result) in line_numbers.into_iter().zip(reader.records()) {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to read CSV line {}: {}", line, e))
            })?;

            rows.push(RawRow::new(line, record.iter().map(str::to_string).collect()));
        }

        Ok(rows)
    }
}
