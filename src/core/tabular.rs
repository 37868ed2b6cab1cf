use crate::domain::model::{Row, TabularData};
use crate::utils::error::{ReactomeError, Result};
use csv::{ReaderBuilder, StringRecord};

/// Parse CSV text into headers and header-keyed rows.
///
/// The first record is the header row, taken verbatim. Short rows are padded
/// with empty strings and values past the last header are dropped. Empty or
/// whitespace-only input gives an empty table.
pub fn parse(text: &str) -> Result<TabularData> {
    if text.trim().is_empty() {
        return Ok(TabularData::default());
    }

    if let Some(line) = unterminated_quote_line(text) {
        return Err(ReactomeError::ParseError {
            message: format!("unterminated quoted field starting on line {}", line),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Ok(TabularData::default()),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(to_row(&headers, &record));
    }

    tracing::debug!(
        "Parsed CSV with {} columns and {} rows",
        headers.len(),
        rows.len()
    );

    Ok(TabularData { headers, rows })
}

fn to_row(headers: &[String], record: &StringRecord) -> Row {
    // duplicate headers: the later column wins
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let value = record.get(index).unwrap_or_default();
            (header.clone(), value.to_string())
        })
        .collect()
}

/// Line number where a quoted field opens but never closes, if any.
///
/// The csv reader accepts such input and swallows the rest of the text into
/// one field, so it is rejected up front.
fn unterminated_quote_line(text: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut line = 1;
    let mut opened_on = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if at_field_start => {
                in_quotes = true;
                opened_on = line;
                at_field_start = false;
            }
            ',' => at_field_start = true,
            '\n' => {
                line += 1;
                at_field_start = true;
            }
            '\r' => {}
            _ => at_field_start = false,
        }
    }

    in_quotes.then_some(opened_on)
}
