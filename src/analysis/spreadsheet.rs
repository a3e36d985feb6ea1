//! Word counting over one column of a spreadsheet workbook
//!
//! The workbook format (xlsx, xls, xlsb, ods) is detected from the bytes,
//! not the file extension. Only the first worksheet is read and only text
//! cells are counted.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use crate::analysis::word_count::count_occurrences;
use crate::domain::ColumnWordCount;
use crate::error::{Result, analysis, fs, validation_failed};

/// Last column a worksheet can have (`XFD`)
const MAX_COLUMN: u32 = 16_383;

/// Zero-based index of a column letter: `A` is 0, `Z` 25, `AA` 26
pub fn column_index(letters: &str) -> Result<u32> {
    let letters = letters.trim();
    let invalid = || {
        validation_failed(format!(
            "Column must be a spreadsheet column letter such as 'A', got '{letters}'"
        ))
    };

    if letters.is_empty() {
        return Err(invalid());
    }

    let mut index: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(invalid());
        }
        let digit = u32::from(c.to_ascii_uppercase()) - u32::from('A') + 1;
        index = index
            .checked_mul(26)
            .and_then(|i| i.checked_add(digit))
            .filter(|&i| i <= MAX_COLUMN + 1)
            .ok_or_else(invalid)?;
    }
    Ok(index - 1)
}

/// Count `word`, ignoring case, in the text cells of `column` in the first
/// worksheet of the workbook at `path`
pub fn count_in_column(path: &Path, column: &str, word: &str) -> Result<ColumnWordCount> {
    if word.is_empty() {
        return Err(validation_failed("Word to count cannot be empty"));
    }
    let col = column_index(column)?;
    let shown = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|e| fs::read_failed(&shown, e.to_string()))?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| analysis::parse_failed(&shown, e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| analysis::parse_failed(&shown, "workbook has no worksheets"))?
        .map_err(|e| analysis::parse_failed(&shown, e.to_string()))?;

    let count = match range.start() {
        Some((_, first_col)) if col >= first_col => {
            let offset = (col - first_col) as usize;
            range
                .rows()
                .filter_map(|row| match row.get(offset) {
                    Some(Data::String(text)) => Some(count_occurrences(text, word)),
                    _ => None,
                })
                .sum()
        }
        _ => 0,
    };

    Ok(ColumnWordCount {
        column: column.trim().to_string(),
        word: word.to_string(),
        count,
    })
}
