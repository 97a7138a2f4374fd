//! Shared CSV helpers for question bank files.

use std::collections::BTreeMap;
use std::io::Read;

use csv::ReaderBuilder;

/// Header names accepted for the question column.
pub const QUESTION_HEADERS: &[&str] = &["standard_question_th", "standard_question", "question"];
/// Header names accepted for the group column.
pub const GROUP_HEADERS: &[&str] = &["q_group", "group"];

/// A CSV row keyed by normalized header name.
pub type CsvRow = BTreeMap<String, String>;

/// Lowercases a header and strips whitespace and a UTF-8 BOM.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_lowercase()
}

/// Read CSV text into row maps keyed by normalized header.
///
/// Cell values are trimmed. Short records simply lack the missing keys.
pub fn read_rows<R: Read>(reader: R) -> Result<(Vec<String>, Vec<CsvRow>), csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            if let Some(key) = headers.get(idx) {
                row.insert(key.clone(), value.trim().to_string());
            }
        }
        rows.push(row);
    }
    Ok((headers, rows))
}

/// First header from `candidates` present in `headers`.
pub fn find_header<'a>(headers: &[String], candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|candidate| headers.iter().any(|h| h == candidate))
}

/// Non-empty field value, if present.
pub fn get_optional<'a>(row: &'a CsvRow, key: &str) -> Option<&'a str> {
    row.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_normalized() {
        assert_eq!(normalize_header("\u{feff} Q_Group "), "q_group");
    }

    #[test]
    fn rows_are_keyed_by_header() {
        let text = "Standard_Question_TH,q_group\n Name ,Profile\nAge\n";
        let (headers, rows) = read_rows(text.as_bytes()).expect("read rows");
        assert_eq!(headers, vec!["standard_question_th", "q_group"]);
        assert_eq!(get_optional(&rows[0], "standard_question_th"), Some("Name"));
        assert_eq!(get_optional(&rows[1], "q_group"), None);
        assert_eq!(find_header(&headers, QUESTION_HEADERS), Some("standard_question_th"));
    }
}
