// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::{self, Write};

use uni_search_client::{Error, Query, SearchResponse};

pub const SEPARATOR_WIDTH: usize = 50;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn write_header<W: Write>(out: &mut W, query: &Query) -> io::Result<()> {
    writeln!(out, "Testing search with {}...", query)
}

/// Summary of one search: status, count and the first record, or the error.
/// Always ends with the separator line.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &Result<SearchResponse, Error>,
) -> io::Result<()> {
    match result {
        Ok(response) => {
            writeln!(out, "Status Code: {}", response.status)?;
            writeln!(out, "Number of results: {}", response.records.len())?;
            match response.records.first() {
                Some(first) => {
                    writeln!(out, "First result sample:")?;
                    let pretty = serde_json::to_string_pretty(first)
                        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
                    writeln!(out, "{}", pretty)?;
                }
                None => writeln!(out, "No results found.")?,
            }
        }
        Err(err) => writeln!(out, "Error: {}", err)?,
    }
    writeln!(out, "{}", separator())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uni_search_client::{ApiError, Record};

    fn render(result: &Result<SearchResponse, Error>) -> String {
        let mut out = Vec::new();
        write_result(&mut out, result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_response() {
        let output = render(&Ok(SearchResponse {
            status: 200,
            records: Vec::new(),
        }));
        assert_eq!(
            output,
            format!(
                "Status Code: 200\nNumber of results: 0\nNo results found.\n{}\n",
                "-".repeat(50)
            )
        );
    }

    #[test]
    fn first_record_is_indented() {
        let record: Record =
            serde_json::from_str(r#"{"name": "Amrita", "domains": ["amrita.edu"]}"#).unwrap();
        let output = render(&Ok(SearchResponse {
            status: 200,
            records: vec![record.clone(), record],
        }));
        let expected = "Status Code: 200
Number of results: 2
First result sample:
{
  \"name\": \"Amrita\",
  \"domains\": [
    \"amrita.edu\"
  ]
}
";
        assert!(output.starts_with(expected), "{}", output);
        assert!(output.ends_with(&format!("{}\n", separator())));
    }

    #[test]
    fn error_keeps_separator() {
        let output = render(&Err(Error::Api(ApiError {
            endpoint: "/search".to_string(),
            code: 503,
            canonical_reason: Some("Service Unavailable".to_string()),
            message: None,
        })));
        assert_eq!(
            output,
            format!(
                "Error: '503 Service Unavailable' from API endpoint '/search'\n{}\n",
                separator()
            )
        );
    }

    #[test]
    fn header() {
        let mut out = Vec::new();
        write_header(&mut out, &Query::default().name("Amrita")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Testing search with name='Amrita' and country='None'...\n"
        );
    }
}
