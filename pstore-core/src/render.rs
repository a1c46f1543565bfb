//! Table, CSV and JSON rendering of a [`ParameterCollection`].

use std::io::Write;

use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{Cell, Row, Table};

use crate::error::Result;
use crate::parameter::ParameterCollection;

/// Column titles of the table output, in field order.
pub const TABLE_HEADER: [&str; 4] = ["Name", "Value", "Type", "LastModifiedDate"];

/// Output format of the list action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Box-drawn table with a header row
    #[default]
    Table,
    /// Comma-separated values, one line per parameter, no header
    Csv,
    /// `{"parameters": [...]}` on a single line
    Json,
}

impl OutputFormat {
    /// Pick the format from the `-csv` / `-json` flags. CSV wins over JSON.
    pub fn from_flags(csv: bool, json: bool) -> Self {
        if csv {
            OutputFormat::Csv
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Write `collection` to `out` in the requested format.
pub fn render<W>(collection: &ParameterCollection, format: OutputFormat, out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    match format {
        OutputFormat::Table => render_table(collection, out),
        OutputFormat::Csv => render_csv(collection, out),
        OutputFormat::Json => render_json(collection, out),
    }
}

fn render_table<W>(collection: &ParameterCollection, out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    let mut table = Table::new();
    table.set_format(*FORMAT_BOX_CHARS);
    let titles = TABLE_HEADER.iter().map(|h| Cell::new(h)).collect();
    table.set_titles(Row::new(titles));

    for record in collection {
        let cells = record.fields().iter().map(|f| Cell::new(f)).collect();
        table.add_row(Row::new(cells));
    }

    table.print(out)?;
    out.flush()?;
    Ok(())
}

fn render_csv<W>(collection: &ParameterCollection, out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    let mut writer = csv::Writer::from_writer(out);
    for record in collection {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}

fn render_json<W>(collection: &ParameterCollection, out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    serde_json::to_writer(&mut *out, collection)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::parameter::{
        ParameterDescriptor, ParameterRecord, ParameterType, ParameterValue, REDACTED_VALUE,
    };

    fn record(name: &str, value: &str, kind: ParameterType) -> ParameterRecord {
        ParameterRecord::from_parts(
            ParameterDescriptor {
                name: name.to_string(),
                kind,
                last_modified: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single(),
            },
            ParameterValue {
                value: value.to_string(),
                kind,
            },
        )
    }

    fn sample() -> ParameterCollection {
        [
            record("app/hosts", "a,b", ParameterType::StringList),
            record("greeting", "say \"hi\", world", ParameterType::String),
            record("db/password", "hunter2", ParameterType::SecureString),
        ]
        .into_iter()
        .collect()
    }

    fn rendered(collection: &ParameterCollection, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render(collection, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_takes_precedence_over_json() {
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Table);
    }

    #[test]
    fn table_header_parses_back() {
        let text = rendered(&sample(), OutputFormat::Table);
        let header_line = text
            .lines()
            .find(|line| line.contains("Name"))
            .expect("header row present");
        let header: Vec<&str> = header_line
            .split('│')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect();
        assert_eq!(header, TABLE_HEADER);
    }

    #[test]
    fn table_has_one_row_per_record() {
        let text = rendered(&sample(), OutputFormat::Table);
        let data_rows = text
            .lines()
            .filter(|line| line.starts_with('│') && !line.contains("LastModifiedDate"))
            .count();
        assert_eq!(data_rows, 3);
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn csv_has_no_header_and_quotes_fields() {
        let text = rendered(&sample(), OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "app/hosts,\"a,b\",StringList,2024-01-02 12:04:05",
                "greeting,\"say \"\"hi\"\", world\",String,2024-01-02 12:04:05",
                "db/password,******************,SecureString,2024-01-02 12:04:05",
            ]
        );
    }

    #[test]
    fn json_wraps_records_in_parameters_object() {
        let text = rendered(&sample(), OutputFormat::Json);
        assert_eq!(text.lines().count(), 1);

        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        let items = doc["parameters"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[2],
            serde_json::json!({
                "name": "db/password",
                "value": REDACTED_VALUE,
                "type": "SecureString",
                "last_modified_date": "2024-01-02 12:04:05",
            })
        );
    }

    #[test]
    fn empty_collection_renders_empty_array() {
        let text = rendered(&ParameterCollection::new(), OutputFormat::Json);
        assert_eq!(text.trim_end(), r#"{"parameters":[]}"#);
        assert_eq!(rendered(&ParameterCollection::new(), OutputFormat::Csv), "");
    }

    #[test]
    fn csv_and_json_agree_on_content() {
        let collection = sample();

        let csv_text = rendered(&collection, OutputFormat::Csv);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv_text.as_bytes());
        let from_csv: Vec<(String, String, String)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[2].to_string(), r[1].to_string())
            })
            .collect();

        let doc: serde_json::Value =
            serde_json::from_str(&rendered(&collection, OutputFormat::Json)).unwrap();
        let from_json: Vec<(String, String, String)> = doc["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| {
                (
                    p["name"].as_str().unwrap().to_string(),
                    p["type"].as_str().unwrap().to_string(),
                    p["value"].as_str().unwrap().to_string(),
                )
            })
            .collect();

        assert_eq!(from_csv, from_json);
    }
}
