//! Viewing events and the ingestion line parser

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::column::Column;
use super::errors::{SchemaError, SchemaResult};

/// Separator between fields of an ingestion line
pub const FIELD_SEPARATOR: char = '|';

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// One viewing event: a box watched a title from a provider at a date/time.
///
/// All values are kept as canonical strings. Comparison, filtering and
/// ordering over events are plain string operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Entity (set-top-box) id
    pub stb: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub title: String,
    pub provider: String,
    /// Revenue with exactly two fractional digits
    pub rev: String,
    /// `HH:MM`
    pub time: String,
}

impl Event {
    /// Creates an event from already-validated values
    pub fn new(
        stb: impl Into<String>,
        date: impl Into<String>,
        title: impl Into<String>,
        provider: impl Into<String>,
        rev: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            stb: stb.into(),
            date: date.into(),
            title: title.into(),
            provider: provider.into(),
            rev: rev.into(),
            time: time.into(),
        }
    }

    /// Parses one `STB|TITLE|PROVIDER|DATE|REVENUE|TIME` line.
    ///
    /// A trailing line terminator is ignored. Date and time are re-rendered
    /// in canonical zero-padded form and revenue is normalized to two
    /// fractional digits.
    pub fn parse_line(line: &str) -> SchemaResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [stb, title, provider, date, revenue, time] = fields[..] else {
            return Err(SchemaError::FieldCount(fields.len()));
        };
        if stb.is_empty() {
            return Err(SchemaError::MissingStb);
        }

        let time = NaiveTime::parse_from_str(time, TIME_FORMAT)
            .map_err(|_| SchemaError::InvalidTime(time.to_string()))?;
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| SchemaError::InvalidDate(date.to_string()))?;
        let rev = normalize_revenue(revenue)?;

        Ok(Self {
            stb: stb.to_string(),
            date: date.format(DATE_FORMAT).to_string(),
            title: title.to_string(),
            provider: provider.to_string(),
            rev,
            time: time.format(TIME_FORMAT).to_string(),
        })
    }

    /// Renders the event back into its ingestion line (without newline)
    pub fn to_line(&self) -> String {
        [
            self.stb.as_str(),
            &self.title,
            &self.provider,
            &self.date,
            &self.rev,
            &self.time,
        ]
        .join("|")
    }

    /// Returns the value of a column
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Stb => &self.stb,
            Column::Title => &self.title,
            Column::Provider => &self.provider,
            Column::Date => &self.date,
            Column::Rev => &self.rev,
            Column::Time => &self.time,
        }
    }
}

/// Normalizes a revenue string to exactly two fractional digits.
///
/// `"6"` becomes `"6.00"`, `"2.5"` becomes `"2.50"`. Non-numeric and
/// non-finite values are rejected.
pub fn normalize_revenue(raw: &str) -> SchemaResult<String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SchemaError::InvalidRevenue(raw.to_string()))?;
    if !value.is_finite() {
        return Err(SchemaError::InvalidRevenue(raw.to_string()));
    }
    Ok(format!("{:.2}", value))
}
