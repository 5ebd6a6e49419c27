//! Column names recognized by ingestion, indexing and queries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// A column of a viewing event.
///
/// `Stb` is the entity id column. Every other column is indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Stb,
    Title,
    Provider,
    Date,
    Rev,
    Time,
}

impl Column {
    /// All columns in declaration order
    pub const ALL: [Column; 6] = [
        Column::Stb,
        Column::Title,
        Column::Provider,
        Column::Date,
        Column::Rev,
        Column::Time,
    ];

    /// Columns that carry a secondary index, in index write order
    pub const INDEXED: [Column; 5] = [
        Column::Date,
        Column::Title,
        Column::Provider,
        Column::Rev,
        Column::Time,
    ];

    /// Returns the lower-case column name
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Stb => "stb",
            Column::Title => "title",
            Column::Provider => "provider",
            Column::Date => "date",
            Column::Rev => "rev",
            Column::Time => "time",
        }
    }

    /// Returns true if this column has a secondary index
    pub fn is_indexed(&self) -> bool {
        !matches!(self, Column::Stb)
    }

    /// Parses a comma separated column list such as `stb,rev,title`.
    ///
    /// An empty list is an error: callers decide separately whether an
    /// absent list is allowed.
    pub fn parse_list(list: &str) -> SchemaResult<Vec<Column>> {
        if list.trim().is_empty() {
            return Err(SchemaError::UnknownColumn(String::new()));
        }
        list.split(',').map(str::parse).collect()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Column {
    type Err = SchemaError;

    /// Case-insensitive: `STB`, `Stb` and `stb` are the same column.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| SchemaError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("STB".parse::<Column>().unwrap(), Column::Stb);
        assert_eq!("Rev".parse::<Column>().unwrap(), Column::Rev);
        assert_eq!("provider".parse::<Column>().unwrap(), Column::Provider);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "revenue".parse::<Column>().unwrap_err();
        assert_eq!(err, SchemaError::UnknownColumn("revenue".into()));
    }

    #[test]
    fn test_parse_list() {
        let cols = Column::parse_list("stb,TITLE,rev").unwrap();
        assert_eq!(cols, vec![Column::Stb, Column::Title, Column::Rev]);

        assert!(Column::parse_list("stb,,rev").is_err());
        assert!(Column::parse_list("").is_err());
    }

    #[test]
    fn test_stb_not_indexed() {
        assert!(!Column::Stb.is_indexed());
        assert!(Column::INDEXED.iter().all(Column::is_indexed));
        assert!(!Column::INDEXED.contains(&Column::Stb));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Column::Rev).unwrap(), "\"rev\"");
        let col: Column = serde_json::from_str("\"date\"").unwrap();
        assert_eq!(col, Column::Date);
    }
}
