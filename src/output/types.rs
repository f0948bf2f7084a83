//! Output types
//!
//! Defines the output formats and the column descriptors used for tabular
//! rendering.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// YAML document
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
    /// CSV with a header row
    Csv,
}

impl OutputFormat {
    /// Whether this format needs flat records
    pub fn is_tabular(self) -> bool {
        matches!(self, Self::Csv)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// A single field value of a flat record
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Absent optional value
    Empty,
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

impl Cell {
    /// Render the cell as CSV field text
    pub fn render(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Int(n) => n.to_string(),
            Cell::UInt(n) => n.to_string(),
            Cell::Float(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::Timestamp(t) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value.into())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::UInt(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<DateTime<Utc>> for Cell {
    fn from(value: DateTime<Utc>) -> Self {
        Cell::Timestamp(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

/// Named accessor for one column of a flat record
pub struct Column<T> {
    /// Header text
    pub name: &'static str,
    /// Extracts the cell for this column
    pub value: fn(&T) -> Cell,
}

impl<T> Column<T> {
    /// Extract this column's cell from a record
    pub fn cell(&self, record: &T) -> Cell {
        (self.value)(record)
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("name", &self.name).finish()
    }
}

/// A record that can be rendered by the output writer
pub trait Record: Serialize + Sized + 'static {
    /// Column table for tabular output, `None` when the record is not flat
    fn columns() -> Option<&'static [Column<Self>]>;
}

/// Build a static column table for a record type.
///
/// ```ignore
/// const COLUMNS: &[Column<EventType>] = columns!(EventType {
///     "id" => |t| t.id,
///     "name" => |t| t.name.as_str(),
/// });
/// ```
macro_rules! columns {
    ($ty:ty { $($name:literal => |$rec:ident| $value:expr),* $(,)? }) => {
        &[
            $(
                $crate::output::Column::<$ty> {
                    name: $name,
                    value: |$rec: &$ty| $crate::output::Cell::from($value),
                },
            )*
        ]
    };
}

pub(crate) use columns;
