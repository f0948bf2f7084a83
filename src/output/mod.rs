//! Output module
//!
//! Renders records as YAML, JSON or CSV on any `std::io::Write` sink.
//!
//! # Overview
//!
//! Structured formats (YAML, JSON) serialize the full value graph with
//! `serde`. The tabular format (CSV) needs a sequence of flat records: each
//! record type carries a static column table that names its columns in
//! declaration order and converts each field to a [`Cell`].

mod types;
mod writer;

pub(crate) use types::columns;
pub use types::{Cell, Column, OutputFormat, Record};
pub use writer::{write_records, write_value};
