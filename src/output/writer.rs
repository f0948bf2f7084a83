//! Output writer
//!
//! Serializes records to the requested format on a caller-provided sink.

use super::types::{OutputFormat, Record};
use crate::error::{Error, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Write a sequence of records in the given format.
///
/// CSV output writes one header row followed by one row per record. An empty
/// sequence writes nothing at all. Record types without a column table are
/// rejected with [`Error::UnsupportedShape`].
pub fn write_records<T, W>(records: &[T], format: OutputFormat, out: W) -> Result<()>
where
    T: Record,
    W: Write,
{
    debug!(count = records.len(), %format, "Rendering records");
    match format {
        OutputFormat::Csv => write_csv(records, out),
        OutputFormat::Json => write_json(records, out),
        OutputFormat::Yaml => write_yaml(records, out),
    }
}

/// Write a single value in the given format.
///
/// Only structured formats accept a single value; CSV needs a sequence.
pub fn write_value<T, W>(value: &T, format: OutputFormat, out: W) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match format {
        OutputFormat::Csv => Err(Error::unsupported_shape(
            "CSV output requires a sequence of records",
        )),
        OutputFormat::Json => write_json(value, out),
        OutputFormat::Yaml => write_yaml(value, out),
    }
}

fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn write_yaml<T: Serialize + ?Sized, W: Write>(value: &T, mut out: W) -> Result<()> {
    serde_yaml::to_writer(&mut out, value)?;
    out.flush()?;
    Ok(())
}

fn write_csv<T: Record, W: Write>(records: &[T], out: W) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let columns = T::columns().ok_or_else(|| {
        Error::unsupported_shape(format!(
            "CSV output requires flat records, {} has nested fields",
            short_type_name::<T>()
        ))
    })?;

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(columns.iter().map(|c| c.name))?;

    for record in records {
        writer.write_record(columns.iter().map(|c| c.cell(record).render()))?;
    }

    writer.flush()?;
    Ok(())
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
