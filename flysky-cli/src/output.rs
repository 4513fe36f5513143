//! Rendering reservations for the terminal.
//!
//! Every listing command prints through [`write_reservations`], which supports
//! a tab-separated table for people and JSON, CSV, or TSV for scripts.

use crate::error::CliError;
use flysky::{Field, OutputFormat, Reservation};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "id",
    "name",
    "flight_number",
    "departure",
    "destination",
    "date",
    "seat_number",
];

/// Writes `reservations` to `out` in `format`.
pub fn write_reservations<W: Write>(
    out: &mut W,
    reservations: &[Reservation],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => format_as_table(out, reservations),
        OutputFormat::Json => format_as_json(out, reservations),
        OutputFormat::Csv => format_as_delimited(out, reservations, b','),
        OutputFormat::Tsv => format_as_delimited(out, reservations, b'\t'),
    }
}

/// The seven column values of one reservation.
fn record(reservation: &Reservation) -> Vec<String> {
    let mut values = Vec::with_capacity(COLUMN_HEADERS.len());
    values.push(reservation.id().to_string());
    values.extend(
        Field::ALL
            .iter()
            .map(|field| reservation.fields().get(*field).to_string()),
    );
    values
}

/// Format reservations as a human-readable table.
fn format_as_table<W: Write>(out: &mut W, reservations: &[Reservation]) -> Result<(), CliError> {
    // Print header (uppercase for table display)
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for reservation in reservations {
        writeln!(out, "{}", record(reservation).join("\t"))?;
    }

    Ok(())
}

/// Format reservations as a JSON array.
fn format_as_json<W: Write>(out: &mut W, reservations: &[Reservation]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, reservations)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert `csv::Error` to `CliError`.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited<W: Write>(
    out: &mut W,
    reservations: &[Reservation],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for reservation in reservations {
        writer.write_record(record(reservation)).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
