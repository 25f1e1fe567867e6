//! Indented database → table → column listing
//!
//! Output goes to any [`Write`] sink; the caller chooses stdout, a file or a buffer.

use crate::core::ChildIndex;
use crate::types::Record;
use std::io::{self, Write};
use tracing::debug;

/// Write the three-level report for `records`.
///
/// Databases are the records typed `DATABASE`; tables are the children of a
/// database and columns the children of a table, resolved through `index`.
/// Every level keeps load order. Returns the number of lines written.
pub fn write_report<W: Write>(records: &[Record], index: &ChildIndex, out: &mut W) -> io::Result<usize> {
    let mut lines = 0;

    for database in records.iter().filter(|r| r.is_database()) {
        writeln!(out, "{}", format_database(database))?;
        lines += 1;

        for &table_idx in index.children_of(database) {
            let table = &records[table_idx];
            writeln!(out, "\t{}", format_table(table))?;
            lines += 1;

            for &column_idx in index.children_of(table) {
                writeln!(out, "\t\t{}", format_column(&records[column_idx]))?;
                lines += 1;
            }
        }
    }

    out.flush()?;
    debug!(lines, "report written");
    Ok(lines)
}

pub fn format_database(database: &Record) -> String {
    format!(
        "Database '{}' ({} tables)",
        database.name, database.number_of_children
    )
}

pub fn format_table(table: &Record) -> String {
    format!(
        "Table '{}.{}' ({} columns)",
        table.schema, table.name, table.number_of_children
    )
}

pub fn format_column(column: &Record) -> String {
    let nulls = if column.accepts_nulls() {
        "accepts nulls"
    } else {
        "with no nulls"
    };
    format!(
        "Column '{}' with {} data type {}",
        column.name, column.data_type, nulls
    )
}
