//! End-to-end tests for the import pipeline

use pretty_assertions::assert_eq;
use schema_tree::core::normalize_records;
use schema_tree::parser::{load_records, parse_records};
use schema_tree::{DataReader, Record};
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::NamedTempFile;

fn run(path: &Path, print_data: bool) -> (DataReader, String) {
    let mut reader = DataReader::new();
    let mut out = Vec::new();
    reader
        .import_and_print_data(path, print_data, &mut out)
        .expect("import should succeed");
    (reader, String::from_utf8(out).unwrap())
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_minimal_example() {
    let (_, output) = run(Path::new("test-data/minimal.txt"), true);
    assert_eq!(
        output,
        "Database 'Sales' (1 tables)\n\
         \tTable 'dbo.Orders' (1 columns)\n\
         \t\tColumn 'OrderId' with int data type with no nulls\n"
    );
}

#[test]
fn test_sample_schema_report() {
    let (reader, output) = run(Path::new("test-data/sample_schema.txt"), true);

    let expected = "\
Database 'Sales' (2 tables)
\tTable 'dbo.Orders' (3 columns)
\t\tColumn 'OrderId' with int data type with no nulls
\t\tColumn 'CustomerId' with int data type with no nulls
\t\tColumn 'Note' with nvarchar(200) data type accepts nulls
\tTable 'dbo.Customers' (2 columns)
\t\tColumn 'CustomerId' with int data type with no nulls
\t\tColumn 'Email' with varchar(255) data type accepts nulls
Database 'Inventory' (1 tables)
\tTable 'inv.StockLevels' (1 columns)
\t\tColumn 'Quantity' with decimal(10, 2) data type with no nulls
";
    assert_eq!(output, expected);
    // Header row has 7 fields, so it is loaded as data
    assert_eq!(reader.records().len(), 12);
    assert_eq!(reader.database_count(), 2);
}

#[test]
fn test_sample_schema_without_printing() {
    let (reader, output) = run(Path::new("test-data/sample_schema.txt"), false);
    assert_eq!(output, "");

    let sales = &reader.records()[1];
    assert_eq!(sales.name, "Sales");
    assert_eq!(sales.number_of_children, 2);
}

#[test]
fn test_types_uppercased_names_keep_case() {
    let (reader, _) = run(Path::new("test-data/minimal.txt"), false);
    let types: Vec<&str> = reader.records().iter().map(|r| r.record_type.as_str()).collect();
    let names: Vec<&str> = reader.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(types, vec!["DATABASE", "TABLE", "COLUMN"]);
    assert_eq!(names, vec!["Sales", "Orders", "OrderId"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADER PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_record_count_equals_line_count_when_all_valid() {
    let lines: Vec<String> = (0..50)
        .map(|i| format!("COLUMN;c{};;T;TABLE;int;{}", i, i % 2))
        .collect();
    let records = parse_records(Cursor::new(lines.join("\n"))).unwrap();
    assert_eq!(records.len(), lines.len());
}

#[test]
fn test_only_first_seven_fields_consulted() {
    let input = "COLUMN;c;s;T;TABLE;int;1;IGNORED;ALSO IGNORED\nshort;line;only\n";
    let records = parse_records(Cursor::new(input)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].is_nullable, "1");
}

#[test]
fn test_normalization_idempotent_on_sample() {
    let mut once = load_records(Path::new("test-data/sample_schema.txt")).unwrap();
    normalize_records(&mut once);
    let mut twice: Vec<Record> = once.clone();
    normalize_records(&mut twice);
    assert_eq!(once, twice);
}

// ═══════════════════════════════════════════════════════════════════════════
// CHILD COUNTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_child_counts_match_definition() {
    let (reader, _) = run(Path::new("test-data/sample_schema.txt"), false);
    let records = reader.records();
    for r in records {
        let expected = records
            .iter()
            .filter(|c| {
                c.parent_type.to_uppercase() == r.record_type.to_uppercase()
                    && c.parent_name == r.name
            })
            .count();
        assert_eq!(r.number_of_children, expected, "count for {:?}", r.name);
    }
}

#[test]
fn test_self_referencing_record() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "DATABASE;Loop;;Loop;database;;0").unwrap();

    let (reader, output) = run(temp_file.path(), true);
    assert_eq!(reader.records()[0].number_of_children, 1);
    // The database lists itself as its own table
    assert_eq!(
        output,
        "Database 'Loop' (1 tables)\n\tTable '.Loop' (1 columns)\n\t\tColumn 'Loop' with  data type with no nulls\n"
    );
}

#[test]
fn test_duplicate_lines_are_kept() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "DATABASE;Sales;;;;;0").unwrap();
    writeln!(temp_file, "TABLE;Orders;dbo;Sales;DATABASE;;0").unwrap();
    writeln!(temp_file, "TABLE;Orders;dbo;Sales;DATABASE;;0").unwrap();

    let (reader, output) = run(temp_file.path(), true);
    assert_eq!(reader.records().len(), 3);
    assert_eq!(
        output,
        "Database 'Sales' (2 tables)\n\tTable 'dbo.Orders' (0 columns)\n\tTable 'dbo.Orders' (0 columns)\n"
    );
}

#[test]
fn test_non_utf8_bytes_do_not_abort_import() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            b"DATABASE;Sales;;;;;0\n\
              TABLE;Orders;dbo;Sales;DATABASE;;0\n\
              COLUMN;Gr\xf6\xdfe;;Orders;TABLE;int;0\n",
        )
        .unwrap();

    let (reader, output) = run(temp_file.path(), true);
    assert_eq!(reader.records().len(), 3);
    assert!(output.starts_with("Database 'Sales' (1 tables)\n\tTable 'dbo.Orders' (1 columns)\n"));
    assert!(output.contains("\t\tColumn 'Gr\u{FFFD}"));
}

#[test]
fn test_lone_cr_line_endings() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"DATABASE;Sales;;;;;0\rTABLE;Orders;dbo;Sales;DATABASE;;0\r")
        .unwrap();

    let (reader, output) = run(temp_file.path(), true);
    assert_eq!(reader.records().len(), 2);
    assert_eq!(
        output,
        "Database 'Sales' (1 tables)\n\tTable 'dbo.Orders' (0 columns)\n"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_nonexistent_source() {
    let mut reader = DataReader::new();
    let mut out: Vec<u8> = Vec::new();
    let err = reader
        .import_and_print_data(Path::new("test-data/nope.txt"), true, &mut out)
        .unwrap_err();

    assert!(err.is_source_not_found());
    assert!(err.to_string().contains("nope.txt"));
    assert!(reader.records().is_empty());
    assert!(out.is_empty());
}

#[test]
fn test_directory_is_generic_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut reader = DataReader::new();
    let err = reader
        .import_and_print_data(dir.path(), true, &mut std::io::sink())
        .unwrap_err();

    assert!(!err.is_source_not_found());
    assert!(reader.records().is_empty());
}
