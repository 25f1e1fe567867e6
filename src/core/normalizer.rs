//! Field cleanup applied once after loading, before any parent matching

use crate::types::{casefold, Record};

/// Remove every whitespace character, line breaks included
pub fn normalize_field(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strip whitespace and uppercase a type label, one character at a time
pub fn normalize_type(value: &str) -> String {
    casefold(&normalize_field(value)).into_owned()
}

/// Normalize the identifying fields of one record.
///
/// `data_type` and `is_nullable` are left as loaded.
pub fn normalize_record(record: &mut Record) {
    record.record_type = normalize_type(&record.record_type);
    record.name = normalize_field(&record.name);
    record.schema = normalize_field(&record.schema);
    record.parent_name = normalize_field(&record.parent_name);
    record.parent_type = normalize_field(&record.parent_type);
}

pub fn normalize_records(records: &mut [Record]) {
    records.iter_mut().for_each(normalize_record);
}
