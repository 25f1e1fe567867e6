use crate::error::{TreeError, TreeResult};
use crate::types::{Record, FIELD_DELIMITER};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a single input line into a record.
///
/// Short lines yield `None` and are dropped silently by the callers.
pub fn parse_line(line: &str) -> Option<Record> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    Record::from_fields(&fields)
}

/// Read every line from `reader`, keeping those with enough fields, in input order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not valid UTF-8
/// are replaced with U+FFFD instead of failing the read. A leading UTF-8 BOM is dropped.
pub fn parse_records<R: BufRead>(mut reader: R) -> TreeResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut first = true;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let mut chunk = &buf[..];
        if first {
            chunk = chunk.strip_prefix(UTF8_BOM).unwrap_or(chunk);
            first = false;
        }
        let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);

        for line in chunk.split(|&b| b == b'\r') {
            if let Some(record) = parse_line(&String::from_utf8_lossy(line)) {
                records.push(record);
            }
        }
    }
    Ok(records)
}

/// Open `path` and load all well-formed records from it.
///
/// A missing file is reported as [`TreeError::SourceNotFound`]; anything else
/// that goes wrong while opening or reading is [`TreeError::Io`].
/// The file handle is released before this returns, on success or failure.
pub fn load_records(path: &Path) -> TreeResult<Vec<Record>> {
    let file = File::open(path).map_err(|e| TreeError::from_open(path, e))?;
    debug!(path = %path.display(), "opened input file");

    let records = parse_records(BufReader::new(file))?;
    debug!(count = records.len(), "loaded records");
    Ok(records)
}
