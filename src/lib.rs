//! schema-tree - database/table/column dump viewer
//!
//! Reads a flat, semicolon-delimited description of a three-level schema,
//! rebuilds the parent/child links by type + name matching, counts children
//! and writes an indented tree.
//!
//! # Example
//!
//! ```no_run
//! use schema_tree::DataReader;
//! use std::path::Path;
//!
//! let mut reader = DataReader::new();
//! let summary = reader.import_and_print_data(Path::new("dump.txt"), true, &mut std::io::stdout())?;
//!
//! println!("Records: {}", summary.total);
//! # Ok::<(), schema_tree::error::TreeError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod importer;
pub mod logging;
pub mod parser;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{TreeError, TreeResult};
pub use importer::{DataReader, ImportSummary};
pub use types::Record;
