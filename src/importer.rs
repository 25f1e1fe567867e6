use crate::core::{assign_child_counts, normalize_records};
use crate::error::{TreeError, TreeResult};
use crate::parser;
use crate::report;
use crate::types::Record;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Outcome of one successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records added by this import
    pub loaded: usize,
    /// Records held after this import
    pub total: usize,
    /// Report lines written, zero when printing was off
    pub lines_written: usize,
}

/// Holds the imported records across calls and runs the load → normalize → count → print pipeline
#[derive(Debug, Default)]
pub struct DataReader {
    records: Vec<Record>,
}

impl DataReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Load `path`, append its records, recount children and optionally print the report to `out`.
    ///
    /// On a load failure nothing is appended and nothing is printed.
    pub fn import_and_print_data<W: Write>(
        &mut self,
        path: &Path,
        print_data: bool,
        out: &mut W,
    ) -> TreeResult<ImportSummary> {
        let loaded = parser::load_records(path)?;
        let loaded_count = loaded.len();
        self.records.extend(loaded);

        normalize_records(&mut self.records);
        let index = assign_child_counts(&mut self.records);

        let lines_written = if print_data {
            report::write_report(&self.records, &index, out).map_err(TreeError::Report)?
        } else {
            0
        };

        info!(
            path = %path.display(),
            loaded = loaded_count,
            total = self.records.len(),
            "import complete"
        );

        Ok(ImportSummary {
            loaded: loaded_count,
            total: self.records.len(),
            lines_written,
        })
    }

    /// Number of top-level database records currently held
    pub fn database_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_database()).count()
    }
}
