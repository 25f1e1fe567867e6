use crate::error::TreeError;
use crate::importer::{DataReader, ImportSummary};
use anyhow::Context;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Execute the report command.
///
/// The report goes to stdout. A load failure is printed to stderr and returned
/// so the binary can exit with a failure status.
pub fn report(file: PathBuf, print: bool, verbose: bool, pause: bool) -> anyhow::Result<bool> {
    let mut reader = DataReader::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = reader.import_and_print_data(&file, print, &mut out);
    drop(out);

    let ok = match outcome {
        Ok(summary) => {
            if verbose {
                print_summary(&summary, reader.database_count());
            }
            true
        }
        Err(e) => {
            report_error(&e);
            false
        }
    };

    if pause {
        wait_for_enter()?;
    }

    Ok(ok)
}

fn print_summary(summary: &ImportSummary, databases: usize) {
    let line = format!(
        "{} records loaded, {} databases, {} lines written",
        summary.loaded, databases, summary.lines_written
    );
    eprintln!("{} {}", "✅".green(), line.bold());
}

fn report_error(error: &TreeError) {
    eprintln!("{}", error.to_string().red());
}

/// Block until a line (or EOF) arrives on stdin
fn wait_for_enter() -> anyhow::Result<()> {
    eprint!("{}", "Press Enter to exit...".dimmed());
    io::stderr().flush().context("failed to flush stderr")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(())
}
