use clap::Parser;
use schema_tree::cli;
use schema_tree::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "schema-tree")]
#[command(about = "Print a database/table/column dump as an indented tree.")]
#[command(long_about = "schema-tree - Database schema dump viewer

Reads a semicolon-delimited file, one node per line:

  Type;Name;Schema;ParentName;ParentType;DataType;IsNullable

Lines with fewer than 7 fields are skipped. Parents are matched by
ParentType + ParentName against each record's Type + Name.

OUTPUT:
  Database 'Sales' (1 tables)
      Table 'dbo.Orders' (1 columns)
          Column 'OrderId' with int data type with no nulls

EXAMPLES:
  schema-tree dump.txt               # Print the tree
  schema-tree dump.txt --no-print -v # Only load and count
  schema-tree dump.txt --pause       # Wait for Enter afterwards")]
#[command(version)]
struct Cli {
    /// Path to the semicolon-delimited input file
    file: PathBuf,

    /// Load and count without printing the report
    #[arg(long, env = "SCHEMA_TREE_NO_PRINT")]
    no_print: bool,

    /// Wait for Enter after the report
    #[arg(long, env = "SCHEMA_TREE_PAUSE")]
    pause: bool,

    /// Debug logging and a summary on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ok = cli::report(cli.file, !cli.no_print, cli.verbose, cli.pause)?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
