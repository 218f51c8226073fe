//! ORDO CLI
//!
//! Compare, sort, merge and inspect UUID byte values using the storage
//! ordering.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod operand;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use operand::{format_operand, parse_operand, Inspection};
use ordo_core::compare_signum;
use ordo_storage::{ColumnType, Comparator, MergeIter, OrdoConfig, SortedIndex, UuidType};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ordo")]
#[command(about = "ORDO - storage ordering for UUID byte values", long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Tracing filter, overrides the config
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two values, printing -1, 0 or 1
    Compare {
        /// Left operand
        left: String,
        /// Right operand
        right: String,
    },
    /// Sort values, one per line
    Sort {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Keep one value per equal key, through the sorted index
        #[arg(short, long)]
        unique: bool,
    },
    /// Merge files that are each already sorted
    Merge {
        /// Sorted input files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Drop values equal to the previous one
        #[arg(short, long)]
        dedup: bool,
    },
    /// Show version and timestamp fields as JSON
    Inspect {
        /// Operand
        value: String,
    },
    /// Check a value is storable (empty or 16 bytes)
    Validate {
        /// Operand
        value: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => OrdoConfig::load(path)?,
        None => OrdoConfig::default(),
    };

    let filter = cli.log.as_deref().unwrap_or(&config.log_filter);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).wrap_err("invalid log filter")?)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Compare { left, right } => {
            println!("{}", compare_operands(&left, &right)?);
        }
        Commands::Sort { file, unique } => {
            let lines = match file {
                Some(path) => read_operands(BufReader::new(open(&path)?))?,
                None => read_operands(io::stdin().lock())?,
            };
            let sorted = if unique {
                sort_unique(lines, &config)?
            } else {
                sort_all(lines)
            };
            print_all(&sorted);
        }
        Commands::Merge { files, dedup } => {
            let runs = files
                .iter()
                .map(|path| read_operands(BufReader::new(open(path)?)))
                .collect::<Result<Vec<_>>>()?;
            print_all(&merge_runs(runs, dedup));
        }
        Commands::Inspect { value } => {
            let bytes = parse_operand(&value)?;
            println!("{}", serde_json::to_string_pretty(&Inspection::of(&bytes))?);
        }
        Commands::Validate { value } => {
            let bytes = parse_operand(&value)?;
            UuidType::INSTANCE.validate(&bytes)?;
            println!("valid");
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<File> {
    File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))
}

fn compare_operands(left: &str, right: &str) -> Result<i32> {
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;
    Ok(compare_signum(&left, &right))
}

/// One operand per non-blank line
fn read_operands(reader: impl BufRead) -> Result<Vec<Vec<u8>>> {
    let mut values = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value = parse_operand(&line).map_err(|e| eyre!("line {}: {}", n + 1, e))?;
        values.push(value);
    }
    tracing::debug!(count = values.len(), "read operands");
    Ok(values)
}

fn sort_all(mut values: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    values.sort_by(|a, b| UuidType::INSTANCE.compare(a, b));
    values
}

fn sort_unique(values: Vec<Vec<u8>>, config: &OrdoConfig) -> Result<Vec<Vec<u8>>> {
    let mut index = SortedIndex::with_config(config.index.clone());
    for value in &values {
        index.insert(value, ())?;
    }
    tracing::debug!(input = values.len(), unique = index.len(), "built index");
    Ok(index.keys().map(<[u8]>::to_vec).collect())
}

fn merge_runs(runs: Vec<Vec<Vec<u8>>>, dedup: bool) -> Vec<Vec<u8>> {
    let merge = MergeIter::new(runs.into_iter().map(Vec::into_iter), UuidType::INSTANCE);
    if dedup {
        merge.dedup().collect()
    } else {
        merge.collect()
    }
}

fn print_all(values: &[Vec<u8>]) {
    for value in values {
        println!("{}", format_operand(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_storage::IndexConfig;
    use std::io::Write;

    const EARLY: &str = "00000001-0000-1000-8000-000000000000";
    const LATE: &str = "00000000-0001-1000-8000-000000000000";
    const RANDOM: &str = "00000000-0000-4000-8000-000000000000";

    fn lines(values: &[Vec<u8>]) -> Vec<String> {
        values.iter().map(|v| format_operand(v)).collect()
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["ordo", "compare", EARLY, LATE]).unwrap();
        assert!(matches!(cli.command, Commands::Compare { .. }));

        let cli = Cli::try_parse_from(["ordo", "--log", "ordo=trace", "sort", "--unique"]).unwrap();
        assert_eq!(cli.log.as_deref(), Some("ordo=trace"));
        assert!(matches!(cli.command, Commands::Sort { unique: true, .. }));

        assert!(Cli::try_parse_from(["ordo", "merge"]).is_err());
    }

    #[test]
    fn test_compare_operands() {
        // Timestamp order disagrees with byte order here
        assert_eq!(compare_operands(EARLY, LATE).unwrap(), -1);
        assert_eq!(compare_operands(LATE, EARLY).unwrap(), 1);
        assert_eq!(compare_operands("-", "hex:0102").unwrap(), 0);
        assert_eq!(compare_operands("-", RANDOM).unwrap(), -1);
        assert!(compare_operands("bogus", RANDOM).is_err());
    }

    #[test]
    fn test_read_and_sort() {
        let input = format!("{}\n\n{}\n-\n{}\nhex:ff\n", RANDOM, LATE, EARLY);
        let values = read_operands(input.as_bytes()).unwrap();
        assert_eq!(values.len(), 5);

        let sorted = lines(&sort_all(values));
        assert_eq!(sorted[2..], [EARLY, LATE, RANDOM]);
        // The two short values tie and keep input order
        assert_eq!(sorted[..2], ["-", "hex:ff"]);
    }

    #[test]
    fn test_read_reports_line() {
        let err = read_operands("-\nnope\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_sort_unique() {
        let values = vec![
            parse_operand(LATE).unwrap(),
            parse_operand(EARLY).unwrap(),
            parse_operand(LATE).unwrap(),
        ];
        let unique = sort_unique(values, &OrdoConfig::default()).unwrap();
        assert_eq!(lines(&unique), vec![EARLY, LATE]);
    }

    #[test]
    fn test_sort_unique_respects_config() {
        let values = vec![parse_operand("hex:01").unwrap()];
        assert!(sort_unique(values.clone(), &OrdoConfig::default()).is_err());

        let config = OrdoConfig {
            index: IndexConfig {
                validate_keys: false,
                ..IndexConfig::default()
            },
            ..OrdoConfig::default()
        };
        assert_eq!(lines(&sort_unique(values, &config).unwrap()), vec!["hex:01"]);
    }

    #[test]
    fn test_merge_files() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        let mut b = tempfile::NamedTempFile::new().unwrap();
        writeln!(a, "{}\n{}", EARLY, RANDOM).unwrap();
        writeln!(b, "-\n{}\n{}", LATE, RANDOM).unwrap();

        let runs = [a.path(), b.path()]
            .iter()
            .map(|p| read_operands(BufReader::new(open(p).unwrap())).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(
            lines(&merge_runs(runs.clone(), false)),
            vec!["-", EARLY, LATE, RANDOM, RANDOM]
        );
        assert_eq!(lines(&merge_runs(runs, true)), vec!["-", EARLY, LATE, RANDOM]);
    }

    #[test]
    fn test_open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = open(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
