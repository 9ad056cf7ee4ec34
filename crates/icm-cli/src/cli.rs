//! CLI argument definitions for the ICM codebook.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use icm_model::SubsetId;

#[derive(Parser)]
#[command(
    name = "icm",
    version,
    about = "ICM Codebook - Look up medical classification codes",
    long_about = "Look up medical classification codes across the four ICM subsets\n\
                  (ICM9/ICM10, diagnosis/procedure).\n\n\
                  Supports exact lookup by normalized code, fuzzy search ranked by\n\
                  edit distance, and random sampling from a subset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Load catalog data from this directory instead of the bundled data.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a code exactly (case- and punctuation-insensitive).
    Find(FindArgs),

    /// Fuzzy-search the whole catalog, ranked by edit distance.
    Search(SearchArgs),

    /// Draw random entries from one subset.
    Sample(SampleArgs),

    /// List the four subsets with their entry counts.
    Subsets(SubsetsArgs),
}

#[derive(Parser)]
pub struct FindArgs {
    /// The code to look up (e.g. "A00.0" or "a000").
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Restrict the lookup to one subset.
    #[arg(long = "subset", value_enum, value_name = "SUBSET")]
    pub subset: Option<SubsetArg>,

    /// Emit the result as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// The code to search for.
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Emit the results as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Subset to sample from.
    #[arg(value_enum, value_name = "SUBSET")]
    pub subset: SubsetArg,

    /// Number of entries to draw (must not exceed the subset size).
    #[arg(value_name = "COUNT")]
    pub count: usize,

    /// Emit the results as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SubsetsArgs {
    /// Emit the counts as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI subset choices; mirrors [`SubsetId`] with kebab-case values.
#[derive(Clone, Copy, ValueEnum)]
pub enum SubsetArg {
    Icm9Diagnosis,
    Icm10Diagnosis,
    Icm9Procedure,
    Icm10Procedure,
}

impl From<SubsetArg> for SubsetId {
    fn from(arg: SubsetArg) -> Self {
        match arg {
            SubsetArg::Icm9Diagnosis => Self::Icm9Diagnosis,
            SubsetArg::Icm10Diagnosis => Self::Icm10Diagnosis,
            SubsetArg::Icm9Procedure => Self::Icm9Procedure,
            SubsetArg::Icm10Procedure => Self::Icm10Procedure,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_find_with_subset() {
        let cli = Cli::try_parse_from(["icm", "find", "A00.0", "--subset", "icm10-diagnosis"])
            .expect("valid arguments");
        match cli.command {
            Command::Find(args) => {
                assert_eq!(args.code, "A00.0");
                assert!(matches!(args.subset, Some(SubsetArg::Icm10Diagnosis)));
            }
            _ => panic!("expected find command"),
        }
    }

    #[test]
    fn rejects_unknown_subset_value() {
        let result = Cli::try_parse_from(["icm", "sample", "icm11-diagnosis", "3"]);
        assert!(result.is_err());
    }
}
