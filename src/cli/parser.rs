use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for tcreport
#[derive(Parser)]
#[command(
    name = "tcreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify container terminal entries by dwell time and build a per-day XLSX report",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file for missing or unknown fields"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Run the full pipeline and write the XLSX report
    Process {
        #[command(flatten)]
        input: InputArgs,

        /// Output report path
        #[arg(long, short, value_name = "FILE")]
        output: Option<String>,

        /// Upper bound in minutes of the first bucket
        #[arg(long = "first-threshold", value_name = "MINUTES")]
        first_threshold: Option<u32>,

        /// Upper bound in minutes of the second bucket
        #[arg(long = "second-threshold", value_name = "MINUTES")]
        second_threshold: Option<u32>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the day × category summary without writing any file
    Summary {
        #[command(flatten)]
        input: InputArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a legacy workbook (xls, xlsb, ods, xlsx) to XLSX, all sheets
    Convert {
        /// Source workbook
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Destination .xlsx file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Input selection shared by `process` and `summary`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input workbook or CSV file
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<String>,

    /// Sheet to read
    #[arg(long, short, value_name = "NAME")]
    pub sheet: Option<String>,

    /// 0-based row holding the column headers
    #[arg(long = "header-row", value_name = "ROW")]
    pub header_row: Option<usize>,
}
