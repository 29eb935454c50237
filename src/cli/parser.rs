use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rTripAgenda
#[derive(Parser)]
#[command(
    name = "rtripagenda",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn raw trip activity lists into a day-by-day agenda with travel and free time filled in",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// More diagnostics on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(global = true, short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How `show` lays out the agenda.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    /// One chronological table
    All,
    /// One table per region
    Region,
    /// One table per date, all regions mixed
    Date,
    /// One table per region and date
    #[default]
    RegionDate,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

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

    /// Render the enriched agenda of a schedule feed
    Show {
        /// Schedule feed (JSON array, listing or date-keyed admin export)
        feed: String,

        #[arg(long, short = 'r', help = "Only this region (default: config default_region)")]
        region: Option<String>,

        #[arg(long, short = 'd', conflicts_with = "range", help = "Only this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, A:B)"
        )]
        range: Option<String>,

        #[arg(long, value_enum, default_value = "region-date")]
        by: GroupBy,
    },

    /// Estimated travel time between two locations
    Travel {
        from: String,
        to: String,
    },

    /// Export the enriched agenda of a schedule feed
    Export {
        /// Schedule feed (JSON array, listing or date-keyed admin export)
        feed: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'r')]
        region: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
