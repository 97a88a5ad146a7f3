use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a workspace config
    Init,

    /// Aggregate a benchmark results file and print comparative statistics
    Report(ReportArgs),

    /// Print various information about the tool configuration
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the report command
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Pipe-delimited results file, one trial per line
    #[arg(value_name = "RESULTS")]
    pub results: String,

    /// Comma-separated ordered list of solver names under comparison.
    /// Replaces config [bench].solvers if provided.
    #[arg(long)]
    pub solvers: Option<String>,

    /// Expected number of benchmark problems (averaging denominator).
    /// Defaults to the number of distinct instances in the results file.
    #[arg(long)]
    pub problems: Option<u32>,

    /// Timeout threshold in seconds; trials at or above it count as timeouts.
    /// Replaces config [bench].timeout if provided.
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Coverage metric used for rankings and comparisons:
    /// statement, branch, function, or line.
    /// Replaces config [bench].coverage if provided.
    #[arg(long = "coverage-mode")]
    pub coverage_mode: Option<String>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// Print the effective global configuration
    Config(PrintConfigArgs),
}

/// Arguments for the print config subcommand
#[derive(Parser, Debug)]
pub struct PrintConfigArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}
