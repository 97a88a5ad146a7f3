use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds;
use crate::core::cmds::print::PrintCommand;
use crate::core::cmds::report::ReportOptions;
use crate::core::logging::init_logging;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();

    let cwd = env::current_dir()?;
    debug!("Current working directory: {}", cwd.display());

    // Dispatch to appropriate command
    match args.command {
        Commands::Init => cmds::execute_init(),
        Commands::Report(report_args) => {
            // Resolve command-specific options
            let solvers = config().resolve_solvers(report_args.solvers.as_deref())?;
            let coverage_mode =
                config().resolve_coverage_mode(report_args.coverage_mode.as_deref())?;
            let timeout = config().resolve_timeout(report_args.timeout)?;
            let problems = config().resolve_problems(report_args.problems)?;

            cmds::execute_report(ReportOptions {
                results: report_args.results,
                solvers,
                problems,
                timeout,
                coverage_mode,
                format: report_args.format,
            })
        }
        Commands::Print { command } => match command {
            PrintArgs::Config(print_args) => {
                cmds::execute_print(PrintCommand::Config(print_args.format))
            }
        },
    }
}
