use log::info;

use crate::types::AppResult;
use crate::types::config::config;

pub fn execute(format: String) -> AppResult<()> {
    let effective_config = config().to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
    } else {
        // Table format
        info!("Effective Configuration:");
        info!("");
        info!("Bench:");
        if let Some(bench) = &effective_config.bench {
            if let Some(solvers) = &bench.solvers {
                if solvers.is_empty() {
                    info!("  solvers: (not set)");
                } else {
                    info!("  solvers: [{}]", solvers.join(", "));
                }
            }
            match bench.problems {
                Some(problems) => info!("  problems: {problems}"),
                None => info!("  problems: (distinct instances in input)"),
            }
            if let Some(timeout) = bench.timeout {
                info!("  timeout: {timeout}s");
            }
            if let Some(coverage) = bench.coverage {
                info!("  coverage: {coverage}");
            }
        }

        info!("");
        info!("Log:");
        if let Some(log) = &effective_config.log {
            if let Some(level) = &log.level {
                info!("  level: {level}");
            }
            match log.color {
                Some(true) => info!("  color: on"),
                Some(false) => info!("  color: off"),
                None => info!("  color: auto"),
            }
        }
    }

    Ok(())
}
