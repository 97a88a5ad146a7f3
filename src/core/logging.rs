use console::style;
use log::LevelFilter;

use crate::types::config::{colors_enabled, config};

/// Install the global logger. Info-level messages carry no prefix so report
/// output stays clean; other levels are prefixed with the level name.
pub fn init_logging() {
    let level = match config().log().level().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };
    let use_color = colors_enabled();

    // A second apply (e.g. from tests) keeps the first logger
    let _ = fern::Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            if record.level() == log::Level::Info {
                out.finish(format_args!("{message}"))
            } else {
                let label = record.level().to_string().to_lowercase();
                if use_color {
                    let styled = match record.level() {
                        log::Level::Error => style(label).red(),
                        log::Level::Warn => style(label).yellow(),
                        _ => style(label).dim(),
                    };
                    out.finish(format_args!("{}: {message}", styled.force_styling(true)))
                } else {
                    out.finish(format_args!("{label}: {message}"))
                }
            }
        })
        .chain(std::io::stdout())
        .apply();
}
