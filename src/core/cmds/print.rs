pub mod config;

use crate::types::{AppError, AppResult};

pub enum PrintCommand {
    Config(String),
}

pub fn execute_print(command: PrintCommand) -> AppResult<()> {
    match command {
        PrintCommand::Config(format) => match format.as_str() {
            "table" | "json" => config::execute(format),
            _ => Err(AppError::Custom(format!(
                "Invalid format '{format}'. Valid options are: table, json"
            ))),
        },
    }
}
