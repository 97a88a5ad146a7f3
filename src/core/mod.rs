pub mod aggregate;
pub mod cli;
pub mod cmds;
pub mod compare;
pub mod logging;
pub mod main_shared;
pub mod types;
