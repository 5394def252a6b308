// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// network once and dispatches to these handlers.

pub mod distances;
pub mod landmarks;
pub mod route;
