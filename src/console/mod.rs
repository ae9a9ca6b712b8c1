//! Interactive console front end
//!
//! - `command`: parses one input line into a `Command`
//! - `interface`: the read loop and all console output

mod command;
mod interface;

pub use command::{
    ADD_USAGE, COMPLETE_USAGE, Command, CommandError, DELETE_USAGE, UPDATE_USAGE, parse_command,
};
pub use interface::{ConsoleInterface, Flow};
