//! elog-cli library
//!
//! Flag parsing and the stdin pump used by the `elog` binary, exported for
//! tests.

pub(crate) mod cli;
pub(crate) mod error;
pub(crate) mod pipe;


pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use pipe::{pipe_lines, spawn_stdin_reader};

/// Lines buffered between the stdin thread and the logger.
pub const STDIN_CHANNEL_CAPACITY: usize = 1024;
