//! Shell command execution and process identity.
//!
//! Commands run through the platform shell with bounded output capture. A
//! timeout or cancellation kills the whole process tree the command started.

mod host;
mod shell;

pub use host::{hostname, hostname_and_pid};
pub use shell::{
    run_shell_command, run_shell_command_checked, run_shell_command_with, CapturedOutput,
    CommandFailure, CommandResult, RunCommandError, RunOptions,
};

pub use tokio_util::sync::CancellationToken;
