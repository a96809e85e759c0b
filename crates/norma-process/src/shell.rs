use std::{
    fmt,
    io::{self, Read},
    process::{Child, Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Captured stdout/stderr of a shell command, each truncated to a maximum size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    /// Set when either stream produced more bytes than were kept.
    pub truncated: bool,
}

/// Options controlling shell command execution.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Kill the command if it hasn't exited after this duration.
    pub timeout: Option<Duration>,
    /// Maximum bytes kept *per stream*.
    pub max_bytes: usize,
    /// Terminates the command (and `cancelled` is set on the result) when triggered.
    pub cancellation: Option<CancellationToken>,
    /// Delay between the graceful termination signal and the forced kill.
    pub kill_grace: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            max_bytes: 16 * 1024 * 1024,
            cancellation: None,
            kill_grace: Duration::from_millis(250),
        }
    }
}

/// Outcome of a shell command that was successfully started.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub status: ExitStatus,
    pub output: CapturedOutput,
    pub timed_out: bool,
    pub cancelled: bool,
}

impl CommandResult {
    fn succeeded(&self) -> bool {
        !self.timed_out && !self.cancelled && self.status.success()
    }
}

/// A command that ran but exited unsuccessfully, timed out or was cancelled.
#[derive(Debug, Clone)]
pub struct CommandFailure {
    pub command: String,
    pub result: CommandResult,
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = &self.result;
        write!(f, "`{}` exited with {}", self.command, result.status)?;
        if result.timed_out {
            write!(f, " (timed out)")?;
        }
        if result.cancelled {
            write!(f, " (cancelled)")?;
        }
        if !result.output.stderr.is_empty() {
            write!(f, "\nstderr:\n{}", result.output.stderr.trim_end())?;
        }
        Ok(())
    }
}

impl std::error::Error for CommandFailure {}

#[derive(Debug, Error)]
pub enum RunCommandError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Failed(Box<CommandFailure>),
}

/// Run `command` through the platform shell and return its standard output.
///
/// The exit status is not inspected; use [`run_shell_command_checked`] when a
/// failing command should be an error. Output beyond the default
/// [`RunOptions::max_bytes`] is dropped.
pub fn run_shell_command(command: &str) -> Result<String, RunCommandError> {
    run_shell_command_with(command, RunOptions::default())
        .map(|result| result.output.stdout)
        .map_err(|source| RunCommandError::Spawn {
            command: command.to_owned(),
            source,
        })
}

/// Run `command` and treat non-zero exits, timeouts and cancellation as errors.
pub fn run_shell_command_checked(
    command: &str,
    opts: RunOptions,
) -> Result<CommandResult, RunCommandError> {
    let result =
        run_shell_command_with(command, opts).map_err(|source| RunCommandError::Spawn {
            command: command.to_owned(),
            source,
        })?;

    if !result.succeeded() {
        return Err(RunCommandError::Failed(Box::new(CommandFailure {
            command: command.to_owned(),
            result,
        })));
    }
    Ok(result)
}

fn shell(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

/// Run `command` through the platform shell (`sh -c` on Unix, `cmd /C` on
/// Windows) with bounded output capture.
///
/// Returns `Err` only when the shell could not be started or waited on. A
/// timed-out or cancelled command is killed together with everything it spawned
/// and reported through the flags on [`CommandResult`].
pub fn run_shell_command_with(command: &str, opts: RunOptions) -> io::Result<CommandResult> {
    let mut cmd = shell(command);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    // Own process group, so a timeout also reaches grandchildren that still
    // hold the output pipes open.
    #[cfg(unix)]
    unsafe {
        use std::os::unix::process::CommandExt;

        cmd.pre_exec(|| {
            // SAFETY: `setpgid` is async-signal-safe and does not allocate.
            if libc::setpgid(0, 0) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(())
        });
    }

    let mut child = cmd.spawn()?;
    tracing::debug!(command, pid = child.id(), "spawned shell command");

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        return Err(io::Error::other("shell output pipes were not captured"));
    };

    let max_bytes = opts.max_bytes;
    let stdout_reader = thread::spawn(move || read_bounded(stdout, max_bytes));
    let stderr_reader = thread::spawn(move || read_bounded(stderr, max_bytes));

    let (status, timed_out, cancelled) = wait(&mut child, &opts)?;

    let (stdout, stdout_truncated) = join_reader(stdout_reader, "stdout")?;
    let (stderr, stderr_truncated) = join_reader(stderr_reader, "stderr")?;
    let truncated = stdout_truncated || stderr_truncated;

    if timed_out {
        tracing::warn!(command, timeout = ?opts.timeout, "shell command timed out");
    }
    if truncated {
        tracing::warn!(command, max_bytes, "shell command output truncated");
    }
    tracing::debug!(command, %status, cancelled, "shell command finished");

    Ok(CommandResult {
        status,
        output: CapturedOutput {
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
            truncated,
        },
        timed_out,
        cancelled,
    })
}

/// Wait for `child`, honouring the timeout and cancellation in `opts`.
///
/// Returns `(status, timed_out, cancelled)`.
fn wait(child: &mut Child, opts: &RunOptions) -> io::Result<(ExitStatus, bool, bool)> {
    if opts.timeout.is_none() && opts.cancellation.is_none() {
        return Ok((child.wait()?, false, false));
    }

    let poll = Duration::from_millis(50);
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status, false, false));
        }

        if opts
            .cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            let status = kill_process_tree(child, opts.kill_grace)?;
            return Ok((status, false, true));
        }

        match opts.timeout {
            Some(timeout) if start.elapsed() >= timeout => {
                let status = kill_process_tree(child, opts.kill_grace)?;
                return Ok((status, true, false));
            }
            Some(timeout) => thread::sleep(poll.min(timeout.saturating_sub(start.elapsed()))),
            None => thread::sleep(poll),
        }
    }
}

fn kill_process_tree(child: &mut Child, grace: Duration) -> io::Result<ExitStatus> {
    #[cfg(unix)]
    {
        // The child leads its own process group; a negative pid signals the group.
        let group = -(child.id() as i32);
        unsafe {
            let _ = libc::kill(group, libc::SIGTERM);
        }

        let start = Instant::now();
        while start.elapsed() < grace {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            thread::sleep(Duration::from_millis(25));
        }

        unsafe {
            let _ = libc::kill(group, libc::SIGKILL);
        }
        child.wait()
    }

    #[cfg(windows)]
    {
        let _ = grace;
        // `Child::kill` only ends `cmd.exe` itself; its children would keep the
        // pipes open and the reader threads would never finish.
        let pid = child.id().to_string();
        let _ = Command::new("taskkill")
            .args(["/PID", &pid, "/T", "/F"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        let _ = child.kill();
        child.wait()
    }

    #[cfg(not(any(unix, windows)))]
    {
        let _ = grace;
        let _ = child.kill();
        child.wait()
    }
}

fn join_reader(
    handle: thread::JoinHandle<io::Result<(Vec<u8>, bool)>>,
    stream: &'static str,
) -> io::Result<(Vec<u8>, bool)> {
    handle
        .join()
        .map_err(|_| io::Error::other(format!("{stream} reader thread panicked")))?
}

/// Drain `reader` to the end, keeping at most `max_bytes`.
fn read_bounded(mut reader: impl Read, max_bytes: usize) -> io::Result<(Vec<u8>, bool)> {
    let mut kept = Vec::new();
    let mut truncated = false;
    let mut buf = [0u8; 8 * 1024];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };

        let room = max_bytes.saturating_sub(kept.len());
        kept.extend_from_slice(&buf[..n.min(room)]);
        truncated |= n > room;
    }

    Ok((kept, truncated))
}
