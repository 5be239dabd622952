//! Bounded execution of external management-tool commands.
//!
//! Every invocation runs with captured output and a deadline. Arguments are
//! passed as discrete argv entries; no shell is involved.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Default number of seconds a tool invocation may run before it is killed.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Interval between liveness checks while waiting on a child process.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// A single external tool invocation.
///
/// # Examples
///
/// ```no_run
/// use confsync::ToolCommand;
///
/// let output = ToolCommand::new("drush")
///     .arg("config:get")
///     .arg("system.site")
///     .current_dir("/var/www/site")
///     .run()?;
/// assert!(output.success());
/// # Ok::<(), confsync::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    timeout: Duration,
}

impl ToolCommand {
    /// Creates a command for `program` with the default timeout.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the working directory for the invocation.
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Sets the deadline for the invocation.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Human-readable rendering of the command line, for logs and errors.
    #[must_use]
    pub fn display(&self) -> String {
        let mut rendered = self.program.display().to_string();
        for arg in &self.args {
            rendered.push(' ');
            rendered.push_str(arg);
        }
        rendered
    }

    /// Runs the command to completion, capturing stdout and stderr.
    ///
    /// The child is killed and a timeout error returned if it outlives the
    /// configured deadline. A non-zero exit is not an error at this layer;
    /// callers inspect [`ToolOutput::success`].
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned, an I/O error
    /// occurs while waiting, or the deadline expires.
    pub fn run(&self) -> Result<ToolOutput> {
        log::debug!("running: {}", self.display());

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|source| Error::Launch {
            program: self.program.display().to_string(),
            source,
        })?;

        // Drain both pipes on background threads so a chatty tool cannot
        // deadlock against a full pipe buffer while we poll for exit.
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::Timeout {
                    seconds: self.timeout.as_secs(),
                    command: self.display(),
                });
            }
            thread::sleep(POLL_INTERVAL);
        };

        Ok(ToolOutput {
            status,
            stdout: join_reader(stdout_reader),
            stderr: join_reader(stderr_reader),
        })
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<thread::JoinHandle<String>> {
    pipe.map(|mut stream| {
        thread::spawn(move || {
            let mut bytes = Vec::new();
            let _ = stream.read_to_end(&mut bytes);
            String::from_utf8_lossy(&bytes).into_owned()
        })
    })
}

fn join_reader(handle: Option<thread::JoinHandle<String>>) -> String {
    handle
        .and_then(|reader| reader.join().ok())
        .unwrap_or_default()
}

/// Captured result of a completed tool invocation.
#[derive(Debug)]
pub struct ToolOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl ToolOutput {
    /// Returns true if the tool exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// The captured standard output.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// The captured standard error.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Combined diagnostic text for error reporting and message matching.
    ///
    /// Stderr comes first since management tools put their messages there;
    /// stdout is appended when distinct. Falls back to the exit status when
    /// the tool was silent.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        let stdout = self.stdout.trim();
        match (stderr.is_empty(), stdout.is_empty()) {
            (false, false) => format!("{stderr}\n{stdout}"),
            (false, true) => stderr.to_string(),
            (true, false) => stdout.to_string(),
            (true, true) => self.status.to_string(),
        }
    }
}
