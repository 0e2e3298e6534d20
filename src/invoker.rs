//! Probe invoker: runs the external tool for one category.
//!
//! [`ProbeInvoker`] is the seam between the registry and the process
//! boundary; the registry guarantees at most one call per category, so
//! implementations do no caching of their own. [`SystemProfiler`] is the
//! real implementation; tests substitute counting doubles.

use crate::category::Category;
use crate::config::ProfilerConfig;
use crate::error::ExecutionError;
use std::io::{self, Read};
use std::process::{Child, Command, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const STDERR_SNIPPET_LIMIT: usize = 512;

/// Produces raw JSON bytes for a category.
pub trait ProbeInvoker: Send + Sync {
    fn invoke(&self, category: Category) -> Result<Vec<u8>, ExecutionError>;
}

/// Runs `system_profiler <category> -json` and captures stdout.
#[derive(Clone, Debug, Default)]
pub struct SystemProfiler {
    config: ProfilerConfig,
}

impl SystemProfiler {
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    fn program_label(&self) -> String {
        self.config.program.display().to_string()
    }
}

impl ProbeInvoker for SystemProfiler {
    fn invoke(&self, category: Category) -> Result<Vec<u8>, ExecutionError> {
        let program = self.program_label();
        let mut command = Command::new(&self.config.program);
        command
            .args(self.config.arguments(category.as_str()))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(program = %program, category = %category, "spawning profiler");
        let started = Instant::now();
        let child = command
            .spawn()
            .map_err(|err| ExecutionError::ProcessSpawnFailed {
                program: program.clone(),
                category,
                reason: err.to_string(),
            })?;

        let output = match self.config.timeout {
            None => child.wait_with_output(),
            Some(limit) => match wait_with_deadline(child, limit) {
                Ok(Some(output)) => Ok(output),
                Ok(None) => {
                    warn!(category = %category, ?limit, "profiler timed out");
                    return Err(ExecutionError::TimedOut {
                        program,
                        category,
                        limit,
                    });
                }
                Err(err) => Err(err),
            },
        }
        .map_err(|err| ExecutionError::ProcessSpawnFailed {
            program: program.clone(),
            category,
            reason: format!("waiting for exit: {err}"),
        })?;

        debug!(
            category = %category,
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            elapsed = ?started.elapsed(),
            "profiler finished"
        );

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                program,
                category,
                code: output.status.code(),
                stderr: stderr_snippet(&output.stderr),
            });
        }
        if output.stdout.iter().all(u8::is_ascii_whitespace) {
            return Err(ExecutionError::EmptyOutput { program, category });
        }
        Ok(output.stdout)
    }
}

/// Wait for `child` up to `limit`, draining its pipes on helper threads so a
/// chatty child cannot block on a full pipe.
///
/// The limit covers both the exit and the end of output: a background
/// grandchild that keeps a pipe open past the deadline counts as a timeout.
/// Returns `Ok(None)` in that case; a child still running by then has been
/// killed and reaped. Unfinished readers are left detached.
fn wait_with_deadline(mut child: Child, limit: Duration) -> io::Result<Option<Output>> {
    let stdout = spawn_reader(child.stdout.take());
    let stderr = spawn_reader(child.stderr.take());
    let deadline = Instant::now() + limit;

    let mut exited = None;
    loop {
        if exited.is_none() {
            exited = child.try_wait()?;
        }
        if let Some(status) = exited {
            if reader_done(&stdout) && reader_done(&stderr) {
                return Ok(Some(Output {
                    status,
                    stdout: join_reader(stdout)?,
                    stderr: join_reader(stderr)?,
                }));
            }
        }
        if Instant::now() >= deadline {
            if exited.is_none() {
                // The child may exit between the check and the kill.
                let _ = child.kill();
                child.wait()?;
            }
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

type Reader = Option<JoinHandle<io::Result<Vec<u8>>>>;

fn reader_done(handle: &Reader) -> bool {
    handle.as_ref().is_none_or(|handle| handle.is_finished())
}

fn spawn_reader<R>(pipe: Option<R>) -> Reader
where
    R: Read + Send + 'static,
{
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}

fn join_reader(handle: Reader) -> io::Result<Vec<u8>> {
    match handle {
        None => Ok(Vec::new()),
        Some(handle) => handle
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("pipe reader panicked"))),
    }
}

fn stderr_snippet(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    if trimmed.len() <= STDERR_SNIPPET_LIMIT {
        return trimmed.to_string();
    }
    let mut end = STDERR_SNIPPET_LIMIT;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn fake_profiler(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("system_profiler");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn profiler_at(path: PathBuf) -> SystemProfiler {
        SystemProfiler::new(ProfilerConfig::default().with_program(path))
    }

    #[test]
    fn passes_category_and_json_flag() {
        let dir = TempDir::new().unwrap();
        let script = fake_profiler(dir.path(), r#"printf '{"args":"%s %s"}' "$1" "$2""#);
        let bytes = profiler_at(script).invoke(Category::Audio).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"args":"SPAudioDataType -json"}"#
        );
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let dir = TempDir::new().unwrap();
        let err = profiler_at(dir.path().join("absent"))
            .invoke(Category::Audio)
            .unwrap_err();
        assert!(matches!(err, ExecutionError::ProcessSpawnFailed { .. }));
    }

    #[test]
    fn nonzero_exit_carries_code_and_stderr() {
        let dir = TempDir::new().unwrap();
        let script = fake_profiler(dir.path(), "echo 'no such data type' >&2\nexit 3");
        let err = profiler_at(script).invoke(Category::Logs).unwrap_err();
        match err {
            ExecutionError::NonZeroExit { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "no such data type");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn blank_output_is_empty_output() {
        let dir = TempDir::new().unwrap();
        let script = fake_profiler(dir.path(), "printf '\\n  \\n'");
        let err = profiler_at(script).invoke(Category::Logs).unwrap_err();
        assert!(matches!(err, ExecutionError::EmptyOutput { .. }));
    }

    #[test]
    fn timeout_kills_slow_profiler() {
        let dir = TempDir::new().unwrap();
        let script = fake_profiler(dir.path(), "exec sleep 5");
        let profiler = SystemProfiler::new(
            ProfilerConfig::default()
                .with_program(script)
                .with_timeout(Duration::from_millis(200)),
        );
        let started = Instant::now();
        let err = profiler.invoke(Category::Applications).unwrap_err();
        assert!(matches!(err, ExecutionError::TimedOut { .. }));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn timeout_covers_output_held_open_by_background_process() {
        let dir = TempDir::new().unwrap();
        let script = fake_profiler(dir.path(), "sleep 3 &\necho '{}'");
        let profiler = SystemProfiler::new(
            ProfilerConfig::default()
                .with_program(script)
                .with_timeout(Duration::from_millis(300)),
        );
        let started = Instant::now();
        let err = profiler.invoke(Category::Logs).unwrap_err();
        assert!(matches!(err, ExecutionError::TimedOut { .. }));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn timeout_allows_fast_profiler() {
        let dir = TempDir::new().unwrap();
        let script = fake_profiler(dir.path(), r#"echo '{"SPLogsDataType":[]}'"#);
        let profiler = SystemProfiler::new(
            ProfilerConfig::default()
                .with_program(script)
                .with_timeout(Duration::from_secs(10)),
        );
        let bytes = profiler.invoke(Category::Logs).unwrap();
        assert!(bytes.starts_with(b"{\"SPLogsDataType\""));
    }

    #[test]
    fn stderr_snippet_truncates_on_char_boundary() {
        let long = "é".repeat(STDERR_SNIPPET_LIMIT);
        let snippet = stderr_snippet(long.as_bytes());
        assert!(snippet.ends_with("..."));
        assert!(snippet.len() <= STDERR_SNIPPET_LIMIT + 3);
    }
}
