use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;
use std::time::Duration;
use sysprofiler::{Category, ExecutionError, ProbeInvoker};

/// Name of the per-directory file the fixture-serving script appends each
/// requested category key to.
pub const CALL_LOG: &str = "calls.log";

pub fn sp_dump_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sp-dump"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }
    Ok(())
}

/// Write an executable `system_profiler` stand-in with the given shell body.
pub fn fake_profiler(dir: &Path, body: &str) -> Result<PathBuf> {
    let path = dir.join("system_profiler");
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .with_context(|| format!("writing {}", path.display()))?;
    make_executable(&path)?;
    Ok(path)
}

/// Stand-in that serves `<dir>/<KEY>.json` for each requested key, prints
/// `{}` for keys without a fixture, and logs every call to [`CALL_LOG`].
pub fn fixture_profiler(dir: &Path, fixtures: &[(Category, &str)]) -> Result<PathBuf> {
    for (category, body) in fixtures {
        let fixture = dir.join(format!("{}.json", category.as_str()));
        fs::write(&fixture, body).with_context(|| format!("writing {}", fixture.display()))?;
    }
    fake_profiler(
        dir,
        &format!(
            r#"here=$(dirname "$0")
echo "$1" >> "$here/{CALL_LOG}"
if [ -f "$here/$1.json" ]; then cat "$here/$1.json"; else echo '{{}}'; fi"#
        ),
    )
}

/// Category keys the fixture script was invoked with, in call order.
pub fn logged_calls(dir: &Path) -> Result<Vec<String>> {
    let log = dir.join(CALL_LOG);
    if !log.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&log).with_context(|| format!("reading {}", log.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// In-process probe double that serves canned output and counts calls.
#[derive(Default)]
pub struct CountingProbe {
    outputs: BTreeMap<Category, Result<Vec<u8>, ExecutionError>>,
    calls: Mutex<BTreeMap<Category, usize>>,
    delay: Option<Duration>,
}

impl CountingProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serving(mut self, category: Category, output: &str) -> Self {
        self.outputs
            .insert(category, Ok(output.as_bytes().to_vec()));
        self
    }

    pub fn failing(mut self, category: Category, err: ExecutionError) -> Self {
        self.outputs.insert(category, Err(err));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self, category: Category) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .get(&category)
            .copied()
            .unwrap_or(0)
    }
}

impl ProbeInvoker for CountingProbe {
    fn invoke(&self, category: Category) -> Result<Vec<u8>, ExecutionError> {
        *self
            .calls
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .entry(category)
            .or_default() += 1;
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match self.outputs.get(&category) {
            Some(output) => output.clone(),
            None => Ok(b"{}".to_vec()),
        }
    }
}
