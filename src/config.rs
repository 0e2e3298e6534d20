//! Invocation settings for the `system_profiler` probe.
//!
//! Defaults reproduce the plain `<category> -json` call with no time limit.
//! [`ProfilerConfig::from_env`] lets the binaries pick up overrides without
//! each one re-implementing the variable handling.

use crate::runtime::default_profiler_program;
use anyhow::{Context, Result, bail};
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_PROGRAM: &str = "SYSPROFILER_BIN";
pub const ENV_DETAIL_LEVEL: &str = "SYSPROFILER_DETAIL_LEVEL";
pub const ENV_TIMEOUT_SECS: &str = "SYSPROFILER_TIMEOUT_SECS";

/// Value for the tool's `-detailLevel` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailLevel {
    Mini,
    Basic,
    Full,
}

impl DetailLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Mini => "mini",
            DetailLevel::Basic => "basic",
            DetailLevel::Full => "full",
        }
    }
}

impl FromStr for DetailLevel {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mini" => Ok(DetailLevel::Mini),
            "basic" => Ok(DetailLevel::Basic),
            "full" => Ok(DetailLevel::Full),
            other => bail!("unknown detail level '{other}' (expected mini|basic|full)"),
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfilerConfig {
    pub program: PathBuf,
    pub detail_level: Option<DetailLevel>,
    /// Upper bound on one invocation, covering both the exit and reading all
    /// of its output; `None` waits as long as the tool runs.
    pub timeout: Option<Duration>,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            program: default_profiler_program(),
            detail_level: None,
            timeout: None,
        }
    }
}

impl ProfilerConfig {
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_detail_level(mut self, level: DetailLevel) -> Self {
        self.detail_level = Some(level);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Defaults overlaid with `SYSPROFILER_BIN`, `SYSPROFILER_DETAIL_LEVEL`
    /// and `SYSPROFILER_TIMEOUT_SECS`. Empty variables are ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(program) = non_empty(ENV_PROGRAM) {
            config.program = PathBuf::from(program);
        }
        if let Some(level) = non_empty(ENV_DETAIL_LEVEL) {
            config.detail_level =
                Some(level.parse().with_context(|| format!("parsing {ENV_DETAIL_LEVEL}"))?);
        }
        if let Some(raw) = non_empty(ENV_TIMEOUT_SECS) {
            config.timeout = Some(parse_timeout_secs(&raw).with_context(|| {
                format!("parsing {ENV_TIMEOUT_SECS}")
            })?);
        }
        Ok(config)
    }

    /// Arguments for one invocation: `<category> -json [-detailLevel L]`.
    pub fn arguments(&self, category_key: &str) -> Vec<OsString> {
        let mut args = vec![OsString::from(category_key), OsString::from("-json")];
        if let Some(level) = self.detail_level {
            args.push(OsString::from("-detailLevel"));
            args.push(OsString::from(level.as_str()));
        }
        args
    }
}

/// Parse a positive whole number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid timeout '{raw}'"))?;
    if secs == 0 {
        bail!("timeout must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
