//! Error taxonomy shared by the invoker, resolver and registry.
//!
//! Every type here is `Clone + PartialEq` because a failed category memoizes
//! its error and hands the same value to every later caller. Details that
//! come from non-cloneable sources (`io::Error`, `serde_json::Error`) are
//! captured as strings at the point of failure.

use crate::category::Category;
use std::time::Duration;
use thiserror::Error;

/// The external tool could not be run, or did not finish cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("failed to launch {program} for {category}: {reason}")]
    ProcessSpawnFailed {
        program: String,
        category: Category,
        reason: String,
    },
    #[error("{program} exited with {} for {category}: {stderr}", describe_exit(.code))]
    NonZeroExit {
        program: String,
        category: Category,
        code: Option<i32>,
        stderr: String,
    },
    #[error("{program} produced no output for {category}")]
    EmptyOutput { program: String, category: Category },
    #[error("{program} did not finish within {limit:?} for {category}")]
    TimedOut {
        program: String,
        category: Category,
        limit: Duration,
    },
}

/// The category key was absent, or its value had the wrong structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("no {category} key in profiler output")]
    CategoryKeyNotFound { category: Category },
    #[error("unexpected structure for {category}: {detail}")]
    UnexpectedStructure { category: Category, detail: String },
}

/// Failure while turning raw probe bytes into a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("profiler output for {category} is not valid JSON: {detail}")]
    Syntax { category: Category, detail: String },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Top-level error returned by [`crate::Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfilerError {
    #[error(transparent)]
    Execution(#[from] ExecutionError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("initialization of {category} was interrupted before it finished")]
    Interrupted { category: Category },
    #[error("{category} is cached with a different record schema")]
    SchemaConflict { category: Category },
}

impl From<ShapeError> for ProfilerError {
    fn from(err: ShapeError) -> Self {
        ProfilerError::Parse(ParseError::Shape(err))
    }
}

impl ProfilerError {
    /// True when the tool ran but reported nothing for the category.
    ///
    /// Callers treat this as "no data" rather than a hard failure.
    pub fn is_category_missing(&self) -> bool {
        matches!(
            self,
            ProfilerError::Parse(ParseError::Shape(ShapeError::CategoryKeyNotFound { .. }))
        )
    }

    /// Category the failure belongs to.
    pub fn category(&self) -> Category {
        match self {
            ProfilerError::Execution(err) => match err {
                ExecutionError::ProcessSpawnFailed { category, .. }
                | ExecutionError::NonZeroExit { category, .. }
                | ExecutionError::EmptyOutput { category, .. }
                | ExecutionError::TimedOut { category, .. } => *category,
            },
            ProfilerError::Parse(ParseError::Syntax { category, .. })
            | ProfilerError::Parse(ParseError::Shape(ShapeError::CategoryKeyNotFound {
                category,
            }))
            | ProfilerError::Parse(ParseError::Shape(ShapeError::UnexpectedStructure {
                category,
                ..
            }))
            | ProfilerError::Interrupted { category }
            | ProfilerError::SchemaConflict { category } => *category,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_category_is_distinguished_from_other_shape_errors() {
        let missing: ProfilerError = ShapeError::CategoryKeyNotFound {
            category: Category::Audio,
        }
        .into();
        assert!(missing.is_category_missing());
        assert_eq!(missing.category(), Category::Audio);

        let structure: ProfilerError = ShapeError::UnexpectedStructure {
            category: Category::Audio,
            detail: "expected an array".into(),
        }
        .into();
        assert!(!structure.is_category_missing());

        let syntax = ProfilerError::Parse(ParseError::Syntax {
            category: Category::Audio,
            detail: "EOF".into(),
        });
        assert!(!syntax.is_category_missing());
    }

    #[test]
    fn exit_messages_name_signal_or_status() {
        let by_status = ExecutionError::NonZeroExit {
            program: "system_profiler".into(),
            category: Category::Hardware,
            code: Some(2),
            stderr: "boom".into(),
        };
        assert!(by_status.to_string().contains("status 2"));

        let by_signal = ExecutionError::NonZeroExit {
            program: "system_profiler".into(),
            category: Category::Hardware,
            code: None,
            stderr: String::new(),
        };
        assert!(by_signal.to_string().contains("a signal"));
        assert!(by_signal.to_string().contains("SPHardwareDataType"));
    }
}
