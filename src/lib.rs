//! Typed, lazily cached access to macOS `system_profiler` inventory data.
//!
//! Every [`Category`] is fetched at most once per [`Registry`]: the first
//! caller runs `system_profiler <category> -json`, the [`resolver`] decodes
//! the output according to the category's fixed [`EnvelopeShape`], and the
//! resulting [`Container`] (or the error) is memoized for every later caller.
//!
//! ```no_run
//! use sysprofiler::{ProfilerConfig, Registry, schema};
//!
//! let registry = Registry::new(ProfilerConfig::default());
//! let audio = registry.get::<schema::Audio>()?;
//! for device in audio.records().unwrap_or_default() {
//!     println!("{}", device.name);
//! }
//! # Ok::<(), sysprofiler::ProfilerError>(())
//! ```

pub mod category;
pub mod config;
pub mod container;
pub mod error;
pub mod invoker;
pub mod records;
pub mod registry;
pub mod resolver;
pub mod runtime;

pub use category::{Category, CategoryVisitor, EnvelopeShape, Schema, UnknownCategory, schema};
pub use config::{DetailLevel, ProfilerConfig};
pub use container::{ArrayData, Container, ItemsData, ObjectData};
pub use error::{ExecutionError, ParseError, ProfilerError, ShapeError};
pub use invoker::{ProbeInvoker, SystemProfiler};
pub use records::GenericRecord;
pub use registry::{CategoryHandle, Registry, SlotStatus};

/// Split a comma/whitespace separated list into trimmed entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parse every entry of a [`split_list`] list as a category, keeping order
/// and dropping repeats.
pub fn parse_category_list<I, S>(values: I) -> Result<Vec<Category>, UnknownCategory>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut categories = Vec::new();
    for value in values {
        for entry in split_list(value.as_ref()) {
            let category: Category = entry.parse()?;
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
    }
    Ok(categories)
}
