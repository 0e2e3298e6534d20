//! Per-category lazy initialization and memoization.
//!
//! A [`Registry`] owns one slot per [`Category`]. Each slot walks
//! `Uninitialized -> Running -> Ready | Failed` exactly once: the first
//! caller runs the probe and the resolver, concurrent callers park on the
//! slot's condvar, and every later caller gets the memoized container or
//! the memoized error. Slots are guarded independently, so a slow probe for
//! one category never blocks another.

use crate::category::{Category, CategoryVisitor, Schema};
use crate::config::ProfilerConfig;
use crate::container::Container;
use crate::error::ProfilerError;
use crate::invoker::{ProbeInvoker, SystemProfiler};
use crate::resolver;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tracing::{debug, warn};

type Erased = Arc<dyn Any + Send + Sync>;

enum SlotState {
    Uninitialized,
    Running,
    /// Holds an `Arc<Container<S::Record>>` for the category's schema.
    Ready(Erased),
    Failed(ProfilerError),
}

/// Observable lifecycle of one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    Uninitialized,
    Running,
    Ready,
    Failed,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Uninitialized => "uninitialized",
            SlotStatus::Running => "running",
            SlotStatus::Ready => "ready",
            SlotStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Slot {
    state: Mutex<SlotState>,
    ready: Condvar,
}

impl Slot {
    fn new() -> Self {
        Self {
            state: Mutex::new(SlotState::Uninitialized),
            ready: Condvar::new(),
        }
    }

    // A panic while holding the lock cannot leave a half-written state: every
    // write is a single assignment.
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn complete(&self, outcome: SlotState) {
        *self.lock() = outcome;
        self.ready.notify_all();
    }
}

/// Marks a slot Running for the lifetime of one fetch. Dropping it without
/// [`RunningGuard::finish`] (the fetch unwound) memoizes `Interrupted` and
/// wakes the waiters.
struct RunningGuard<'a> {
    slot: &'a Slot,
    category: Category,
    finished: bool,
}

impl RunningGuard<'_> {
    fn finish(mut self, outcome: SlotState) {
        self.slot.complete(outcome);
        self.finished = true;
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!(category = %self.category, "probe unwound while running");
            self.slot.complete(SlotState::Failed(ProfilerError::Interrupted {
                category: self.category,
            }));
        }
    }
}

/// Lazily populated, process-lifetime cache of every category's container.
pub struct Registry {
    invoker: Arc<dyn ProbeInvoker>,
    slots: Vec<Slot>,
}

impl Registry {
    /// Registry backed by the real `system_profiler`.
    pub fn new(config: ProfilerConfig) -> Self {
        Self::with_invoker(Arc::new(SystemProfiler::new(config)))
    }

    pub fn with_invoker(invoker: Arc<dyn ProbeInvoker>) -> Self {
        Self {
            invoker,
            slots: Category::ALL.iter().map(|_| Slot::new()).collect(),
        }
    }

    fn slot(&self, category: Category) -> &Slot {
        // `Category::ALL` lists variants in declaration order.
        &self.slots[category as usize]
    }

    /// Container for schema `S`, fetching it on first use.
    pub fn get<S: Schema>(&self) -> Result<Arc<Container<S::Record>>, ProfilerError> {
        let category = S::CATEGORY;
        let slot = self.slot(category);

        let mut state = slot.lock();
        loop {
            match &*state {
                SlotState::Ready(value) => return downcast::<S>(Arc::clone(value)),
                SlotState::Failed(err) => return Err(err.clone()),
                SlotState::Uninitialized => break,
                SlotState::Running => {}
            }
            debug!(category = %category, "waiting on running probe");
            state = slot.ready.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
        *state = SlotState::Running;
        drop(state);

        let guard = RunningGuard {
            slot,
            category,
            finished: false,
        };
        let outcome = self.fetch::<S>();
        match &outcome {
            Ok(container) => {
                let erased: Erased = container.clone();
                guard.finish(SlotState::Ready(erased));
            }
            Err(err) => {
                warn!(category = %category, error = %err, "category failed; memoizing");
                guard.finish(SlotState::Failed(err.clone()));
            }
        }
        outcome
    }

    fn fetch<S: Schema>(&self) -> Result<Arc<Container<S::Record>>, ProfilerError> {
        let started = Instant::now();
        let bytes = self.invoker.invoke(S::CATEGORY)?;
        let container = resolver::parse_schema::<S>(&bytes)?;
        debug!(
            category = %S::CATEGORY,
            shape = %container.shape(),
            elapsed = ?started.elapsed(),
            "category ready"
        );
        Ok(Arc::new(container))
    }

    /// Typed handle exposing `initialize` / `get_data` for one category.
    pub fn category<S: Schema>(&self) -> CategoryHandle<'_, S> {
        CategoryHandle {
            registry: self,
            schema: PhantomData,
        }
    }

    /// Run the category's state machine without needing its record type.
    pub fn ensure_initialized(&self, category: Category) -> Result<(), ProfilerError> {
        category.visit(Initialize { registry: self })
    }

    /// Current lifecycle state. Never triggers a probe.
    pub fn status(&self, category: Category) -> SlotStatus {
        match &*self.slot(category).lock() {
            SlotState::Uninitialized => SlotStatus::Uninitialized,
            SlotState::Running => SlotStatus::Running,
            SlotState::Ready(_) => SlotStatus::Ready,
            SlotState::Failed(_) => SlotStatus::Failed,
        }
    }

    /// Rendered container for a category known only at runtime.
    pub fn render(&self, category: Category) -> Result<String, ProfilerError> {
        category.visit(Render {
            registry: self,
            envelope: false,
        })
    }

    /// Like [`Registry::render`] but wrapped in the tool's envelope.
    pub fn render_envelope(&self, category: Category) -> Result<String, ProfilerError> {
        category.visit(Render {
            registry: self,
            envelope: true,
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(ProfilerConfig::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for category in Category::ALL {
            let status = self.status(*category);
            if status != SlotStatus::Uninitialized {
                map.entry(&category.as_str(), &status);
            }
        }
        map.finish()
    }
}

fn downcast<S: Schema>(value: Erased) -> Result<Arc<Container<S::Record>>, ProfilerError> {
    value
        .downcast::<Container<S::Record>>()
        .map_err(|_| ProfilerError::SchemaConflict {
            category: S::CATEGORY,
        })
}

/// `Initialize()` / `GetData()` for one statically known category.
pub struct CategoryHandle<'a, S: Schema> {
    registry: &'a Registry,
    schema: PhantomData<S>,
}

impl<S: Schema> CategoryHandle<'_, S> {
    pub fn initialize(&self) -> Result<(), ProfilerError> {
        self.registry.get::<S>().map(|_| ())
    }

    pub fn get_data(&self) -> Result<Arc<Container<S::Record>>, ProfilerError> {
        self.registry.get::<S>()
    }

    pub fn status(&self) -> SlotStatus {
        self.registry.status(S::CATEGORY)
    }
}

struct Initialize<'a> {
    registry: &'a Registry,
}

impl CategoryVisitor for Initialize<'_> {
    type Output = Result<(), ProfilerError>;

    fn visit<S: Schema>(self) -> Self::Output {
        self.registry.get::<S>().map(|_| ())
    }
}

struct Render<'a> {
    registry: &'a Registry,
    envelope: bool,
}

impl CategoryVisitor for Render<'_> {
    type Output = Result<String, ProfilerError>;

    fn visit<S: Schema>(self) -> Self::Output {
        let container = self.registry.get::<S>()?;
        Ok(if self.envelope {
            container.render_envelope(S::CATEGORY)
        } else {
            container.render()
        })
    }
}
