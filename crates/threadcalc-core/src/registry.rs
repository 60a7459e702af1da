//! Task factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::fibonacci::FibonacciTask;
use crate::sum_of_squares::SumOfSquaresTask;
use crate::task::{CalcError, Task, TaskKind};

/// Factory trait for obtaining tasks.
pub trait TaskFactory: Send + Sync {
    /// Get or create the task for a kind.
    fn get(&self, kind: TaskKind) -> Arc<dyn Task>;

    /// Look a task up by its command-line name.
    fn get_by_name(&self, name: &str) -> Result<Arc<dyn Task>, CalcError> {
        Ok(self.get(name.parse()?))
    }
}

/// Default factory with lazy creation and cache.
pub struct DefaultTaskFactory {
    cache: RwLock<HashMap<TaskKind, Arc<dyn Task>>>,
}

impl DefaultTaskFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_task(kind: TaskKind) -> Arc<dyn Task> {
        match kind {
            TaskKind::Fibonacci => Arc::new(FibonacciTask::new()),
            TaskKind::SumOfSquares => Arc::new(SumOfSquaresTask::new()),
        }
    }
}

impl Default for DefaultTaskFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFactory for DefaultTaskFactory {
    fn get(&self, kind: TaskKind) -> Arc<dyn Task> {
        if let Some(task) = self.cache.read().get(&kind) {
            return Arc::clone(task);
        }

        Arc::clone(
            self.cache
                .write()
                .entry(kind)
                .or_insert_with(|| Self::create_task(kind)),
        )
    }
}
