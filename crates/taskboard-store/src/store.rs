use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use taskboard_core::{Error, Result, Status, Task};

/// Monotonic id source. Guarded by its own lock so id generation never
/// contends with map mutation.
#[derive(Debug, Default)]
pub struct TaskIdCounter {
    last: Mutex<i64>,
}

impl TaskIdCounter {
    pub fn new() -> Self {
        Self { last: Mutex::new(0) }
    }

    /// Ids start at 1 and are never reused, even after a delete.
    pub fn next(&self) -> i64 {
        let mut last = lock(&self.last);
        *last += 1;
        *last
    }
}

/// Sole owner of task state. All access goes through a single exclusive map
/// lock; callers receive owned copies, never references into the map.
#[derive(Debug, Default)]
pub struct TaskStore {
    counter: TaskIdCounter,
    tasks: Mutex<HashMap<i64, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            counter: TaskIdCounter::new(),
            tasks: Mutex::new(HashMap::new()),
        }
    }

    pub fn counter(&self) -> &TaskIdCounter {
        &self.counter
    }

    pub fn add(&self, task: Task) -> Result<Task> {
        let mut tasks = lock(&self.tasks);
        if tasks.contains_key(&task.id) {
            return Err(Error::WrongId);
        }
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let mut tasks = lock(&self.tasks);
        if tasks.remove(&id).is_none() {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    pub fn update_status(&self, id: i64, status: Status) -> Result<Task> {
        let mut tasks = lock(&self.tasks);
        match tasks.get_mut(&id) {
            Some(task) => {
                task.status = status;
                Ok(task.clone())
            }
            None => Err(Error::NotFound),
        }
    }

    pub fn get(&self, id: i64) -> Result<Task> {
        let tasks = lock(&self.tasks);
        tasks.get(&id).cloned().ok_or(Error::NotFound)
    }

    pub fn list(&self) -> Vec<Task> {
        let tasks = lock(&self.tasks);
        let mut all: Vec<Task> = tasks.values().cloned().collect();
        all.sort_by_key(|task| task.id);
        all
    }
}

// A poisoned lock only means another thread panicked mid-operation; the map
// itself is still a valid HashMap, so recover the guard rather than panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
