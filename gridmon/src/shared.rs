use parking_lot::Mutex;

use crate::{
    accumulator::StateAccumulator,
    dataset::{Dataset, Variable},
    errors::Result,
    snapshot::Snapshot,
};

/// A `StateAccumulator` that can be shared between threads.
///
/// A single lock serializes `store`, `get_full` and `get_var`, so readers always see a dataset
/// that is either entirely before or entirely after any given store. Reads return owned copies;
/// use `with_full` to read in place while holding the lock.
///
#[allow(clippy::len_without_is_empty)]
pub struct SharedAccumulator<N> {
    inner: Mutex<StateAccumulator<N>>,
}

impl<N> SharedAccumulator<N> {
    pub fn new(accumulator: StateAccumulator<N>) -> Self {
        Self {
            inner: Mutex::new(accumulator),
        }
    }

    /// Call `f` with the full dataset, holding the lock for the duration of the call.
    pub fn with_full<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Dataset<N>) -> R,
    {
        f(self.inner.lock().get_full())
    }

    /// Number of time steps stored
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn into_inner(self) -> StateAccumulator<N> {
        self.inner.into_inner()
    }
}

impl<N> SharedAccumulator<N>
where
    N: Clone,
{
    pub fn store(&self, snapshot: &Snapshot<N>) -> Result<()> {
        self.inner.lock().store(snapshot)
    }

    pub fn get_full(&self) -> Dataset<N> {
        self.inner.lock().get_full().clone()
    }

    pub fn get_var(&self, name: &str) -> Result<Variable<N>> {
        Ok(self.inner.lock().get_var(name)?.clone())
    }
}

impl<N> From<StateAccumulator<N>> for SharedAccumulator<N> {
    fn from(accumulator: StateAccumulator<N>) -> Self {
        Self::new(accumulator)
    }
}
