use std::borrow::Borrow;

use crate::{config::AccumulatorConfig, errors::Result, snapshot::Snapshot};

/// Something a simulation driver can hand model state to as it steps.
///
/// A monitor is created from the first state the model produces and is then given every
/// subsequent state, in order.
///
pub trait Monitor<N>: Sized {
    fn initialize(initial: &Snapshot<N>, config: AccumulatorConfig) -> Result<Self>;

    fn store(&mut self, snapshot: &Snapshot<N>) -> Result<()>;
}

/// Store each of `snapshots` in `monitor`, in order, stopping at the first error.
///
/// Returns the number of snapshots stored.
///
pub fn record<N, M, I>(monitor: &mut M, snapshots: I) -> Result<usize>
where
    M: Monitor<N>,
    I: IntoIterator,
    I::Item: Borrow<Snapshot<N>>,
{
    let mut count = 0;
    for snapshot in snapshots {
        monitor.store(snapshot.borrow())?;
        count += 1;
    }

    Ok(count)
}
