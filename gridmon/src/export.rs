use crate::{dataset::Dataset, errors::Result};

/// A way of getting an accumulated dataset out of memory and into some other representation,
/// such as a cube structure or a file on disk.
///
/// No exporters are provided here. Anything that implements this trait, including a closure
/// taking a `&Dataset`, can be passed to `StateAccumulator::export`.
///
pub trait Export<N> {
    type Output;

    fn export(&self, dataset: &Dataset<N>) -> Result<Self::Output>;
}

impl<N, F, T> Export<N> for F
where
    F: Fn(&Dataset<N>) -> Result<T>,
{
    type Output = T;

    fn export(&self, dataset: &Dataset<N>) -> Result<T> {
        self(dataset)
    }
}
