use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, ShapeError};

/// Append-only storage for one variable's time series.
///
/// Time is the outermost axis of a standard layout array, so appending a slice only writes the
/// new slice at the end of the backing `Vec`: growth is amortized and the data already stored is
/// never moved relative to itself or rewritten. The read view is always exactly the slices
/// appended so far.
///
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TimeBuffer<N> {
    data: ArrayD<N>,
}

impl<N> TimeBuffer<N>
where
    N: Clone,
{
    /// Start a time series with `first` as its only slice, leaving room for `capacity` slices
    /// before the backing storage has to grow.
    ///
    /// `capacity` is a hint. If room for that many slices can't be reserved, only the first slice
    /// is allocated up front and storage grows on demand.
    ///
    pub fn with_capacity(first: ArrayViewD<'_, N>, capacity: usize) -> Result<Self, ShapeError> {
        let slice_len = first.len();
        let mut values = Vec::new();
        let reserved = capacity
            .max(1)
            .checked_mul(slice_len)
            .map_or(false, |len| values.try_reserve_exact(len).is_ok());
        if !reserved {
            values.reserve_exact(slice_len);
        }
        values.extend(first.iter().cloned());

        let mut shape = Vec::with_capacity(first.ndim() + 1);
        shape.push(1);
        shape.extend_from_slice(first.shape());
        let data = ArrayD::from_shape_vec(IxDyn(&shape), values)?;

        Ok(Self { data })
    }

    /// Append one time slice. `slice` must have the same shape as every other slice.
    pub fn push(&mut self, slice: ArrayViewD<'_, N>) -> Result<(), ShapeError> {
        self.data.push(Axis(0), slice)
    }
}

impl<N> TimeBuffer<N> {
    pub fn view(&self) -> ArrayViewD<'_, N> {
        self.data.view()
    }

    /// Number of time slices stored
    pub fn instants(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Shape of a single time slice
    pub fn slice_shape(&self) -> &[usize] {
        &self.data.shape()[1..]
    }

    pub fn at(&self, instant: usize) -> Option<ArrayViewD<'_, N>> {
        if instant < self.instants() {
            Some(self.data.index_axis(Axis(0), instant))
        } else {
            None
        }
    }
}
