use indexmap::IndexMap;
use ndarray::ArrayViewD;

use crate::{buffer::TimeBuffer, coords::Coordinates, dims::Dim, errors::Result};

/// Everything an accumulator has stored: every tracked variable over the full time range, along
/// with the grid they're defined on.
///
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::len_without_is_empty)]
pub struct Dataset<N> {
    coordinates: Coordinates<N>,
    time: Vec<i64>,
    time_units: String,
    variables: IndexMap<String, Variable<N>>,
}

/// The time series of a single variable.
///
/// The first dimension is always `time`, followed by the variable's spatial dimensions.
///
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::len_without_is_empty)]
pub struct Variable<N> {
    name: String,
    dims: Vec<Dim>,
    buffer: TimeBuffer<N>,
}

impl<N> Dataset<N>
where
    N: Clone,
{
    pub(crate) fn new(
        coordinates: Coordinates<N>,
        time: i64,
        time_units: String,
        variables: IndexMap<String, Variable<N>>,
    ) -> Self {
        Self {
            coordinates,
            time: vec![time],
            time_units,
            variables,
        }
    }

    /// Append one time step.
    ///
    /// `slices` must hold one slice per variable, in variable order, each already checked against
    /// that variable's slice shape.
    ///
    pub(crate) fn append<'a, I>(&mut self, time: i64, slices: I) -> Result<()>
    where
        N: 'a,
        I: IntoIterator<Item = ArrayViewD<'a, N>>,
    {
        for (variable, slice) in self.variables.values_mut().zip(slices) {
            variable.push(slice)?;
        }
        self.time.push(time);

        Ok(())
    }
}

impl<N> Dataset<N> {
    pub fn coordinates(&self) -> &Coordinates<N> {
        &self.coordinates
    }

    pub fn time(&self) -> &[i64] {
        &self.time
    }

    pub fn time_units(&self) -> &str {
        &self.time_units
    }

    /// Number of time steps stored
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable<N>> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable<N>> {
        self.variables.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Sizes of the dataset's dimensions, in storage order.
    pub fn dims(&self) -> Vec<(Dim, usize)> {
        let [levels, lats, lons] = self.coordinates.shape3();
        vec![
            (Dim::Time, self.len()),
            (Dim::MidLevels, levels),
            (Dim::Lat, lats),
            (Dim::Lon, lons),
        ]
    }
}

impl<N> Variable<N>
where
    N: Clone,
{
    /// Start a new time series, with `first` as its first time slice. `dims` are the spatial
    /// dimensions of `first`.
    pub(crate) fn new<S: Into<String>>(
        name: S,
        dims: Vec<Dim>,
        first: ArrayViewD<'_, N>,
        capacity: usize,
    ) -> Result<Self> {
        let mut all_dims = Vec::with_capacity(dims.len() + 1);
        all_dims.push(Dim::Time);
        all_dims.extend(dims);

        Ok(Self {
            name: name.into(),
            dims: all_dims,
            buffer: TimeBuffer::with_capacity(first, capacity)?,
        })
    }

    pub(crate) fn push(&mut self, slice: ArrayViewD<'_, N>) -> Result<()> {
        self.buffer.push(slice)?;

        Ok(())
    }
}

impl<N> Variable<N> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimensions of `data`, starting with `Dim::Time`
    pub fn dims(&self) -> &[Dim] {
        &self.dims
    }

    /// The full time series, shaped `[time, ...spatial]`
    pub fn data(&self) -> ArrayViewD<'_, N> {
        self.buffer.view()
    }

    /// Number of time steps stored
    pub fn len(&self) -> usize {
        self.buffer.instants()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.data().shape().to_vec()
    }

    /// Shape of a single time slice
    pub fn slice_shape(&self) -> &[usize] {
        self.buffer.slice_shape()
    }

    /// The variable at a single time index
    pub fn at(&self, instant: usize) -> Option<ArrayViewD<'_, N>> {
        self.buffer.at(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::{arr1, Array2, Array3};

    fn make_one() -> Result<Dataset<f64>> {
        let coordinates = Coordinates::new(
            arr1(&[0.0, 1.0, 2.0, 3.0]),
            arr1(&[10.0, 20.0, 30.0]),
            arr1(&[0.25, 0.75]),
        );
        let mut variables = IndexMap::new();
        let t = Array3::<f64>::zeros([2, 3, 4]);
        variables.insert(
            "t".to_string(),
            Variable::new("t", vec![Dim::MidLevels, Dim::Lat, Dim::Lon], t.view().into_dyn(), 4)?,
        );
        let ps = Array2::<f64>::ones([3, 4]);
        variables.insert(
            "ps".to_string(),
            Variable::new("ps", vec![Dim::Lat, Dim::Lon], ps.view().into_dyn(), 4)?,
        );

        Ok(Dataset::new(coordinates, 100, "seconds".into(), variables))
    }

    #[test]
    fn test_new() -> Result<()> {
        let dataset = make_one()?;

        assert_eq!(dataset.time(), &[100]);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.time_units(), "seconds");
        assert_eq!(dataset.names().collect::<Vec<_>>(), vec!["t", "ps"]);
        assert_eq!(
            dataset.dims(),
            vec![
                (Dim::Time, 1),
                (Dim::MidLevels, 2),
                (Dim::Lat, 3),
                (Dim::Lon, 4)
            ]
        );

        let t = dataset.variable("t").unwrap();
        assert_eq!(t.name(), "t");
        assert_eq!(t.dims(), &[Dim::Time, Dim::MidLevels, Dim::Lat, Dim::Lon]);
        assert_eq!(t.shape(), vec![1, 2, 3, 4]);
        assert_eq!(t.slice_shape(), &[2, 3, 4]);
        assert_eq!(t.len(), 1);

        let ps = dataset.variable("ps").unwrap();
        assert_eq!(ps.dims(), &[Dim::Time, Dim::Lat, Dim::Lon]);
        assert_eq!(ps.shape(), vec![1, 3, 4]);

        assert!(dataset.variable("q").is_none());
        assert_eq!(dataset.variables().count(), 2);

        Ok(())
    }

    #[test]
    fn test_append() -> Result<()> {
        let mut dataset = make_one()?;
        let t = Array3::<f64>::from_elem([2, 3, 4], 7.0);
        let ps = Array2::<f64>::from_elem([3, 4], 8.0);
        dataset.append(200, [t.view().into_dyn(), ps.view().into_dyn()])?;

        assert_eq!(dataset.time(), &[100, 200]);
        assert_eq!(dataset.dims()[0], (Dim::Time, 2));

        let t_var = dataset.variable("t").unwrap();
        assert_eq!(t_var.shape(), vec![2, 2, 3, 4]);
        assert_eq!(t_var.at(0).unwrap().sum(), 0.0);
        assert_eq!(t_var.at(1).unwrap(), t.view().into_dyn());
        assert!(t_var.at(2).is_none());

        let ps_var = dataset.variable("ps").unwrap();
        assert_eq!(ps_var.len(), 2);
        assert_eq!(ps_var.at(1).unwrap(), ps.view().into_dyn());

        Ok(())
    }
}
