use ndarray::{s, Array1, ArrayView1, ArrayView2, Ix1, Ix2, Zip};
use num_traits::Float;

use crate::{
    dims::Dim,
    errors::{Error, Result},
    snapshot::{Snapshot, LATITUDE, LONGITUDE, SIGMA_INTERFACE},
};

/// The fixed spatial grid of an accumulated dataset.
///
/// Derived once from the initial snapshot and never changed afterwards. Every stored field must
/// have shape `[lat, lon]` or `[mid_levels, lat, lon]` with respect to this grid.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates<N> {
    lon: Array1<N>,
    lat: Array1<N>,
    mid_levels: Array1<N>,
}

impl<N> Coordinates<N>
where
    N: Float,
{
    pub fn new(lon: Array1<N>, lat: Array1<N>, mid_levels: Array1<N>) -> Self {
        Self {
            lon,
            lat,
            mid_levels,
        }
    }

    /// Derive coordinates from a snapshot's `longitude`, `latitude` and interface sigma fields.
    ///
    /// Longitude is taken from the first row of the 2-D longitude field, latitude from the first
    /// column of the 2-D latitude field, and mid levels are interpolated halfway between each pair
    /// of adjacent interface levels.
    ///
    pub fn from_snapshot(snapshot: &Snapshot<N>) -> Result<Self> {
        let lon = coordinate2(snapshot, LONGITUDE)?.row(0).to_owned();
        let lat = coordinate2(snapshot, LATITUDE)?.column(0).to_owned();

        let sigma = snapshot
            .get(SIGMA_INTERFACE)
            .ok_or(Error::MissingCoordinate(SIGMA_INTERFACE))?;
        let found = sigma.shape().to_vec();
        let sigma = sigma
            .into_dimensionality::<Ix1>()
            .map_err(|_| Error::CoordinateRank {
                name: SIGMA_INTERFACE,
                expected: 1,
                found,
            })?;
        if sigma.len() < 2 {
            return Err(Error::TooFewLevels(sigma.len()));
        }
        let mid_levels = interpolate_mid_levels(sigma);

        Ok(Self::new(lon, lat, mid_levels))
    }
}

impl<N> Coordinates<N> {
    pub fn lon(&self) -> ArrayView1<'_, N> {
        self.lon.view()
    }

    pub fn lat(&self) -> ArrayView1<'_, N> {
        self.lat.view()
    }

    pub fn mid_levels(&self) -> ArrayView1<'_, N> {
        self.mid_levels.view()
    }

    /// Shape of a single-level field: `[lat, lon]`
    pub fn shape2(&self) -> [usize; 2] {
        [self.lat.len(), self.lon.len()]
    }

    /// Shape of a multi-level field: `[mid_levels, lat, lon]`
    pub fn shape3(&self) -> [usize; 3] {
        [self.mid_levels.len(), self.lat.len(), self.lon.len()]
    }

    /// Work out the spatial dimensions of a field named `name` from its shape.
    ///
    /// A rank 2 field is `(lat, lon)` and a rank 3 field is `(mid_levels, lat, lon)`. Anything
    /// else, or a shape that doesn't agree with this grid, is an alignment error.
    ///
    pub fn dims_for(&self, name: &str, shape: &[usize]) -> Result<Vec<Dim>> {
        let shape2 = self.shape2();
        let shape3 = self.shape3();
        if shape == shape2 {
            Ok(vec![Dim::Lat, Dim::Lon])
        } else if shape == shape3 {
            Ok(vec![Dim::MidLevels, Dim::Lat, Dim::Lon])
        } else {
            let expected = if shape.len() == 3 {
                shape3.to_vec()
            } else {
                shape2.to_vec()
            };
            Err(Error::ShapeMismatch {
                name: name.to_string(),
                expected,
                found: shape.to_vec(),
            })
        }
    }
}

/// Linearly interpolate interface levels at offsets `0.5, 1.5, ...`, yielding one fewer level.
///
/// Each mid level is the average of the two interface levels around it. Fewer than two interface
/// levels yields an empty array.
///
pub fn interpolate_mid_levels<N>(interfaces: ArrayView1<N>) -> Array1<N>
where
    N: Float,
{
    if interfaces.len() < 2 {
        return Array1::from_vec(vec![]);
    }

    let half = N::one() / (N::one() + N::one());
    Zip::from(interfaces.slice(s![..-1]))
        .and(interfaces.slice(s![1..]))
        .map_collect(|&lower, &upper| lower + (upper - lower) * half)
}

fn coordinate2<'a, N>(snapshot: &'a Snapshot<N>, name: &'static str) -> Result<ArrayView2<'a, N>> {
    let field = snapshot.get(name).ok_or(Error::MissingCoordinate(name))?;
    let found = field.shape().to_vec();
    let rank_error = || Error::CoordinateRank {
        name,
        expected: 2,
        found: found.clone(),
    };
    let field = field
        .into_dimensionality::<Ix2>()
        .map_err(|_| rank_error())?;
    if field.is_empty() {
        return Err(rank_error());
    }

    Ok(field)
}
