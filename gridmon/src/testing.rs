use ndarray::{Array1, Array2, Array3};
use num_traits::{cast, Float};

use crate::snapshot::{Snapshot, LATITUDE, LONGITUDE, SIGMA_INTERFACE};

/// 2-D longitude and latitude fields for a regular grid.
///
/// Longitude starts at -10 and steps by 10, latitude starts at 40 and steps by 5. Both fields
/// have shape `[lats, lons]`.
///
pub(crate) fn grid<N: Float>(lons: usize, lats: usize) -> (Array2<N>, Array2<N>) {
    let longitude = Array2::from_shape_fn([lats, lons], |(_, i)| {
        cast(-10.0 + 10.0 * i as f64).unwrap()
    });
    let latitude = Array2::from_shape_fn([lats, lons], |(j, _)| cast(40.0 + 5.0 * j as f64).unwrap());

    (longitude, latitude)
}

/// Evenly spaced sigma values from 0 to 1 on `levels` interface levels
pub(crate) fn interfaces<N: Float>(levels: usize) -> Array1<N> {
    let step = 1.0 / (levels.max(2) - 1) as f64;
    Array1::from_shape_fn(levels, |k| cast(k as f64 * step).unwrap())
}

/// A deterministic 3-D field whose values encode time, variable and position, so that any slice
/// can be traced back to where it came from.
pub(crate) fn field3<N: Float>(
    levels: usize,
    lats: usize,
    lons: usize,
    time: i64,
    variable: usize,
) -> Array3<N> {
    Array3::from_shape_fn([levels, lats, lons], |(k, j, i)| {
        value(time, variable, k, j, i)
    })
}

/// A deterministic 2-D field, see `field3`
pub(crate) fn field2<N: Float>(lats: usize, lons: usize, time: i64, variable: usize) -> Array2<N> {
    Array2::from_shape_fn([lats, lons], |(j, i)| value(time, variable, 0, j, i))
}

pub(crate) fn value<N: Float>(time: i64, variable: usize, k: usize, j: usize, i: usize) -> N {
    let n = time as f64 * 10000.0 + (variable * 1000 + k * 100 + j * 10 + i) as f64;
    cast(n).unwrap()
}

/// A snapshot with 3-D fields for each of `names` on a `lons` x `lats` grid with
/// `interface_levels - 1` mid levels. Contains no coordinate fields.
pub(crate) fn snapshot<N: Float>(
    lons: usize,
    lats: usize,
    interface_levels: usize,
    time: i64,
    names: &[&str],
) -> Snapshot<N> {
    let levels = interface_levels - 1;
    names
        .iter()
        .enumerate()
        .fold(Snapshot::new(time), |snapshot, (variable, name)| {
            snapshot.with_field(*name, field3(levels, lats, lons, time, variable))
        })
}

/// Same as `snapshot` but with the coordinate fields needed to initialize an accumulator.
pub(crate) fn initial_snapshot<N: Float>(
    lons: usize,
    lats: usize,
    interface_levels: usize,
    time: i64,
    names: &[&str],
) -> Snapshot<N> {
    let (longitude, latitude) = grid(lons, lats);
    snapshot(lons, lats, interface_levels, time, names)
        .with_field(LONGITUDE, longitude)
        .with_field(LATITUDE, latitude)
        .with_field(SIGMA_INTERFACE, interfaces(interface_levels))
}

/// Send log output to the test harness, so it shows up for failing tests.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
