mod accumulator;
mod buffer;
mod config;
mod coords;
mod dataset;
mod dims;
mod errors;
mod export;
mod monitor;
mod shared;
mod snapshot;

#[cfg(test)]
mod testing;

pub use accumulator::StateAccumulator;
pub use config::AccumulatorConfig;
pub use config::{DEFAULT_CAPACITY_HINT, DEFAULT_TIME_UNITS};
pub use coords::interpolate_mid_levels;
pub use coords::Coordinates;
pub use dataset::{Dataset, Variable};
pub use dims::Dim;
pub use errors::{Error, ErrorKind, Result};
pub use export::Export;
pub use monitor::{record, Monitor};
pub use shared::SharedAccumulator;
pub use snapshot::Snapshot;
pub use snapshot::{is_coordinate, LATITUDE, LONGITUDE, SIGMA_INTERFACE};
