use std::fmt;

/// The named dimensions a variable in an accumulated dataset can have.
///
/// Variables are always laid out time first, then vertical level (if any), then latitude, then
/// longitude.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dim {
    Time,
    MidLevels,
    Lat,
    Lon,
}

impl Dim {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::MidLevels => "mid_levels",
            Self::Lat => "lat",
            Self::Lon => "lon",
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
