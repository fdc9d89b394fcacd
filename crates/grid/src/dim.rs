//! Semantic dimension tags for grid arrays.

/// Semantic dimension of a grid array axis.
///
/// The variant order is the canonical relative order of grid dimensions: a
/// grid's dimension-tag list is always a subsequence of
/// `[Variable, Member, Time, Lat, Lon]`. The derived `Ord` follows that
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Dim {
    /// Bundled climate variables of a multigrid.
    Variable = 0,
    /// Ensemble member realizations.
    Member = 1,
    /// Time steps.
    Time = 2,
    /// Latitudes, ordered south to north.
    Lat = 3,
    /// Longitudes, ordered west to east.
    Lon = 4,
}

impl Dim {
    /// All dimensions in canonical order.
    pub const ALL: [Dim; 5] = [Self::Variable, Self::Member, Self::Time, Self::Lat, Self::Lon];

    /// Returns the short dimension name used in tag lists and messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Variable => "var",
            Self::Member => "member",
            Self::Time => "time",
            Self::Lat => "lat",
            Self::Lon => "lon",
        }
    }
}

impl std::fmt::Display for Dim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Formats a dimension-tag list for error messages and logs.
pub(crate) fn format_dims(dims: &[Dim]) -> String {
    let names: Vec<&str> = dims.iter().map(|d| d.name()).collect();
    names.join(",")
}
