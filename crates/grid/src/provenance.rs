//! Provenance tags recording which subsetting operation last touched a
//! metadata substructure.

/// A subsetting operation, used as a provenance tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsetOp {
    /// Selection of variables by name.
    Variable,
    /// Selection of ensemble members by position.
    Member,
    /// Selection of time steps by assigned year.
    Year,
    /// Selection of time steps by calendar month.
    Season,
    /// Selection of a spatial window or point.
    Spatial,
    /// Positional selection along one named dimension.
    Dimension,
}

impl SubsetOp {
    /// All operations in orchestration order.
    pub const ALL: [SubsetOp; 6] = [
        Self::Variable,
        Self::Member,
        Self::Year,
        Self::Season,
        Self::Spatial,
        Self::Dimension,
    ];

    /// Returns the tag string recorded for this operation.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Variable => "variable-subset",
            Self::Member => "member-subset",
            Self::Year => "year-subset",
            Self::Season => "season-subset",
            Self::Spatial => "spatial-subset",
            Self::Dimension => "dimension-subset",
        }
    }
}

impl std::fmt::Display for SubsetOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-substructure provenance of a grid.
///
/// Each slot names the last subsetting operation that re-sliced the
/// corresponding substructure, for downstream introspection. Provenance is
/// never used for control flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Provenance {
    variable: Option<SubsetOp>,
    dates: Option<SubsetOp>,
    members: Option<SubsetOp>,
    coords: Option<SubsetOp>,
}

impl Provenance {
    /// Creates empty provenance for a freshly loaded grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags the variable metadata.
    pub fn with_variable(mut self, op: SubsetOp) -> Self {
        self.variable = Some(op);
        self
    }

    /// Tags the date metadata.
    pub fn with_dates(mut self, op: SubsetOp) -> Self {
        self.dates = Some(op);
        self
    }

    /// Tags the member metadata.
    pub fn with_members(mut self, op: SubsetOp) -> Self {
        self.members = Some(op);
        self
    }

    /// Tags the spatial coordinates.
    pub fn with_coords(mut self, op: SubsetOp) -> Self {
        self.coords = Some(op);
        self
    }

    /// Returns the last operation applied to the variable metadata.
    pub fn variable(&self) -> Option<SubsetOp> {
        self.variable
    }

    /// Returns the last operation applied to the date metadata.
    pub fn dates(&self) -> Option<SubsetOp> {
        self.dates
    }

    /// Returns the last operation applied to the member metadata.
    pub fn members(&self) -> Option<SubsetOp> {
        self.members
    }

    /// Returns the last operation applied to the spatial coordinates.
    pub fn coords(&self) -> Option<SubsetOp> {
        self.coords
    }
}
