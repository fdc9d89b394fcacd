//! Per-variable metadata.

/// Metadata record for one climate variable of a grid.
///
/// `level` is the vertical level in hPa for pressure-level variables and
/// `None` for surface variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    level: Option<f64>,
}

impl Variable {
    /// Creates a variable record.
    pub fn new(name: impl Into<String>, level: Option<f64>) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vertical level, if any.
    pub fn level(&self) -> Option<f64> {
        self.level
    }
}
