//! # boreas-grid
//!
//! The climate grid data model: a labeled N-D array bundled with
//! coordinate, temporal, and membership metadata kept in lockstep.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ArrayD + Dim tags"] -->|"DimArray::new()"| B["DimArray"]
//!     B -->|".select()"| B
//!     B --> C["Grid::new()"]
//!     D["Variable / SpatialCoords / TimeAxis / members / InitDates"] --> C
//!     C -->|".season() / .assigned_years()"| E["time classification"]
//!     B -->|"flatten_space()"| F["rows x space matrix"]
//!     F -->|"unflatten_space()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use boreas_grid::{Dim, DimArray, DropMode, Grid, SpatialCoords, TimeAxis, Variable};
//!
//! let array = DimArray::new(data, vec![Dim::Time, Dim::Lat, Dim::Lon])?;
//! let grid = Grid::new(
//!     array,
//!     vec![Variable::new("tas", None)],
//!     SpatialCoords::new(lons, lats)?,
//!     TimeAxis::Shared(dates),
//!     None,
//!     None,
//! )?;
//!
//! // Dimension-aware slicing keeps tags synchronized with rank:
//! let point = grid.data().select(Dim::Lon, &[3], DropMode::Drop)?;
//! assert_eq!(point.dims(), &[Dim::Time, Dim::Lat]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `dim` | Semantic dimension tags in canonical order |
//! | `array` | Labeled array and the drop-aware slicing primitive |
//! | `variable` | Per-variable metadata records |
//! | `coords` | Spatial coordinate vectors |
//! | `time` | Time-step bounds and shared/per-variable axes |
//! | `members` | Ensemble initialization dates |
//! | `provenance` | Subsetting provenance tags |
//! | `grid` | The validated grid root entity |
//! | `reshape` | Flattened-space matrix conversions |
//! | `error` | Error types |

mod array;
mod coords;
mod dim;
mod error;
mod grid;
mod members;
mod provenance;
mod reshape;
mod time;
mod variable;

pub use array::{DimArray, DropMode};
pub use coords::SpatialCoords;
pub use dim::Dim;
pub use error::GridError;
pub use grid::Grid;
pub use members::InitDates;
pub use provenance::{Provenance, SubsetOp};
pub use reshape::{flatten_space, unflatten_space};
pub use time::{TimeAxis, TimeBounds};
pub use variable::Variable;
