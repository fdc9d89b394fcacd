//! # boreas-subset
//!
//! Dimension-aware subsetting of climate grids: every selector narrows
//! the data array and its metadata together, so the result is again a
//! valid [`Grid`].
//!
//! ## Selectors
//!
//! ```text
//!  variables ──▶ members ──▶ years ──▶ season ──▶ spatial
//!  (by name)     (1-based)   (assigned) (months)   (coordinate units)
//! ```
//!
//! Each selector is a free function; [`subset`] chains them in the order
//! above, driven by a [`SubsetQuery`]. The index-level
//! [`subset_dimension`] sits underneath for callers that already know
//! positions rather than labels.
//!
//! ## Quick Start
//!
//! ```ignore
//! use boreas_subset::{SubsetQuery, subset, subset_spatial};
//!
//! let winter_iberia = subset(
//!     &grid,
//!     &SubsetQuery::new()
//!         .with_variables(["tas"])
//!         .with_season([12, 1, 2])
//!         .with_lon([-10.0, 5.0])
//!         .with_lat([35.0, 44.0]),
//! )?;
//!
//! // Or call one selector directly:
//! let point = subset_spatial(&grid, Some(&[-3.7]), Some(&[40.4]))?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `variable` | Select variables by name |
//! | `member` | Select ensemble members by position |
//! | `years` | Select time steps by assigned year |
//! | `season` | Narrow the season by month |
//! | `spatial` | Coordinate-unit windowing with nearest-neighbour snapping |
//! | `dimension` | Index-level selection along one dimension |
//! | `query` | The composite query and its runner |
//! | `error` | Error types |

mod common;
mod dimension;
mod error;
mod member;
mod query;
mod season;
mod spatial;
mod variable;
mod years;

pub use boreas_grid::{Dim, Grid};
pub use dimension::subset_dimension;
pub use error::SubsetError;
pub use member::subset_members;
pub use query::{SubsetQuery, subset};
pub use season::subset_season;
pub use spatial::subset_spatial;
pub use variable::subset_variables;
pub use years::subset_years;
