//! # boreas
//!
//! Dimension-aware subsetting and monthly-mean rescaling for
//! multi-dimensional climate grids.
//!
//! A [`Grid`] bundles an N-dimensional data array with the metadata that
//! describes each axis: variables, ensemble members, dates, spatial
//! coordinates. Every operation narrows or transforms the array and its
//! metadata together, so results are always well-formed grids again.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     A["boreas-calendar<br/>seasons, assigned years"] --> B["boreas-grid<br/>data model"]
//!     B --> C["boreas-subset<br/>selectors"]
//!     B --> D["boreas-stats<br/>NaN-aware means"]
//!     C --> E["boreas-rescale<br/>monthly-mean recentering"]
//!     D --> E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use boreas::{SubsetQuery, rescale_monthly_means, subset};
//!
//! // Winter precipitation over one member, on a coordinate window.
//! let narrowed = subset(
//!     &forecast,
//!     &SubsetQuery::new()
//!         .with_variables(["pr"])
//!         .with_members([1])
//!         .with_season([12, 1, 2])
//!         .with_lon([-10.0, 5.0])
//!         .with_lat([35.0, 44.0]),
//! )?;
//!
//! // Recenter its monthly means on the observed climatology.
//! let corrected = rescale_monthly_means(&observations, &narrowed, Some(&hindcast), false)?
//!     .into_grid();
//! ```
//!
//! ## Crates
//!
//! | Crate | Description |
//! |-------|-------------|
//! | `boreas-calendar` | Season derivation and year-crossing year assignment |
//! | `boreas-grid` | The labeled array and grid data model |
//! | `boreas-subset` | Selectors along every dimension and the composite query |
//! | `boreas-stats` | NaN-aware reductions used by the climatologies |
//! | `boreas-rescale` | Monthly-mean recentering against a reference grid |

pub use boreas_calendar::{CalendarError, Season, assign_years};
pub use boreas_grid::{
    Dim, DimArray, DropMode, Grid, GridError, InitDates, Provenance, SpatialCoords, SubsetOp,
    TimeAxis, TimeBounds, Variable, flatten_space, unflatten_space,
};
pub use boreas_rescale::{CenteringOffset, RescaleError, RescaleResult, rescale_monthly_means};
pub use boreas_stats::{column_nan_means, nan_mean, valid_count};
pub use boreas_subset::{
    SubsetError, SubsetQuery, subset, subset_dimension, subset_members, subset_season,
    subset_spatial, subset_variables, subset_years,
};
