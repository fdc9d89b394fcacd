//! # boreas-calendar
//!
//! Season handling and year labeling for climate time axes.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["per-step months"] -->|"Season::from_sequence()"| B["Season"]
//!     B -->|".is_year_crossing()"| C["bool"]
//!     B -->|".pre_boundary_months()"| D["months before wrap"]
//!     E["per-step years + months"] -->|"assign_years()"| F["year labels"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use boreas_calendar::{Season, assign_years};
//!
//! // Derive the season of a DJF axis that starts in December:
//! let season = Season::from_sequence(&[12, 1, 2, 12, 1, 2]).unwrap();
//! assert_eq!(season.months(), &[12, 1, 2]);
//! assert!(season.is_year_crossing());
//!
//! // Label each step with the year of its season instance:
//! let labels = assign_years(&[1999, 2000, 2000], &[12, 1, 2]).unwrap();
//! assert_eq!(labels, vec![2000, 2000, 2000]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `season` | Season type derived from month sequences |
//! | `year_index` | Season-aware year labeling |
//! | `error` | Error types |

mod error;
mod season;
mod year_index;

pub use error::CalendarError;
pub use season::Season;
pub use year_index::assign_years;
