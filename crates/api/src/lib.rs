//! Read-only HTTP API over historical per-station precipitation and temperature
//! observations.
//!
//! Requests flow through [`resolve`] (date range), [`QueryEngine`] (filter, group,
//! project over an [`ObservationStore`]) and [`flatten`] (wire shape).

pub mod date_range;
pub mod db;
pub mod projector;
pub mod query;
pub mod routes;
pub mod startup;
pub mod templates;
pub mod utils;

pub use date_range::{parse_date, resolve, trailing_year, DateRange};
pub use db::{load_store, Database, MemoryStore, Observation, ObservationStore, Station};
pub use projector::{flatten, FlattenRow, Scalar};
pub use query::{PrecipitationRow, QueryEngine, StationEntry, TemperatureRow, TemperatureStats};
pub use routes::*;
pub use startup::*;
pub use utils::*;
