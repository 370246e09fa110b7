use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

/// A reporting station, loaded once from the `station` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Station {
    /// Stable station code, e.g. `USC00519397`
    pub station: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Elevation in meters
    pub elevation: Option<f64>,
}

impl Station {
    pub fn new(station: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            name: name.into(),
            latitude: None,
            longitude: None,
            elevation: None,
        }
    }
}

/// One station's daily reading, loaded from the `measurement` table.
///
/// Both values are optional: an absent value is a missing measurement, not zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub station: String,
    pub date: Date,
    /// Precipitation in inches
    pub prcp: Option<f64>,
    /// Observed temperature in degrees Fahrenheit
    pub tobs: Option<f64>,
}

impl Observation {
    pub fn new(
        station: impl Into<String>,
        date: Date,
        prcp: Option<f64>,
        tobs: Option<f64>,
    ) -> Self {
        Self {
            station: station.into(),
            date,
            prcp,
            tobs,
        }
    }
}
