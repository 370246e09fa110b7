//! Date-bounded projections and aggregates over an [`ObservationStore`].
//!
//! Every operation is a single ordered scan: the store yields observations by
//! date then station, so results come out in that order without re-sorting.

use std::sync::Arc;

use time::Date;

use crate::{DateRange, Observation, ObservationStore};

#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationRow {
    pub date: Date,
    pub prcp: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationEntry {
    pub station: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRow {
    pub date: Date,
    pub station: String,
    pub tobs: f64,
}

/// Min, mean and max temperature over a whole range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub min: f64,
    /// Arithmetic mean rounded to one decimal place
    pub avg: f64,
    pub max: f64,
}

#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn ObservationStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn ObservationStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ObservationStore {
        self.store.as_ref()
    }

    /// One precipitation value per date, taken from the first observation of that date.
    /// Dates whose representative has no reading are left out.
    pub fn precipitation_by_date(&self, range: &DateRange) -> Vec<PrecipitationRow> {
        first_per_date(self.store.observations_in_range(range))
            .filter_map(|obs| {
                obs.prcp.map(|prcp| PrecipitationRow {
                    date: obs.date,
                    prcp,
                })
            })
            .collect()
    }

    pub fn station_list(&self) -> Vec<StationEntry> {
        self.store
            .all_stations()
            .iter()
            .map(|s| StationEntry {
                station: s.station.clone(),
                name: s.name.clone(),
            })
            .collect()
    }

    /// Same per-date selection as [`Self::precipitation_by_date`], for temperature.
    pub fn temperature_observations(&self, range: &DateRange) -> Vec<TemperatureRow> {
        first_per_date(self.store.observations_in_range(range))
            .filter_map(|obs| {
                obs.tobs.map(|tobs| TemperatureRow {
                    date: obs.date,
                    station: obs.station.clone(),
                    tobs,
                })
            })
            .collect()
    }

    /// Aggregate of every temperature reading in `range`; `None` when there is none.
    pub fn temperature_stats(&self, range: &DateRange) -> Option<TemperatureStats> {
        let mut readings = self
            .store
            .observations_in_range(range)
            .filter_map(|obs| obs.tobs);

        let first = readings.next()?;
        let (min, max, sum, count) = readings.fold(
            (first, first, first, 1_u32),
            |(min, max, sum, count), t| (min.min(t), max.max(t), sum + t, count + 1),
        );

        // rounding must not push the mean outside [min, max]
        let avg = round_tenths(sum / f64::from(count)).clamp(min, max);
        Some(TemperatureStats { min, avg, max })
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Keep the first observation of each date. Relies on date-ordered input.
fn first_per_date<'a>(
    observations: impl Iterator<Item = &'a Observation>,
) -> impl Iterator<Item = &'a Observation> {
    let mut previous: Option<Date> = None;
    observations.filter(move |obs| {
        let first = previous != Some(obs.date);
        previous = Some(obs.date);
        first
    })
}
