use time::Date;

use super::{Observation, Station};
use crate::DateRange;

/// Read-only access to the station and observation collections.
///
/// Implementations are immutable once constructed, so a single handle can be
/// shared across concurrent requests without locking.
pub trait ObservationStore: Send + Sync {
    /// Stations in load order
    fn all_stations(&self) -> &[Station];

    /// Observations whose date falls in `range`, ordered by date then station.
    fn observations_in_range<'a>(
        &'a self,
        range: &DateRange,
    ) -> Box<dyn Iterator<Item = &'a Observation> + 'a>;

    /// Most recent observation date, `None` for an empty store
    fn last_observation_date(&self) -> Option<Date>;
}

/// Observations held in memory, sorted by (date, station) for range scans.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stations: Vec<Station>,
    observations: Vec<Observation>,
}

impl MemoryStore {
    pub fn new(stations: Vec<Station>, mut observations: Vec<Observation>) -> Self {
        // stable: duplicate (station, date) rows keep their load order
        observations.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.station.cmp(&b.station)));
        Self {
            stations,
            observations,
        }
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
}

impl ObservationStore for MemoryStore {
    fn all_stations(&self) -> &[Station] {
        &self.stations
    }

    fn observations_in_range<'a>(
        &'a self,
        range: &DateRange,
    ) -> Box<dyn Iterator<Item = &'a Observation> + 'a> {
        let start = range.start();
        let lower = self.observations.partition_point(|o| o.date < start);
        let upper = match range.end() {
            Some(end) => self.observations.partition_point(|o| o.date <= end),
            None => self.observations.len(),
        };
        Box::new(self.observations[lower..upper.max(lower)].iter())
    }

    fn last_observation_date(&self) -> Option<Date> {
        self.observations.last().map(|o| o.date)
    }
}
