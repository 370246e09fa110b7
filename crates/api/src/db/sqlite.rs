use climate_core::is_readable_file;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;

use super::{MemoryStore, Observation, Station};
use crate::parse_date;

/// Reasons the observation store could not be brought up.
///
/// All of these are fatal at startup: the server must not serve traffic without data.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Database file not found or unreadable: {0}")]
    Missing(String),
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Database integrity check failed: {0}")]
    Integrity(String),
    #[error("Measurement {id} has an invalid date '{date}'")]
    InvalidDate { id: i64, date: String },
}

impl Error {
    pub fn kind(&self) -> &'static str {
        "StoreUnavailable"
    }
}

#[derive(sqlx::FromRow)]
struct StationRow {
    station: String,
    name: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station {
            station: row.station,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            elevation: row.elevation,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MeasurementRow {
    id: i64,
    station: String,
    date: String,
    prcp: Option<f64>,
    tobs: Option<f64>,
}

impl TryFrom<MeasurementRow> for Observation {
    type Error = Error;

    fn try_from(row: MeasurementRow) -> Result<Self, Self::Error> {
        let date = parse_date(&row.date).map_err(|_| Error::InvalidDate {
            id: row.id,
            date: row.date.clone(),
        })?;
        Ok(Observation::new(row.station, date, row.prcp, row.tobs))
    }
}

/// Read-only handle on the `station` / `measurement` SQLite database.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(path: &str) -> Result<Self, Error> {
        if !is_readable_file(path) {
            return Err(Error::Missing(path.to_owned()));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .pragma("busy_timeout", "5000")
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("Opened SQLite database at: {}", path);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database connectivity and integrity.
    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        let result: String = sqlx::query_scalar("PRAGMA quick_check;")
            .fetch_one(&self.pool)
            .await?;
        if result != "ok" {
            return Err(Error::Integrity(result));
        }

        Ok(())
    }

    pub async fn stations(&self) -> Result<Vec<Station>, Error> {
        let rows: Vec<StationRow> = sqlx::query_as(
            "SELECT station, name, latitude, longitude, elevation FROM station ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Station::from).collect())
    }

    pub async fn observations(&self) -> Result<Vec<Observation>, Error> {
        let rows: Vec<MeasurementRow> = sqlx::query_as(
            "SELECT id, station, date, prcp, tobs FROM measurement ORDER BY date, station, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Observation::try_from).collect()
    }

    /// Read both tables into an immutable in-memory store.
    pub async fn load_store(&self) -> Result<MemoryStore, Error> {
        let stations = self.stations().await?;
        let observations = self.observations().await?;
        debug!(
            "read {} stations and {} measurements",
            stations.len(),
            observations.len()
        );
        Ok(MemoryStore::new(stations, observations))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Open the database at `path`, verify it and load everything it holds.
pub async fn load_store(path: &str) -> Result<MemoryStore, Error> {
    let db = Database::new(path).await?;
    db.health_check().await?;
    let store = db.load_store().await?;
    db.close().await;

    info!(
        "Loaded {} stations and {} observations",
        store.station_count(),
        store.observation_count()
    );
    Ok(store)
}
