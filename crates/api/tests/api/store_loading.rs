use climate_api::{db, load_store, ObservationStore};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};
use tempfile::TempDir;
use time::macros::date;

async fn create_database(dir: &TempDir) -> (String, SqlitePool) {
    let path = dir.path().join("hawaii.sqlite");
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    for (id, station, name) in [
        (1, "USC00519397", "WAIKIKI 717.2, HI US"),
        (2, "USC00513117", "KANEOHE 838.1, HI US"),
    ] {
        sqlx::query("INSERT INTO station (id, station, name, latitude, longitude, elevation) VALUES (?, ?, ?, 21.2716, -157.8168, 3.0)")
            .bind(id)
            .bind(station)
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    (path.to_string_lossy().into_owned(), pool)
}

async fn insert_measurement(
    pool: &SqlitePool,
    id: i64,
    station: &str,
    date: &str,
    prcp: Option<f64>,
    tobs: Option<f64>,
) {
    sqlx::query("INSERT INTO measurement (id, station, date, prcp, tobs) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
async fn loads_stations_and_measurements() {
    let dir = tempfile::tempdir().unwrap();
    let (path, pool) = create_database(&dir).await;
    insert_measurement(&pool, 1, "USC00519397", "2017-08-23", None, Some(80.0)).await;
    insert_measurement(&pool, 2, "USC00519397", "2017-08-20", Some(0.5), Some(75.0)).await;
    insert_measurement(&pool, 3, "USC00513117", "2017-08-20", Some(0.1), Some(77.0)).await;
    pool.close().await;

    let store = load_store(&path).await.expect("store loads");

    let ids: Vec<_> = store
        .all_stations()
        .iter()
        .map(|s| s.station.as_str())
        .collect();
    assert_eq!(ids, vec!["USC00519397", "USC00513117"]);
    assert_eq!(store.all_stations()[0].elevation, Some(3.0));

    assert_eq!(store.observation_count(), 3);
    assert_eq!(store.last_observation_date(), Some(date!(2017 - 08 - 23)));

    let range = climate_api::DateRange::starting_at(date!(2017 - 01 - 01));
    let scanned: Vec<_> = store
        .observations_in_range(&range)
        .map(|o| (o.date, o.station.as_str(), o.prcp))
        .collect();
    assert_eq!(
        scanned,
        vec![
            (date!(2017 - 08 - 20), "USC00513117", Some(0.1)),
            (date!(2017 - 08 - 20), "USC00519397", Some(0.5)),
            (date!(2017 - 08 - 23), "USC00519397", None),
        ]
    );
}

#[tokio::test]
async fn missing_database_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.sqlite");

    let err = load_store(&path.to_string_lossy()).await.unwrap_err();
    assert!(matches!(err, db::Error::Missing(_)));
    assert_eq!(err.kind(), "StoreUnavailable");
}

#[tokio::test]
async fn invalid_measurement_date_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let (path, pool) = create_database(&dir).await;
    insert_measurement(&pool, 7, "USC00519397", "08/23/2017", None, Some(80.0)).await;
    pool.close().await;

    let err = load_store(&path).await.unwrap_err();
    assert!(matches!(err, db::Error::InvalidDate { id: 7, .. }));
}

#[tokio::test]
async fn database_without_tables_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.sqlite");
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .unwrap();
    pool.close().await;

    let err = load_store(&path.to_string_lossy()).await.unwrap_err();
    assert!(matches!(err, db::Error::Query(_)));
}
