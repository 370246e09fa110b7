//! Flattens structured query rows into the flat JSON arrays the API returns.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{PrecipitationRow, StationEntry, TemperatureRow, TemperatureStats};

/// A single value in a flattened response.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

/// A row that knows its own field order.
pub trait FlattenRow {
    fn fields(&self) -> Vec<Scalar>;
}

impl FlattenRow for PrecipitationRow {
    fn fields(&self) -> Vec<Scalar> {
        vec![Scalar::Text(self.date.to_string()), self.prcp.into()]
    }
}

impl FlattenRow for StationEntry {
    fn fields(&self) -> Vec<Scalar> {
        vec![self.station.as_str().into(), self.name.as_str().into()]
    }
}

impl FlattenRow for TemperatureRow {
    fn fields(&self) -> Vec<Scalar> {
        vec![
            Scalar::Text(self.date.to_string()),
            self.station.as_str().into(),
            self.tobs.into(),
        ]
    }
}

impl FlattenRow for TemperatureStats {
    fn fields(&self) -> Vec<Scalar> {
        vec![self.min.into(), self.avg.into(), self.max.into()]
    }
}

/// Concatenate the fields of every row, keeping row order and field order.
pub fn flatten<'a, R, I>(rows: I) -> Vec<Scalar>
where
    R: FlattenRow + 'a,
    I: IntoIterator<Item = &'a R>,
{
    rows.into_iter().flat_map(|row| row.fields()).collect()
}
