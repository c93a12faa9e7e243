use chrono::Datelike;
use sqlx::FromRow;

use crate::db::Database;
use crate::error::DataError;
use crate::models::trip::{EnrichedTrip, TripRecord};

pub mod nulls;

pub use nulls::{analyze_null_values, NullReport};

/// Placeholder for missing station names and ids.
pub const UNKNOWN_STATION: &str = "Unknown";

/// Fetches trip records through a borrowed [`Database`]. The cleaning and
/// enrichment steps are plain transformations over the fetched records and
/// live as free functions in this module.
pub struct DataAnalyzer<'a> {
    db: &'a Database,
}

impl<'a> DataAnalyzer<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Runs the query and decodes every row into a [`TripRecord`]. The
    /// schema is validated here, once: a missing or mistyped column fails
    /// the whole fetch, never a partial table.
    pub async fn fetch_data(&self, query: &str) -> Result<Vec<TripRecord>, DataError> {
        if !self.db.is_connected().await {
            return Err(DataError::NotConnected);
        }

        let rows = self.db.fetch_all(query).await?;
        let mut trips = Vec::with_capacity(rows.len());
        for row in &rows {
            trips.push(TripRecord::from_row(row).map_err(DataError::Schema)?);
        }
        Ok(trips)
    }
}

/// Fills missing station columns with [`UNKNOWN_STATION`], then drops rows
/// without end coordinates. No other column is modified.
pub fn clean_data(trips: Vec<TripRecord>) -> Vec<TripRecord> {
    trips
        .into_iter()
        .map(|mut trip| {
            for station in [
                &mut trip.start_station_name,
                &mut trip.start_station_id,
                &mut trip.end_station_name,
                &mut trip.end_station_id,
            ] {
                if station.is_none() {
                    *station = Some(UNKNOWN_STATION.to_string());
                }
            }
            trip
        })
        .filter(TripRecord::has_end_coordinates)
        .collect()
}

/// Appends the derived time columns: trip duration in minutes plus the
/// weekday name, month and year of the start timestamp.
pub fn add_time_columns(trips: Vec<TripRecord>) -> Vec<EnrichedTrip> {
    trips
        .into_iter()
        .map(|trip| {
            let trip_duration = (trip.ended_at - trip.started_at).num_seconds() as f64 / 60.0;
            let day_of_week = trip.started_at.format("%A").to_string();
            let month = trip.started_at.month();
            let year = trip.started_at.year();
            EnrichedTrip {
                trip,
                trip_duration,
                day_of_week,
                month,
                year,
            }
        })
        .collect()
}
