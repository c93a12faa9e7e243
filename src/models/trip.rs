use chrono::NaiveDateTime;
use sqlx::FromRow;

pub const COLUMN_COUNT: usize = 13;

/// Column names of the trips result set, in select order
/// (see `db::queries::SELECT_ALL_TRIPS`).
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "ride_id",
    "rideable_type",
    "started_at",
    "ended_at",
    "start_station_name",
    "start_station_id",
    "end_station_name",
    "end_station_id",
    "start_lat",
    "start_lng",
    "end_lat",
    "end_lng",
    "member_casual",
];

#[derive(Debug, Clone, FromRow)]
pub struct TripRecord {
    pub ride_id: String,
    pub rideable_type: Option<String>,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
    pub start_station_name: Option<String>, // DDL says text NULL
    pub start_station_id: Option<String>,
    pub end_station_name: Option<String>,
    pub end_station_id: Option<String>,
    pub start_lat: Option<f64>, // DDL says float8 NULL
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
    pub member_casual: Option<String>,
}

impl TripRecord {
    /// Null flag per column, in `COLUMNS` order. Non-nullable columns
    /// always report false.
    pub fn null_flags(&self) -> [bool; COLUMN_COUNT] {
        [
            false, // ride_id
            self.rideable_type.is_none(),
            false, // started_at
            false, // ended_at
            self.start_station_name.is_none(),
            self.start_station_id.is_none(),
            self.end_station_name.is_none(),
            self.end_station_id.is_none(),
            self.start_lat.is_none(),
            self.start_lng.is_none(),
            self.end_lat.is_none(),
            self.end_lng.is_none(),
            self.member_casual.is_none(),
        ]
    }

    pub fn has_end_coordinates(&self) -> bool {
        self.end_lat.is_some() && self.end_lng.is_some()
    }
}

/// A trip record with the derived time columns appended. The source
/// columns are carried along unchanged.
#[derive(Debug, Clone)]
pub struct EnrichedTrip {
    pub trip: TripRecord,
    /// Elapsed minutes, ended_at - started_at. Negative when the record
    /// ends before it starts.
    pub trip_duration: f64,
    /// Full weekday name of started_at, e.g. "Monday".
    pub day_of_week: String,
    pub month: u32,
    pub year: i32,
}

#[cfg(test)]
impl TripRecord {
    /// Fully populated record for tests; individual fields are blanked
    /// out per test case.
    pub(crate) fn test_row(ride_id: &str) -> Self {
        use chrono::NaiveDate;

        let started_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Self {
            ride_id: ride_id.to_string(),
            rideable_type: Some("classic_bike".to_string()),
            started_at,
            ended_at: started_at + chrono::Duration::minutes(30),
            start_station_name: Some("Clark St & Elm St".to_string()),
            start_station_id: Some("TA1307000039".to_string()),
            end_station_name: Some("Wells St & Concord Ln".to_string()),
            end_station_id: Some("TA1308000050".to_string()),
            start_lat: Some(41.902973),
            start_lng: Some(-87.63128),
            end_lat: Some(41.912133),
            end_lng: Some(-87.634656),
            member_casual: Some("member".to_string()),
        }
    }
}
