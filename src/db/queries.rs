/// Probe used only to verify an existing connection is still usable.
pub const PROBE: &str = "SELECT 1;";

pub const SELECT_ALL_TRIPS: &str = r#"
SELECT ride_id, rideable_type, started_at, ended_at,
       start_station_name, start_station_id,
       end_station_name, end_station_id,
       start_lat, start_lng, end_lat, end_lng,
       member_casual
FROM trips;
"#;
