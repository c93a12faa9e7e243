use std::fmt;

use crate::models::trip::{TripRecord, COLUMNS, COLUMN_COUNT};

#[derive(Debug)]
pub struct ColumnNulls {
    pub column: &'static str,
    pub count: usize,
    /// Nulls in this column over the row count, as a percentage.
    pub pct: f64,
}

/// Null-value statistics over a set of trip records. Built by
/// [`analyze_null_values`]; the `Display` impl renders the
/// human-readable breakdown.
#[derive(Debug)]
pub struct NullReport {
    /// Per-column stats, sorted descending by null count.
    pub columns: Vec<ColumnNulls>,
    pub total_cells: usize,
    pub total_nulls: usize,
    /// Total nulls over total cells (rows x all columns), as a percentage.
    pub global_pct: f64,
}

pub fn analyze_null_values(trips: &[TripRecord]) -> NullReport {
    let rows = trips.len();
    let mut counts = [0usize; COLUMN_COUNT];
    for trip in trips {
        for (slot, is_null) in counts.iter_mut().zip(trip.null_flags()) {
            if is_null {
                *slot += 1;
            }
        }
    }

    let mut columns: Vec<ColumnNulls> = COLUMNS
        .iter()
        .zip(counts)
        .map(|(&column, count)| ColumnNulls {
            column,
            count,
            pct: if rows == 0 {
                0.0
            } else {
                count as f64 / rows as f64 * 100.0
            },
        })
        .collect();
    columns.sort_by(|a, b| b.count.cmp(&a.count));

    let total_cells = rows * COLUMN_COUNT;
    let total_nulls = counts.iter().sum();
    let global_pct = if total_cells == 0 {
        0.0
    } else {
        total_nulls as f64 / total_cells as f64 * 100.0
    };

    NullReport {
        columns,
        total_cells,
        total_nulls,
        global_pct,
    }
}

impl fmt::Display for NullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Null counts per column (descending order):")?;
        for col in &self.columns {
            writeln!(f, "  {:<20} {:>8} {:>9.2}%", col.column, col.count, col.pct)?;
        }
        writeln!(f)?;
        writeln!(f, "Global null value analysis:")?;
        writeln!(f, "- Total cells: {}", self.total_cells)?;
        writeln!(f, "- Total null values: {}", self.total_nulls)?;
        write!(f, "- Global null percentage: {:.2}%", self.global_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_percentage_matches_per_column_sum() {
        let mut a = TripRecord::test_row("a");
        a.rideable_type = None;
        a.end_station_id = None;
        let mut b = TripRecord::test_row("b");
        b.end_station_id = None;

        let report = analyze_null_values(&[a, b]);

        assert_eq!(report.total_nulls, 3);
        assert_eq!(report.total_cells, 2 * COLUMN_COUNT);
        let per_column_sum: usize = report.columns.iter().map(|c| c.count).sum();
        let expected = per_column_sum as f64 / report.total_cells as f64 * 100.0;
        assert!((report.global_pct - expected).abs() < 1e-9);
    }

    #[test]
    fn columns_sorted_descending_by_count() {
        let mut a = TripRecord::test_row("a");
        a.end_station_name = None;
        a.member_casual = None;
        let mut b = TripRecord::test_row("b");
        b.end_station_name = None;

        let report = analyze_null_values(&[a, b]);

        assert_eq!(report.columns[0].column, "end_station_name");
        assert_eq!(report.columns[0].count, 2);
        assert_eq!(report.columns[0].pct, 100.0);
        assert_eq!(report.columns[1].column, "member_casual");
        assert_eq!(report.columns[1].count, 1);
        for pair in report.columns.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn one_null_in_three_rows_rounds_to_expected_percentage() {
        // 3 rows x 13 columns with exactly 1 missing cell -> 1/39 = 2.56%.
        let mut a = TripRecord::test_row("a");
        a.start_lat = None;
        let b = TripRecord::test_row("b");
        let c = TripRecord::test_row("c");

        let report = analyze_null_values(&[a, b, c]);

        assert_eq!(report.total_nulls, 1);
        assert_eq!(format!("{:.2}", report.global_pct), "2.56");
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let report = analyze_null_values(&[]);
        assert_eq!(report.total_cells, 0);
        assert_eq!(report.total_nulls, 0);
        assert_eq!(report.global_pct, 0.0);
        assert!(report.columns.iter().all(|c| c.count == 0 && c.pct == 0.0));
    }
}
