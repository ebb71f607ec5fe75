//! CSV export for the three tables the dashboard renders: appliance
//! inventory, daily-usage sample series, and recommendation rows.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::appliance::Appliance;
use crate::recommend::RecommendationEntry;
use crate::usage::UsagePoint;

/// Column header for the appliance inventory export.
const APPLIANCE_HEADER: &str =
    "name,rate_class,unit_count,watt_per_unit,total_watt,hours_per_day,monthly_kwh";

/// Column header for the daily-usage series export.
const USAGE_HEADER: &str = "day,usage_kwh";

/// Column header for the recommendation export.
const RECOMMENDATION_HEADER: &str =
    "name,current_hours,suggested_hours,current_kwh,suggested_kwh";

/// Exports the appliance inventory to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_appliances_csv(appliances: &[Appliance], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_appliances_csv(appliances, io::BufWriter::new(file))
}

/// Writes the appliance inventory as CSV to any writer.
///
/// One row per appliance in insertion order; deterministic for identical
/// inputs.
pub fn write_appliances_csv(appliances: &[Appliance], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(APPLIANCE_HEADER.split(','))?;
    for a in appliances {
        wtr.write_record(&[
            a.name.clone(),
            a.rate_class.clone(),
            a.unit_count.to_string(),
            format!("{:.2}", a.watt_per_unit),
            format!("{:.2}", a.total_watt),
            format!("{:.2}", a.hours_per_day),
            format!("{:.4}", a.monthly_kwh()),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports the daily-usage series to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_usage_csv(points: &[UsagePoint], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_usage_csv(points, io::BufWriter::new(file))
}

/// Writes the daily-usage series as CSV to any writer.
pub fn write_usage_csv(points: &[UsagePoint], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(USAGE_HEADER.split(','))?;
    for p in points {
        wtr.write_record(&[p.day.to_string(), format!("{:.4}", p.kwh)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Exports recommendation rows to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_recommendations_csv(
    entries: &[RecommendationEntry],
    path: &Path,
) -> io::Result<()> {
    let file = File::create(path)?;
    write_recommendations_csv(entries, io::BufWriter::new(file))
}

/// Writes recommendation rows as CSV to any writer.
pub fn write_recommendations_csv(
    entries: &[RecommendationEntry],
    writer: impl Write,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(RECOMMENDATION_HEADER.split(','))?;
    for e in entries {
        wtr.write_record(&[
            e.name.clone(),
            format!("{:.2}", e.current_hours),
            format!("{:.2}", e.suggested_hours),
            format!("{:.4}", e.current_kwh),
            format!("{:.4}", e.suggested_kwh),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usage::DailyUsageSeries;

    fn tv() -> Appliance {
        Appliance::new("TV 21 inci", 1, 68.0, "R-1", 8.0).unwrap()
    }

    #[test]
    fn appliance_header_and_row_count() {
        let appliances = vec![tv(), tv()];
        let mut buf = Vec::new();
        write_appliances_csv(&appliances, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        assert_eq!(lines.first().copied(), Some(APPLIANCE_HEADER));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn usage_rows_carry_day_numbers() {
        let mut series = DailyUsageSeries::default();
        series.bulk_seeded_init(42);
        let mut buf = Vec::new();
        write_usage_csv(series.points(), &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        assert_eq!(lines.len(), 31);
        assert!(lines.get(1).is_some_and(|l| l.starts_with("1,")));
        assert!(lines.last().is_some_and(|l| l.starts_with("30,")));
    }

    #[test]
    fn recommendation_rows_round_trip() {
        let entries = vec![RecommendationEntry {
            name: "Audio".to_string(),
            current_hours: 14.0,
            suggested_hours: 4.0,
            current_kwh: 21.0,
            suggested_kwh: 6.0,
        }];
        let mut buf = Vec::new();
        write_recommendations_csv(&entries, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let mut rows = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            for i in 1..5 {
                let val: Result<f32, _> = rec.as_ref().map(|r| r[i].parse()).unwrap();
                assert!(val.is_ok(), "column {i} should parse as f32");
            }
            rows += 1;
        }
        assert_eq!(rows, 1);
    }

    #[test]
    fn deterministic_output() {
        let appliances = vec![tv()];
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_appliances_csv(&appliances, &mut buf1).ok();
        write_appliances_csv(&appliances, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }
}
