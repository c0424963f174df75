//! Console table rendering for reports and the weekly breakdown.

use crate::libs::formatter::{format_seconds, weekday_label};
use crate::libs::summary::WeekRow;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the daily report: one row per recorded day, newest first.
    pub fn report(rows: &[(NaiveDate, f64)]) {
        let mut table = Table::new();

        table.add_row(row!["DAY", "ACTIVE"]);
        for (day, active_secs) in rows {
            table.add_row(row![day.format("%Y-%m-%d"), format_seconds(*active_secs)]);
        }
        table.printstd();
    }

    /// Renders the weekly breakdown with active and pause columns.
    pub fn week(rows: &[WeekRow]) {
        let mut table = Table::new();

        table.add_row(row!["DAY", "ACTIVE", "PAUSE"]);
        for week_row in rows {
            table.add_row(row![
                weekday_label(week_row.day),
                format_seconds(week_row.active_secs),
                format_seconds(week_row.pause_secs)
            ]);
        }
        table.printstd();
    }
}
