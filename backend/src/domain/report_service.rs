//! Sales report domain logic.
//!
//! Reports select reservations whose start time falls in a half-open window
//! `[start, end)` and sum their service fees. Building a report never touches
//! the collection; only the window and total are appended to the report log.

use chrono::NaiveDateTime;
use log::info;
use shared::ReportPeriod;
use std::sync::Arc;

use crate::domain::datetime::{add_days, add_one_month, start_of_month, start_of_week};
use crate::domain::errors::BoardingResult;
use crate::domain::models::{Money, Reservation};
use crate::storage::{Connection, ReportLogStorage};

/// Half-open time interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportWindow {
    /// Monday 00:00 on or before `reference`, spanning seven days
    pub fn week_of(reference: NaiveDateTime) -> Self {
        let start = start_of_week(reference);
        Self {
            start,
            end: add_days(start, 7),
        }
    }

    /// First day of `reference`'s month up to the first day of the next month
    pub fn month_of(reference: NaiveDateTime) -> Self {
        let start = start_of_month(reference);
        Self {
            start,
            end: add_one_month(start),
        }
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.start && timestamp < self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    pub period: ReportPeriod,
    pub window: ReportWindow,
    pub total_earnings: Money,
    /// Matching reservations in collection order
    pub reservations: Vec<Reservation>,
}

pub fn build_report(
    period: ReportPeriod,
    reservations: &[Reservation],
    reference: NaiveDateTime,
) -> SalesReport {
    let window = match period {
        ReportPeriod::Weekly => ReportWindow::week_of(reference),
        ReportPeriod::Monthly => ReportWindow::month_of(reference),
    };

    let matching: Vec<Reservation> = reservations
        .iter()
        .filter(|reservation| window.contains(reservation.start_time))
        .cloned()
        .collect();
    let total_earnings = matching.iter().map(Reservation::total_fee).sum();

    SalesReport {
        period,
        window,
        total_earnings,
        reservations: matching,
    }
}

pub fn build_weekly_report(reservations: &[Reservation], reference: NaiveDateTime) -> SalesReport {
    build_report(ReportPeriod::Weekly, reservations, reference)
}

pub fn build_monthly_report(reservations: &[Reservation], reference: NaiveDateTime) -> SalesReport {
    build_report(ReportPeriod::Monthly, reservations, reference)
}

/// Builds reports and records their summaries in the report logs
#[derive(Clone)]
pub struct ReportService<C: Connection> {
    report_log_repository: C::ReportLogRepository,
}

impl<C: Connection> ReportService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let report_log_repository = connection.create_report_log_repository();
        Self {
            report_log_repository,
        }
    }

    pub fn weekly_report(
        &self,
        reservations: &[Reservation],
        reference: NaiveDateTime,
    ) -> BoardingResult<SalesReport> {
        self.generate(ReportPeriod::Weekly, reservations, reference)
    }

    pub fn monthly_report(
        &self,
        reservations: &[Reservation],
        reference: NaiveDateTime,
    ) -> BoardingResult<SalesReport> {
        self.generate(ReportPeriod::Monthly, reservations, reference)
    }

    fn generate(
        &self,
        period: ReportPeriod,
        reservations: &[Reservation],
        reference: NaiveDateTime,
    ) -> BoardingResult<SalesReport> {
        let report = build_report(period, reservations, reference);
        info!(
            "📊 {} report {} .. {}: {} reservations, total ${}",
            period,
            report.window.start,
            report.window.end,
            report.reservations.len(),
            report.total_earnings
        );
        self.report_log_repository.append_summary(period, &report)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::{datetime, sample_reservation, TestEnvironment};
    use crate::storage::csv::CsvConnection;
    use std::fs;

    #[test]
    fn test_weekly_window_excludes_next_monday() {
        let reservations = vec![
            sample_reservation(1, "Alice", "Rex", "2024-06-03T00:00:00"),
            sample_reservation(2, "Bob", "Milo", "2024-06-10T00:00:00"),
        ];
        let report = build_weekly_report(&reservations, datetime("2024-06-05T15:00:00"));

        assert_eq!(report.window.start, datetime("2024-06-03T00:00:00"));
        assert_eq!(report.window.end, datetime("2024-06-10T00:00:00"));
        let ids: Vec<_> = report.reservations.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(report.total_earnings, 250);
    }

    #[test]
    fn test_weekly_window_boundaries() {
        let window = ReportWindow::week_of(datetime("2024-06-09T23:59:59"));
        assert!(window.contains(datetime("2024-06-03T00:00:00")));
        assert!(window.contains(datetime("2024-06-09T23:59:59")));
        assert!(!window.contains(datetime("2024-06-10T00:00:00")));
        assert!(!window.contains(datetime("2024-06-02T23:59:59")));
    }

    #[test]
    fn test_monthly_window() {
        let reservations = vec![
            sample_reservation(1, "Alice", "Rex", "2024-05-31T23:59:00"),
            sample_reservation(2, "Bob", "Milo", "2024-06-01T00:00:00"),
            sample_reservation(3, "Carol", "Kiwi", "2024-06-30T18:00:00"),
            sample_reservation(4, "Dan", "Pip", "2024-07-01T00:00:00"),
        ];
        let report = build_monthly_report(&reservations, datetime("2024-06-15T08:00:00"));

        assert_eq!(report.window.start, datetime("2024-06-01T00:00:00"));
        assert_eq!(report.window.end, datetime("2024-07-01T00:00:00"));
        let ids: Vec<_> = report.reservations.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(report.total_earnings, 500);
    }

    #[test]
    fn test_empty_window_totals_zero() {
        let reservations = vec![sample_reservation(1, "Alice", "Rex", "2023-01-02T10:00:00")];
        let report = build_monthly_report(&reservations, datetime("2024-06-15T08:00:00"));
        assert!(report.reservations.is_empty());
        assert_eq!(report.total_earnings, 0);
    }

    #[test]
    fn test_report_service_appends_summary() -> anyhow::Result<()> {
        let env = TestEnvironment::new()?;
        let service = ReportService::<CsvConnection>::new(Arc::new(env.connection.clone()));
        let reservations = vec![sample_reservation(1, "Alice", "Rex", "2024-06-04T09:00:00")];

        let report = service.monthly_report(&reservations, datetime("2024-06-20T12:00:00"))?;
        assert_eq!(report.total_earnings, 250);

        let log = fs::read_to_string(env.connection.report_file_path(ReportPeriod::Monthly))?;
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines[0], "Report from 6/1/2024 to 7/1/2024");
        assert_eq!(lines[1], "Total Earnings: $250.00");
        assert_eq!(lines.len(), 3);
        Ok(())
    }
}
