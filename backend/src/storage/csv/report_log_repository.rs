use log::info;
use shared::ReportPeriod;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use super::connection::CsvConnection;
use crate::domain::datetime::REPORT_DATE_FORMAT;
use crate::domain::errors::{BoardingError, BoardingResult};
use crate::domain::report_service::SalesReport;
use crate::storage::traits::ReportLogStorage;

const SEPARATOR_WIDTH: usize = 58;

/// Append-only sales report log (`weekly_sales_report.txt` / `monthly_sales_report.txt`)
#[derive(Debug, Clone)]
pub struct ReportLogRepository {
    connection: CsvConnection,
}

impl ReportLogRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// The three lines appended for one report run
    pub fn format_summary(report: &SalesReport) -> [String; 3] {
        [
            format!(
                "Report from {} to {}",
                report.window.start.format(REPORT_DATE_FORMAT),
                report.window.end.format(REPORT_DATE_FORMAT)
            ),
            format!("Total Earnings: ${}.00", report.total_earnings),
            "-".repeat(SEPARATOR_WIDTH),
        ]
    }
}

impl ReportLogStorage for ReportLogRepository {
    fn append_summary(&self, period: ReportPeriod, report: &SalesReport) -> BoardingResult<()> {
        let path = self.connection.report_file_path(period);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| BoardingError::persistence(&path, e))?;

        let mut writer = BufWriter::new(file);
        for line in Self::format_summary(report) {
            writeln!(writer, "{}", line).map_err(|e| BoardingError::persistence(&path, e))?;
        }
        writer.flush().map_err(|e| BoardingError::persistence(&path, e))?;

        info!("📄 Appended {} sales summary to {}", period, path.display());
        Ok(())
    }
}
