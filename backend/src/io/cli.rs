//! Non-interactive command-line driver.
//!
//! Every subcommand opens the data directory, runs one core operation and
//! renders the result as a table or as JSON. Deleting requires `--yes`; the
//! confirmation step belongs here, not in the core.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDateTime};
use clap::{ArgGroup, Args, Parser, Subcommand};
use log::debug;
use serde::Serialize;
use shared::{CreateReservationRequest, ReservationDto, SalesReportDto, UpdateReservationRequest};
use std::io::Write;
use std::path::PathBuf;

use super::mappers::{ReservationMapper, SalesReportMapper};
use crate::config::resolve_data_directory;
use crate::domain::datetime::{parse_timestamp, REPORT_DATE_FORMAT};
use crate::domain::models::{Reservation, ReservationId};
use crate::Backend;

#[derive(Debug, Parser)]
#[command(name = "pet-boarding", version, about = "Pet boarding reservations and sales reports")]
pub struct Cli {
    /// Data directory (defaults to $PET_BOARDING_DATA_DIR, then the current directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every reservation
    List,
    /// Show the reservations of one owner (case-insensitive)
    Find { owner: String },
    /// Book a new stay
    Add(AddArgs),
    /// Change fields of a reservation; omitted fields keep their value
    Update(UpdateArgs),
    /// Remove a reservation
    Delete(DeleteArgs),
    /// Earnings for the week (Monday to Sunday) containing --date
    WeeklyReport(ReportArgs),
    /// Earnings for the month containing --date
    MonthlyReport(ReportArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long = "type")]
    pub pet_type: String,
    #[arg(long)]
    pub name: String,
    /// Age in months
    #[arg(long)]
    pub age: String,
    #[arg(long)]
    pub owner: String,
    #[arg(long, default_value = "")]
    pub contact: String,
    #[arg(long, default_value = "no")]
    pub grooming: String,
    #[arg(long = "feeding", default_value = "no")]
    pub special_feeding: String,
    #[arg(long = "medical", default_value = "no")]
    pub medical_services: String,
    /// Drop-off time, e.g. "06-03-2024 09:00 AM" or 2024-06-03T09:00
    #[arg(long)]
    pub start: String,
    /// Pick-up time
    #[arg(long)]
    pub end: String,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["owner", "id"])))]
pub struct UpdateArgs {
    /// Owner name; the earliest matching reservation is updated
    pub owner: Option<String>,
    /// Reservation id as shown by `list`
    #[arg(long)]
    pub id: Option<ReservationId>,
    #[arg(long = "type")]
    pub pet_type: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub age: Option<String>,
    #[arg(long)]
    pub new_owner: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
    #[arg(long)]
    pub grooming: Option<String>,
    #[arg(long = "feeding")]
    pub special_feeding: Option<String>,
    #[arg(long = "medical")]
    pub medical_services: Option<String>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["owner", "id"])))]
pub struct DeleteArgs {
    /// Owner name; the earliest matching reservation is deleted
    pub owner: Option<String>,
    #[arg(long)]
    pub id: Option<ReservationId>,
    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Reference date (defaults to now)
    #[arg(long)]
    pub date: Option<String>,
}

impl From<AddArgs> for CreateReservationRequest {
    fn from(args: AddArgs) -> Self {
        CreateReservationRequest {
            pet_type: args.pet_type,
            pet_name: args.name,
            pet_age_months: args.age,
            owner_name: args.owner,
            owner_contact: args.contact,
            grooming: args.grooming,
            special_feeding: args.special_feeding,
            medical_services: args.medical_services,
            start_time: args.start,
            end_time: args.end,
        }
    }
}

impl UpdateArgs {
    fn to_request(&self) -> UpdateReservationRequest {
        UpdateReservationRequest {
            pet_type: self.pet_type.clone(),
            pet_name: self.name.clone(),
            pet_age_months: self.age.clone(),
            owner_name: self.new_owner.clone(),
            owner_contact: self.contact.clone(),
            grooming: self.grooming.clone(),
            special_feeding: self.special_feeding.clone(),
            medical_services: self.medical_services.clone(),
            start_time: self.start.clone(),
            end_time: self.end.clone(),
        }
    }
}

/// Run the parsed command, writing output to stdout
pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let data_directory = resolve_data_directory(cli.data_dir)?;
    let mut backend = Backend::open(&data_directory)?;
    let json = cli.json;
    debug!("Running {:?} in {}", cli.command, data_directory.display());

    match cli.command {
        Command::List => {
            let reservations = ReservationMapper::to_dto_list(backend.reservation_service.list());
            render_reservations(out, &reservations, json)?;
        }
        Command::Find { owner } => {
            let matches = backend.reservation_service.find_by_owner(&owner);
            if matches.is_empty() && !json {
                writeln!(out, "No reservations found for this owner.")?;
            } else {
                render_reservations(out, &ReservationMapper::to_dto_list(matches), json)?;
            }
        }
        Command::Add(args) => {
            let command = ReservationMapper::create_request_to_command(args.into());
            let created = backend.reservation_service.create(&command)?;
            render_single(out, "Reservation made successfully!", &created, json)?;
        }
        Command::Update(args) => {
            let command = ReservationMapper::update_request_to_command(args.to_request());
            if command.is_empty() {
                return Err(anyhow!("Nothing to update: supply at least one field"));
            }
            let service = &mut backend.reservation_service;
            let updated = match (args.id, args.owner.as_deref()) {
                (Some(id), _) => service.update_by_id(id, &command)?,
                (None, Some(owner)) => service.update_by_owner(owner, &command)?,
                (None, None) => return Err(anyhow!("Either an owner name or --id is required")),
            };
            render_single(out, "Reservation updated successfully!", &updated, json)?;
        }
        Command::Delete(args) => {
            let service = &mut backend.reservation_service;
            let target = match (args.id, args.owner.as_deref()) {
                (Some(id), _) => service.get(id).cloned(),
                (None, Some(owner)) => service.find_first_by_owner(owner).cloned(),
                (None, None) => None,
            };
            let Some(target) = target else {
                return Err(anyhow!("No reservation found for this owner."));
            };

            if !args.yes {
                render_single(out, "Would delete:", &target, json)?;
                if !json {
                    writeln!(out, "Deletion cancelled (pass --yes to confirm).")?;
                }
                return Ok(());
            }

            let removed = service.delete_by_id(target.id)?;
            render_single(out, "Reservation deleted successfully!", &removed, json)?;
        }
        Command::WeeklyReport(args) => {
            let reference = reference_instant(args.date.as_deref())?;
            let report = backend
                .report_service
                .weekly_report(backend.reservation_service.list(), reference)?;
            let log_path = backend.connection.report_file_path(report.period);
            render_report(out, &SalesReportMapper::to_dto(&report), json)?;
            if !json {
                writeln!(out, "Sales report saved to {}", log_path.display())?;
            }
        }
        Command::MonthlyReport(args) => {
            let reference = reference_instant(args.date.as_deref())?;
            let report = backend
                .report_service
                .monthly_report(backend.reservation_service.list(), reference)?;
            let log_path = backend.connection.report_file_path(report.period);
            render_report(out, &SalesReportMapper::to_dto(&report), json)?;
            if !json {
                writeln!(out, "Sales report saved to {}", log_path.display())?;
            }
        }
    }
    Ok(())
}

fn reference_instant(date: Option<&str>) -> Result<NaiveDateTime> {
    match date {
        Some(text) => parse_timestamp(text).ok_or_else(|| anyhow!("Invalid --date '{}'", text)),
        None => Ok(Local::now().naive_local()),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn render_single<W: Write>(out: &mut W, headline: &str, reservation: &Reservation, json: bool) -> Result<()> {
    let dto = ReservationMapper::to_dto(reservation);
    if json {
        return write_json(out, &dto);
    }
    writeln!(out, "{}", headline)?;
    write_table(out, std::slice::from_ref(&dto))
}

fn render_reservations<W: Write>(out: &mut W, reservations: &[ReservationDto], json: bool) -> Result<()> {
    if json {
        return write_json(out, reservations);
    }
    write_table(out, reservations)
}

fn render_report<W: Write>(out: &mut W, report: &SalesReportDto, json: bool) -> Result<()> {
    if json {
        return write_json(out, report);
    }

    let start = parse_timestamp(&report.window_start)
        .map(|t| t.format(REPORT_DATE_FORMAT).to_string())
        .unwrap_or_else(|| report.window_start.clone());
    let end = parse_timestamp(&report.window_end)
        .map(|t| t.format(REPORT_DATE_FORMAT).to_string())
        .unwrap_or_else(|| report.window_end.clone());

    let label = match report.period {
        shared::ReportPeriod::Weekly => "week",
        shared::ReportPeriod::Monthly => "month",
    };
    writeln!(out, "Sales report from {} to {}", start, end)?;
    write_table(out, &report.reservations)?;
    writeln!(out, "Total Earnings for the {}: ${}.00", label, report.total_earnings)?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, reservations: &[ReservationDto]) -> Result<()> {
    let header = format!(
        "| {:<4} | {:<10} | {:<10} | {:<5} | {:<15} | {:<15} | {:<8} | {:<8} | {:<8} | {:<19} | {:<19} | {:>5} |",
        "ID", "Pet Name", "Pet Type", "Age", "Owner Name", "Owner Contact",
        "Grooming", "Feeding", "Medical", "Start Time", "End Time", "Fee"
    );
    let rule = "-".repeat(header.chars().count());

    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", header)?;
    writeln!(out, "{}", rule)?;
    for r in reservations {
        writeln!(
            out,
            "| {:<4} | {:<10} | {:<10} | {:<5} | {:<15} | {:<15} | {:<8} | {:<8} | {:<8} | {:<19} | {:<19} | {:>5} |",
            r.id, r.pet_name, r.pet_type, r.pet_age_months, r.owner_name, r.owner_contact,
            r.grooming, r.special_feeding, r.medical_services, r.start_time, r.end_time, r.total_fee
        )?;
    }
    writeln!(out, "{}", rule)?;
    Ok(())
}
