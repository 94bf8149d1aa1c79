//! Terminal rendition of the dashboard: loads a record set, applies the
//! requested criteria, and prints one screen per invocation.

use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use careboard::alerts::AlertCard;
use careboard::analytics::AnalyticsData;
use careboard::config;
use careboard::models::{AlertFilter, AlertPriority, AlertStatus, PatientFilter, RiskLevel};
use careboard::overview::OverviewData;
use careboard::roster::{PatientCard, PatientDetail};
use careboard::{Dashboard, DataError, RecordStore};

#[derive(Parser)]
#[command(name = config::APP_NAME, version, about = "Clinical risk dashboard, terminal edition")]
struct Cli {
    /// Load records from a JSON file instead of the bundled sample set.
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Population stats, model metrics, high-risk patients, recent alerts
    Overview,
    /// Patient roster, optionally filtered
    Patients {
        /// Case-insensitive search across names and conditions
        #[arg(long)]
        search: Option<String>,
        /// Exact risk level (Low, Medium, High)
        #[arg(long, value_parser = RiskLevel::from_str)]
        risk: Option<RiskLevel>,
        /// Substring match against the primary condition
        #[arg(long)]
        condition: Option<String>,
    },
    /// Alert queue, optionally filtered
    Alerts {
        /// Exact priority (Critical, High, Medium, Low)
        #[arg(long, value_parser = AlertPriority::from_str)]
        priority: Option<AlertPriority>,
        /// Exact status (Unacknowledged, Acknowledged, "In Progress", Completed)
        #[arg(long, value_parser = AlertStatus::from_str)]
        status: Option<AlertStatus>,
    },
    /// Full profile for one patient
    Patient { id: String },
    /// Advance an alert one lifecycle step
    Ack { id: String },
    /// Trigger a named action on an alert
    Action { id: String, action: String },
    /// Quick search across patient names and conditions
    Search { term: String },
    /// Risk distribution and trend tables
    Analytics,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("Careboard starting v{}", config::APP_VERSION);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DataError> {
    let store = match &cli.data {
        Some(path) => RecordStore::from_json_file(path)?,
        None => RecordStore::sample()?,
    };
    let mut board = Dashboard::new(store);

    match cli.command {
        Command::Overview => print_overview(&board.overview()),
        Command::Patients {
            search,
            risk,
            condition,
        } => {
            let cards = board.set_patient_filter(PatientFilter {
                search,
                risk_level: risk,
                condition,
            });
            print_patients(&cards);
        }
        Command::Alerts { priority, status } => {
            let cards = board.set_alert_filter(AlertFilter { priority, status });
            print_alerts(&cards);
        }
        Command::Patient { id } => match board.patient_detail(&id) {
            Some(detail) => print_detail(&detail),
            None => println!("No patient with id {id}."),
        },
        Command::Ack { id } => {
            let previous = board.store().alert(&id).map(|a| a.status);
            match (previous, board.acknowledge_alert(&id)) {
                (Some(from), Some(to)) => println!("{id}: {} -> {}", from.as_str(), to.as_str()),
                _ => println!("No alert with id {id}; nothing to do."),
            }
        }
        Command::Action { id, action } => match board.trigger_alert_action(&id, &action) {
            Some(note) => println!("[{}] {}", note.severity.as_str(), note.message),
            None => println!("No alert with id {id}; nothing to do."),
        },
        Command::Search { term } => match board.quick_search(&term) {
            Some(cards) => print_patients(&cards),
            None => println!("Empty search term; criteria unchanged."),
        },
        Command::Analytics => print_analytics(&board.analytics()),
    }

    Ok(())
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

fn print_overview(data: &OverviewData) {
    let pop = &data.population;
    println!("Population");
    println!(
        "  {} patients monitored ({} high / {} medium / {} low risk)",
        pop.total_patients, pop.high_risk, pop.medium_risk, pop.low_risk
    );
    println!(
        "  {} active alerts, {} interventions this week",
        pop.active_alerts, pop.interventions_this_week
    );

    let model = &data.model;
    println!();
    println!(
        "Model (updated {})",
        config::format_timestamp(model.last_updated)
    );
    println!(
        "  AUROC {:.2}  AUPRC {:.2}  accuracy {:.2}  precision {:.2}  recall {:.2}",
        model.auroc, model.auprc, model.accuracy, model.precision, model.recall
    );
    println!(
        "  F1 {:.2}  calibration {:.2}",
        model.f1_score, model.calibration_score
    );

    println!();
    println!("High-risk patients");
    for card in &data.high_risk {
        println!(
            "  {}  {:<18} {:>4}  {}",
            card.id,
            card.name,
            percent(card.risk_score),
            card.primary_condition
        );
    }

    println!();
    println!("Recent alerts");
    for card in &data.recent_alerts {
        println!(
            "  {}  [{}] {}  {}  ({})",
            card.id,
            card.priority.as_str(),
            card.alert_type,
            card.patient_name.as_deref().unwrap_or("unknown patient"),
            config::format_timestamp(card.timestamp)
        );
    }
}

fn print_patients(cards: &[PatientCard]) {
    if cards.is_empty() {
        println!("No patients match the current criteria.");
        return;
    }
    for card in cards {
        println!(
            "{}  {:<18} {:>3}y {:<7} {:>4} risk ({})  {}",
            card.id,
            card.name,
            card.age,
            card.gender,
            percent(card.risk_score),
            card.risk_level.as_str(),
            card.primary_condition
        );
        println!(
            "      last visit {}, adherence {}",
            config::format_date(card.last_visit),
            percent(card.medication_adherence)
        );
        if !card.risk_factors.is_empty() {
            println!("      factors: {}", card.risk_factors.join(", "));
        }
    }
}

fn print_alerts(cards: &[AlertCard]) {
    if cards.is_empty() {
        println!("No alerts match the current criteria.");
        return;
    }
    for card in cards {
        println!(
            "{}  [{}] {} ({})",
            card.id,
            card.priority.as_str(),
            card.alert_type,
            card.status.as_str()
        );
        println!(
            "      {}  {}",
            card.patient_name.as_deref().unwrap_or("unknown patient"),
            config::format_timestamp(card.timestamp)
        );
        println!("      {}", card.message);
        if !card.actions.is_empty() {
            println!(
                "      actions: {} | next: {}",
                card.actions.join(", "),
                card.action_label
            );
        }
    }
}

fn vital(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.0}{unit}"),
        None => "-".to_string(),
    }
}

fn print_detail(detail: &PatientDetail) {
    println!(
        "{} ({}), {}y {}",
        detail.name, detail.id, detail.age, detail.gender
    );
    println!(
        "  {} risk {} ({})",
        detail.primary_condition,
        percent(detail.risk_score),
        detail.risk_level.as_str()
    );
    let vitals = &detail.latest_vitals;
    println!(
        "  vitals: BP {}  glucose {}  O2 {}  HR {}",
        vital(vitals.blood_pressure, ""),
        vital(vitals.glucose, " mg/dL"),
        vital(vitals.oxygen_sat, "%"),
        vital(vitals.heart_rate, " bpm")
    );
    if !detail.risk_factors.is_empty() {
        println!("  factors: {}", detail.risk_factors.join(", "));
    }
    println!(
        "  adherence {}, last visit {}, last prediction {}",
        percent(detail.medication_adherence),
        config::format_date(detail.last_visit),
        config::format_date(detail.last_prediction)
    );
    if !detail.interventions.is_empty() {
        println!("  interventions: {}", detail.interventions.join(", "));
    }
}

fn print_analytics(data: &AnalyticsData) {
    let dist = &data.distribution;
    println!("Risk distribution");
    println!(
        "  low {}  medium {}  high {}",
        dist.low, dist.medium, dist.high
    );

    println!();
    println!("Monthly risk counts");
    for point in &data.monthly_trend {
        println!(
            "  {:<4} high {:>3}  medium {:>3}  low {:>3}",
            point.month, point.high, point.medium, point.low
        );
    }

    println!();
    println!("Intervention success rates");
    for outcome in &data.interventions {
        println!("  {:<16} {:>3}%", outcome.label, outcome.success_rate);
    }

    println!();
    println!("Model metrics by week");
    for point in &data.model_trend {
        println!(
            "  {:<7} AUROC {:.2}  accuracy {:.2}  precision {:.2}",
            point.week, point.auroc, point.accuracy, point.precision
        );
    }
}
