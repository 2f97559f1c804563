//! seatbill - billing quotes and form submission from the command line

use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use seatbill::config::Config;
use seatbill::services::billing::{
    BillingClient, BillingEndpoint, BillingForm, PaymentToken, SubmissionOutcome, Submitter,
};
use seatbill::services::pricing::{
    LicenseMode, QuoteEngine, Schedule, compute_plan_parameters, select_panel,
};
use seatbill::utils::LoggingUtils;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "seatbill", version, about = "Per-seat billing quotes and upgrade submissions")]
struct Cli {
    /// YAML configuration file; environment variables are used when absent
    #[arg(short, long, env = "SEATBILL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the prices and charge the upgrade page would display
    Quote {
        #[arg(long)]
        schedule: Option<Schedule>,
        #[arg(long)]
        license_management: Option<LicenseMode>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the plan parameters an upgrade right now would be billed with
    Plan {
        #[arg(long)]
        schedule: Option<Schedule>,
        #[arg(long)]
        automanage: bool,
    },
    /// Post one billing form
    Submit {
        #[arg(long, value_enum, default_value_t = EndpointArg::Upgrade)]
        endpoint: EndpointArg,
        /// Form name, e.g. autopay, invoice, cardchange
        #[arg(long)]
        form: String,
        /// Form field as name=value; repeat for each field
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        /// Payment token id from the payment widget
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EndpointArg {
    Upgrade,
    ChangeSource,
}

impl From<EndpointArg> for BillingEndpoint {
    fn from(arg: EndpointArg) -> Self {
        match arg {
            EndpointArg::Upgrade => BillingEndpoint::Upgrade,
            EndpointArg::ChangeSource => BillingEndpoint::ChangeSource,
        }
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    LoggingUtils::init_logger(config.logging())?;

    match cli.command {
        Command::Quote {
            schedule,
            license_management,
            json,
        } => {
            let engine = QuoteEngine::new(config.page())?;
            let schedule = schedule.unwrap_or(config.page().schedule);
            let mode = license_management.unwrap_or(config.page().license_management);

            let display = engine.price_display();
            let charge = engine.charge_for(&engine.selection(mode, schedule));
            let panel = select_panel(mode);

            if json {
                let out = serde_json::json!({
                    "prices": display,
                    "schedule": schedule,
                    "license_management": panel.active(),
                    "seat_count": engine.seat_count(),
                    "charged_amount": charge.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (id, text) in display.targets() {
                    println!("{:<32} ${}", id, text);
                }
                println!(
                    "{:<32} ${} ({} seats, {}, {})",
                    "charged_amount",
                    charge,
                    engine.seat_count(),
                    schedule,
                    panel.active()
                );
            }
        }
        Command::Plan {
            schedule,
            automanage,
        } => {
            let schedule = schedule.unwrap_or(config.page().schedule);
            let discount = (config.page().percent_off > 0.0).then_some(config.page().percent_off);
            let plan = compute_plan_parameters(automanage, schedule, discount, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Submit {
            endpoint,
            form,
            fields,
            token,
        } => {
            let form = fields
                .into_iter()
                .fold(BillingForm::new(form), |form, (name, value)| {
                    form.field(name, value)
                });
            let token = token.map(PaymentToken::new);
            let client = BillingClient::new(config.server())
                .context("Failed to build billing client")?;

            info!(form = form.name(), "Submitting from command line");
            match client.submit(endpoint.into(), &form, token.as_ref()).await? {
                SubmissionOutcome::Success => println!("Billing change applied"),
                SubmissionOutcome::Rejected { msg } => bail!("{}", msg),
            }
        }
    }

    Ok(())
}
