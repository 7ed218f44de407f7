use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use promaster::{
    Advisor, AppConfig, GeminiClient, ViewController,
    config::load_config,
    core::{
        MaterialRepository, ReportFormat, export_report,
        locale::{format_quantity, format_rupiah, today},
    },
    session_from_config,
};

#[derive(Parser)]
#[command(name = "promaster")]
#[command(about = "Track construction projects, material stock and budgets")]
struct Cli {
    /// Path to a promaster.toml configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start without the demo records
    #[arg(long)]
    empty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print dashboard totals and the status breakdown
    Summary,
    /// List material stock
    Inventory,
    /// Export the project report
    Report {
        #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
        format: ReportFormat,
        /// Output file or directory (defaults to the current directory)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Ask the AI consultant about the current records
    Advise {
        #[arg(value_name = "QUESTION")]
        query: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if args.empty {
        config.seed_demo_data = false;
    }
    let session = session_from_config(&config);

    match args.command {
        None => launch(config, session),
        Some(Command::Summary) => {
            print_summary(&session);
            Ok(())
        }
        Some(Command::Inventory) => {
            print_inventory(&session);
            Ok(())
        }
        Some(Command::Report { format, out }) => {
            let report = session.report(today());
            let target = out.unwrap_or_else(|| PathBuf::from("."));
            let path = export_report(&report, &target, &config.report.file_name, format)?;
            println!("Report written to {}", path.display());
            Ok(())
        }
        Some(Command::Advise { query }) => advise(&config, session, &query),
    }
}

#[cfg(feature = "gui")]
fn launch(config: AppConfig, session: ViewController) -> anyhow::Result<()> {
    promaster::gui::run(config, session)
}

#[cfg(not(feature = "gui"))]
fn launch(_config: AppConfig, session: ViewController) -> anyhow::Result<()> {
    tracing::info!("built without the gui feature, printing the dashboard instead");
    print_summary(&session);
    Ok(())
}

fn print_summary(session: &ViewController) {
    let dashboard = session.dashboard();
    let totals = dashboard.totals;

    println!("=== Dashboard Overview ===");
    println!("Total budget:      {}", format_rupiah(totals.total_budget));
    println!("Total spent:       {}", format_rupiah(totals.total_spent));
    if let Some(utilisation) = totals.utilisation() {
        println!("Utilisation:       {:.1}%", utilisation);
    }
    println!("Active projects:   {}", totals.active_count);
    println!("Completed:         {}", totals.completed_count);
    println!("Pending:           {}", totals.pending_count);

    println!("\n=== Project Status ({} total) ===", dashboard.project_count);
    for entry in &dashboard.status_distribution {
        println!("  {:<10} {}", entry.status.label(), entry.count);
    }

    if !dashboard.budget_series.is_empty() {
        println!("\n=== Budget vs Spent ===");
        for point in &dashboard.budget_series {
            println!(
                "  {:<18} {:>22} {:>22}",
                point.label,
                format_rupiah(point.budget),
                format_rupiah(point.spent)
            );
        }
    }
}

fn print_inventory(session: &ViewController) {
    let materials = session.store().materials();
    let summary = session.inventory();

    println!("=== Material Stock ===");
    if materials.is_empty() {
        println!("No materials recorded.");
        return;
    }
    for material in materials {
        println!(
            "  {} [{}]: {} {} @ {}",
            material.name,
            material.category,
            format_quantity(material.quantity),
            material.unit,
            format_rupiah(material.unit_price)
        );
    }
    println!(
        "\n{} items, stock value {}",
        summary.item_count,
        format_rupiah(summary.total_value)
    );
}

fn advise(config: &AppConfig, mut session: ViewController, query: &str) -> anyhow::Result<()> {
    let advisor = Advisor::new(GeminiClient::new(&config.advisory)?);
    let Some(request) = session.begin_advisory(query) else {
        anyhow::bail!("an advisory request is already pending");
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(advisor.advise(&request.context, &request.query));
    println!("{}", outcome.text());
    session.complete_advisory(request.ticket, outcome);
    Ok(())
}
