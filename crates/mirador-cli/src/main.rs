//! Mirador CLI: load dashboards, connect to the backend, run the UI.
//!
//! Any startup failure (missing file, invalid schema, unconfigured
//! backend, unknown theme) prints a message and exits with code 1;
//! a normal quit exits 0. After startup nothing is allowed to abort the
//! process: runtime failures degrade to error markers inside the UI.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use mirador_core::{CarouselController, DashboardView, Theme};
use mirador_prometheus::PrometheusClient;
use mirador_terminal::App;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prometheus dashboards in your terminal.
#[derive(Parser)]
#[command(name = "mirador", version, about, long_about = None)]
struct Cli {
    /// Dashboard YAML files, in carousel order.
    #[arg(value_name = "CONFIG", required = true)]
    config: Vec<PathBuf>,

    /// Prometheus server URL (falls back to PROMETHEUS_URL / PROM_URL).
    #[arg(short, long)]
    url: Option<String>,

    /// Request timeout in seconds (falls back to PROMETHEUS_TIMEOUT, default 10).
    #[arg(long)]
    timeout: Option<u64>,

    /// Color theme: tokyo-night, dracula, nord, solarized-light.
    #[arg(short, long, default_value = "tokyo-night")]
    theme: String,

    /// Write structured logs to this file (the TUI itself stays silent).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The guard must outlive the run so buffered log lines are flushed.
    let _log_guard = match init_logging(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let configs = mirador_yaml::load_dashboards(&cli.config)?;

    let theme = Theme::by_name(&cli.theme).ok_or_else(|| {
        format!(
            "unknown theme '{}'; available: {}",
            cli.theme,
            Theme::preset_names().join(", ")
        )
    })?;

    let client = PrometheusClient::from_env(cli.url.as_deref(), cli.timeout)?;
    info!(
        backend = client.base_url(),
        dashboards = configs.len(),
        theme = %theme.name,
        "starting mirador"
    );

    let views: Vec<DashboardView> = configs.into_iter().map(DashboardView::new).collect();
    let carousel = CarouselController::new(views, Instant::now())?;

    App::new(carousel, theme, Box::new(client)).run()?;
    Ok(())
}

/// Set up file logging when requested; without a log file, tracing events
/// are simply dropped so they can never corrupt the alternate screen.
fn init_logging(
    log_file: Option<&std::path::Path>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>, Box<dyn std::error::Error>> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("invalid log file path: {}", path.display()))?;
    let appender = tracing_appender::rolling::never(
        directory.unwrap_or_else(|| std::path::Path::new(".")),
        file_name,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}
