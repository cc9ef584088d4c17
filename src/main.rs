use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use cyberguard::config::Config;
use cyberguard::db::{HistoryStore, MemoryStore};
use cyberguard::history::AnalysisHistory;
use cyberguard::models::AnalysisResult;
use cyberguard::output::{export, terminal};
use cyberguard::target::{TargetError, TargetKind};

/// CyberGuard: security analysis for phone numbers, email addresses and URLs.
///
/// Verdicts come from a fixed set of local rules. Nothing is looked up over
/// the network.
#[derive(Parser)]
#[command(name = "cyberguard", version, about)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Keep history in memory only for this run
    #[arg(long, global = true)]
    no_persist: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a phone number, email address or URL
    Analyze {
        #[command(subcommand)]
        target: AnalyzeTarget,

        /// Override the simulated analysis time in milliseconds
        #[arg(long, global = true)]
        delay_ms: Option<u64>,
    },

    /// List past analyses, newest first
    History,

    /// Show a past analysis again
    Show {
        /// Analysis id (see `cyberguard history`)
        id: String,
    },

    /// Export an analysis as a JSON report (defaults to the latest)
    Export {
        /// Analysis id (see `cyberguard history`)
        id: Option<String>,

        /// Write the report here instead of the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Set up monitoring alerts for an analyzed target (defaults to the latest)
    Alert {
        /// Analysis id (see `cyberguard history`)
        id: Option<String>,
    },

    /// Show history store and verdict totals
    Status,
}

#[derive(Subcommand)]
enum AnalyzeTarget {
    /// Analyze a phone number
    Phone {
        number: String,

        /// Country the number is dialed from
        #[arg(long, default_value = "US")]
        country: String,

        /// Depth of the lookup (basic, comprehensive)
        #[arg(long, default_value = "basic")]
        analysis_type: String,
    },

    /// Analyze an email address
    Email {
        address: String,

        /// Skip the domain reputation check
        #[arg(long)]
        skip_domain_reputation: bool,

        /// Skip the data breach scan
        #[arg(long)]
        skip_breach_scan: bool,
    },

    /// Analyze a URL
    Url {
        url: String,

        /// Skip the malware scan
        #[arg(long)]
        skip_malware_scan: bool,

        /// Skip phishing detection
        #[arg(long)]
        skip_phishing_detection: bool,

        /// Skip the SSL certificate check
        #[arg(long)]
        skip_ssl_check: bool,
    },
}

impl AnalyzeTarget {
    fn kind(&self) -> TargetKind {
        match self {
            AnalyzeTarget::Phone { .. } => TargetKind::Phone,
            AnalyzeTarget::Email { .. } => TargetKind::Email,
            AnalyzeTarget::Url { .. } => TargetKind::Url,
        }
    }

    fn raw(&self) -> &str {
        match self {
            AnalyzeTarget::Phone { number, .. } => number,
            AnalyzeTarget::Email { address, .. } => address,
            AnalyzeTarget::Url { url, .. } => url,
        }
    }

    /// The scan options are accepted for compatibility with the web form.
    /// The rule engine does not consult them.
    fn log_options(&self) {
        match self {
            AnalyzeTarget::Phone {
                country,
                analysis_type,
                ..
            } => info!(country = %country, analysis_type = %analysis_type, "Phone options"),
            AnalyzeTarget::Email {
                skip_domain_reputation,
                skip_breach_scan,
                ..
            } => info!(
                domain_reputation = !skip_domain_reputation,
                breach_scan = !skip_breach_scan,
                "Email options"
            ),
            AnalyzeTarget::Url {
                skip_malware_scan,
                skip_phishing_detection,
                skip_ssl_check,
                ..
            } => info!(
                malware_scan = !skip_malware_scan,
                phishing_detection = !skip_phishing_detection,
                ssl_check = !skip_ssl_check,
                "URL options"
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "cyberguard=debug"
    } else {
        "cyberguard=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;
    if cli.no_persist {
        config.persist = false;
    }

    let store = open_store(&config)?;
    let mut history = cyberguard::db::load_history(store.as_ref())?;

    match cli.command {
        Commands::Analyze { target, delay_ms } => {
            let kind = target.kind();
            target.log_options();

            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or(config.analysis_delay);

            let outcome = cyberguard::pipeline::analysis::run(
                kind,
                target.raw(),
                delay,
                &mut history,
                store.as_ref(),
            )
            .await;
            let result = match outcome {
                Ok(result) => result,
                Err(e) => match e.downcast_ref::<TargetError>() {
                    Some(rejected) => {
                        terminal::notice(&rejected.to_string());
                        std::process::exit(1);
                    }
                    None => return Err(e),
                },
            };

            terminal::display_result(&result);
            println!();
            terminal::notice(&format!("Analysis completed for {}", result.target()));
        }

        Commands::History => {
            terminal::display_history(history.iter());
        }

        Commands::Show { id } => match history.view(&id) {
            Some(result) => {
                terminal::display_result(result);
                println!();
                terminal::notice(&format!("Viewing analysis for {}", result.target()));
            }
            None => terminal::notice(&format!("No analysis found with id {id}")),
        },

        Commands::Export { id, output } => {
            let Some(result) = select(&mut history, id.as_deref(), "No analysis results to export")
            else {
                return Ok(());
            };
            let path = export::write_report(result, &config.export_dir, output.as_deref())?;
            println!("Report written to: {}", path.display());
            terminal::notice("Report exported successfully");
        }

        Commands::Alert { id } => {
            let Some(result) =
                select(&mut history, id.as_deref(), "No analysis results for alert setup")
            else {
                return Ok(());
            };
            info!(id = %result.id(), target = %result.target(), "Alert requested");
            terminal::notice(&format!("Alert set for {} monitoring", result.target()));
        }

        Commands::Status => {
            cyberguard::status::show(store.as_ref(), &history)?;
        }
    }

    Ok(())
}

/// Pick the result an action applies to: the given id, or the current one.
/// Prints a notice and returns None when there is nothing to act on.
fn select<'a>(
    history: &'a mut AnalysisHistory,
    id: Option<&str>,
    empty_message: &str,
) -> Option<&'a AnalysisResult> {
    match id {
        Some(id) => {
            if history.view(id).is_none() {
                terminal::notice(&format!("No analysis found with id {id}"));
                return None;
            }
            history.current()
        }
        None => {
            if history.current().is_none() {
                terminal::notice(empty_message);
            }
            history.current()
        }
    }
}

/// Open the configured history store.
fn open_store(config: &Config) -> Result<Box<dyn HistoryStore>> {
    if !config.persist {
        info!("History persistence disabled");
        return Ok(Box::new(MemoryStore::new()));
    }
    open_persistent_store(config)
}

#[cfg(feature = "sqlite")]
fn open_persistent_store(config: &Config) -> Result<Box<dyn HistoryStore>> {
    cyberguard::db::open_sqlite(&config.db_path)
}

#[cfg(not(feature = "sqlite"))]
fn open_persistent_store(_config: &Config) -> Result<Box<dyn HistoryStore>> {
    tracing::warn!("Built without the 'sqlite' feature; history will not be persisted");
    Ok(Box::new(MemoryStore::new()))
}
