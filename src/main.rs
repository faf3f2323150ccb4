use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use leadform::client::SubmissionClient;
use leadform::config::Config;
use leadform::form::{FormDraft, Step, StepController, SubmitOutcome, Transition};
use leadform::logging;
use leadform::notify::{ToastLevel, ToastQueue};
use leadform::rest;

#[derive(Parser)]
#[command(name = "leadform")]
#[command(about = "Business Information Form intake server and client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the submit server
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Walk a saved draft through both form steps and submit it
    Submit {
        /// Draft JSON file with camelCase field names
        #[arg(short, long)]
        file: PathBuf,

        /// Server base URL (default: client.base_url)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Print the OpenAPI document
    Openapi,

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_server_mode = matches!(cli.command, Commands::Serve { .. });
    let logging_handle = logging::init_logging(&config, is_server_mode, cli.debug)?;

    match cli.command {
        Commands::Serve { port } => {
            cmd_serve(config, port).await?;
        }
        Commands::Submit { file, url } => {
            cmd_submit(&config, &file, url).await?;
        }
        Commands::Openapi => {
            println!("{}", rest::ApiDoc::json()?);
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    if let Some(log_path) = logging_handle.log_file_path {
        if log_path.exists() {
            eprintln!("Server log: {}", log_path.display());
        }
    }

    Ok(())
}

async fn cmd_serve(config: Config, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", config.server.host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.server.host, port))?;

    println!("Starting submit server...");
    println!("  Address: {}", addr);
    println!("  Endpoints:");
    println!("    POST /api/submit-form    Persist a form submission");
    println!("    GET  /api/health         Health check");
    println!("    GET  /api/status         Server status");
    println!("    GET  /api/openapi.json   OpenAPI document");
    println!();

    let state = rest::ApiState::from_config(config);
    rest::serve(state, addr).await
}

fn load_draft(path: &Path) -> Result<FormDraft> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft {}", path.display()))?;
    let mut draft: FormDraft = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse draft {}", path.display()))?;
    draft.normalize();
    Ok(draft)
}

async fn cmd_submit(config: &Config, file: &Path, url: Option<String>) -> Result<()> {
    let draft = load_draft(file)?;

    let mut client_config = config.client.clone();
    if let Some(url) = url {
        client_config.base_url = url;
    }
    let transport = Arc::new(SubmissionClient::from_config(&client_config)?);
    let toasts = Arc::new(ToastQueue::new());
    let mut controller = StepController::with_draft(draft, transport.clone(), toasts.clone());

    if let Transition::Blocked(missing) = controller.advance() {
        for field in &missing {
            eprintln!("  {}: required", field.label());
        }
        bail!("Contact details are incomplete ({} missing)", missing.len());
    }

    println!(
        "Step {}/{}: {}",
        controller.step().number(),
        Step::COUNT,
        controller.primary_action_label()
    );
    let outcome = controller.submit().await;

    for toast in toasts.drain() {
        match toast.level {
            ToastLevel::Success => println!("{}", toast.message),
            ToastLevel::Error => eprintln!("{}", toast.message),
        }
    }

    match outcome {
        SubmitOutcome::Delivered(delivery) if delivery.is_created() => {
            println!("Submitted to {}", transport.endpoint());
            Ok(())
        }
        SubmitOutcome::Invalid => {
            for (field, message) in controller.errors() {
                eprintln!("  {}: {}", field.label(), message);
            }
            bail!("Draft failed validation");
        }
        SubmitOutcome::Delivered(delivery) => bail!("Submission not stored: {:?}", delivery),
        other => bail!("Unexpected submit outcome: {:?}", other),
    }
}
