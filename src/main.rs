use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use paystub_engine::api::{AppState, create_router};
use paystub_engine::calculation::calculate;
use paystub_engine::config::ConfigLoader;
use paystub_engine::document::{available_renderer, generate_stub, load_logo};
use paystub_engine::error::EngineError;
use paystub_engine::logging;
use paystub_engine::models::FormValues;

/// Pay stub calculator and generator.
#[derive(Debug, Parser)]
#[command(name = "paystub", version, about)]
struct Cli {
    /// YAML configuration file; built-in defaults are used when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print gross pay, total deductions and net pay for a form.
    Preview {
        /// JSON file with the form values.
        #[arg(long)]
        form: PathBuf,
    },
    /// Render a pay stub document for a form.
    Render {
        /// JSON file with the form values.
        #[arg(long)]
        form: PathBuf,
        /// Output directory; defaults to the configured one.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip the employer logo.
        #[arg(long)]
        no_logo: bool,
    },
    /// Serve the HTTP API.
    Serve {
        /// Bind address; defaults to the configured one.
        #[arg(long)]
        bind: Option<String>,
    },
}

fn read_form(path: &Path) -> Result<FormValues, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read form '{}': {}", path.display(), e))?;
    let form = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse form '{}': {}", path.display(), e))?;
    Ok(form)
}

async fn run(cli: Cli, config: ConfigLoader) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "Using configuration file");
    }

    match cli.command {
        Command::Preview { form } => {
            let form = read_form(&form)?;
            let preview = calculate(&form.pay_inputs()).preview();
            println!("Gross Pay:        {}", preview.gross);
            println!("Total Deductions: {}", preview.total_deductions);
            println!("Net Pay:          {}", preview.net_pay);
        }
        Command::Render { form, out, no_logo } => {
            let form = read_form(&form)?;
            let mut renderer = available_renderer();
            let logo = if renderer.is_some() && !no_logo {
                load_logo(config.logo_path())
            } else {
                None
            };

            let stub = generate_stub(
                &form,
                logo.as_ref(),
                renderer.as_deref_mut(),
                &config.builder(),
            )?;
            let out_dir = out.unwrap_or_else(|| config.output_dir().to_path_buf());
            let path = stub.save_to(&out_dir)?;
            println!("Saved {}", path.display());
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.bind_address().to_string());
            let listener = tokio::net::TcpListener::bind(&bind).await?;
            tracing::info!(bind = %bind, "Pay stub API listening");
            axum::serve(listener, create_router(AppState::new(config))).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => match ConfigLoader::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        },
        None => ConfigLoader::default(),
    };
    logging::init_logger(config.logging(), cli.verbose);

    if let Err(err) = run(cli, config).await {
        tracing::error!(error = %err, "Command failed");
        match err.downcast_ref::<EngineError>() {
            Some(EngineError::MissingRenderingDependency { dependency }) => {
                eprintln!(
                    "Cannot generate the pay stub: the document renderer ({}) is not available. \
                     Rebuild with the `pdf` feature enabled.",
                    dependency
                );
            }
            _ => eprintln!("{}", err),
        }
        std::process::exit(1);
    }
}
