use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use sumai_common::{logger, AppConfig};
use sumai_format::{Length, Presentation, Purpose, Tone};
use sumai_llm::{build_model, SummaryModel};
use sumai_server::{validate_text, SummaryPipeline};
use tracing::{error, info, warn};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "sumai")]
#[command(about = "SumAI - styled text summarization API", long_about = None)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON); environment variables are used otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize a file once and print the result
    Summarize(SummarizeArgs),
}

#[derive(Args)]
struct SummarizeArgs {
    /// Input text file, or `-` for stdin
    #[arg(long, short)]
    file: PathBuf,

    /// casual, formal, professional, friendly
    #[arg(long, default_value = "casual")]
    tone: String,

    /// short, medium, detailed
    #[arg(long, default_value = "medium")]
    length: String,

    /// tldr, keypoints, explainer
    #[arg(long, default_value = "tldr")]
    purpose: String,
}

impl SummarizeArgs {
    fn presentation(&self) -> Presentation {
        Presentation::new(
            Tone::from(self.tone.as_str()),
            Length::from(self.length.as_str()),
            Purpose::from(self.purpose.as_str()),
        )
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

fn log_level(config: &AppConfig) -> String {
    logger::parse_log_level(&config.log_level)
        .to_string()
        .to_lowercase()
}

/// Build the model client and probe it once
///
/// Failure is logged, not fatal: the server still starts and reports the
/// model as not loaded.
async fn load_model(config: &AppConfig) -> Option<Arc<dyn SummaryModel>> {
    info!("Loading summarization model...");

    let model = match build_model(config) {
        Ok(model) => model,
        Err(e) => {
            error!("Failed to load model: {}", e);
            return None;
        }
    };

    match model.check_ready().await {
        Ok(true) => {
            info!("Model loaded successfully: {}", model.model_name());
            Some(model)
        }
        Ok(false) => {
            error!(
                "Model {} is not available on {}",
                model.model_name(),
                config.model_base_url
            );
            None
        }
        Err(e) => {
            error!("Failed to load model: {}", e);
            None
        }
    }
}

async fn serve(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config.validate()?;

    logger::setup_logging(&config.log_dir, &log_level(&config))?;

    info!("SumAI starting...");
    info!("  Bind: {}", config.server_bind_address());
    info!("  Backend: {} ({})", config.model_backend, config.model_base_url);
    info!("  Model: {}", config.model_name);

    let model = load_model(&config).await;
    if model.is_none() {
        warn!("Serving without a model; /summarize will fail until restart");
    }

    println!("Server listening on http://{}", config.server_bind_address());

    sumai_server::start_server(config, model).await?;
    Ok(())
}

async fn summarize_once(config: AppConfig, args: SummarizeArgs) -> Result<()> {
    logger::setup_console_logging(&log_level(&config))?;

    let text = if args.file.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?
    };

    validate_text(&text, config.max_input_chars)?;

    let pipeline = SummaryPipeline::new(build_model(&config)?);
    let summary = pipeline.run(&text, args.presentation()).await?;

    println!("{}", summary);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(config, host, port).await,
        Some(Commands::Summarize(args)) => summarize_once(config, args).await,
        None => serve(config, None, None).await,
    }
}
