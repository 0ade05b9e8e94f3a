use anyhow::Result;
use clap::{Parser, Subcommand};
use motionforge_common::{logger, AppConfig};
use motionforge_media::{FfmpegTool, VideoTool};
use std::path::PathBuf;

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
            return;
        }
    }

    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "motionforge")]
#[command(about = "MotionForge - cut an uploaded video into short clips", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

/// CLI arguments win over the environment
fn apply_overrides(mut config: AppConfig, host: Option<String>, port: Option<u16>) -> AppConfig {
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }
    config
}

async fn serve(config: AppConfig) -> Result<()> {
    config.validate()?;
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("MotionForge starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Uploads: {}", config.upload_dir.display());
    tracing::info!("  Clips: {}", config.clips_dir.display());
    tracing::info!("  Max clips per upload: {}", config.max_clips);

    if let Err(e) = FfmpegTool::from_config(&config).check_available().await {
        tracing::warn!("ffmpeg/ffprobe not usable, clip generation will fail: {}", e);
    }

    println!("Server listening on http://{}", config.server_bind_address());

    motionforge_server::start_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let config = AppConfig::from_env()?;
    match cli.command {
        Some(Commands::Serve { host, port }) => serve(apply_overrides(config, host, port)).await,
        None => serve(config).await,
    }
}
