use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ichabod::api;
use ichabod::assets::{AssetCategory, AssetLoader};
use ichabod::models::{AppConfig, DEFAULT_BIND_ADDR};
use ichabod::server;
use ichabod::services::{load_shadow_mask, process_bytes};
use pixel_kernels::{Command, CommandArgs, Engine};

#[derive(Parser)]
#[command(name = "ichabod")]
#[command(about = "Ichabod - image transform server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Run one command on an image file and write the PNG result
    Process {
        /// Command name (see `ichabod commands`)
        #[arg(short, long)]
        command: String,

        /// Input image (PNG, JPEG, GIF or BMP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Command argument as key=value (e.g. maxColors=4), repeatable
        #[arg(short, long = "arg", value_parser = parse_key_value)]
        args: Vec<(String, String)>,

        /// Shadow mask for opaqueshadow
        #[arg(long)]
        mask: Option<PathBuf>,

        /// RNG seed for reproducible reduceColor output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the available commands
    Commands,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ichabod API",
        description = "Image transform server",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_process,
        api::handle_file_list,
        api::handle_command_list,
    ),
    components(schemas(api::ErrorResponse)),
    tags(
        (name = "Processing", description = "Run commands on images"),
        (name = "Listing", description = "Available images and commands")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Process {
            command,
            input,
            output,
            args,
            mask,
            seed,
        }) => run_process_command(&command, &input, &output, args, mask.as_deref(), seed),
        Some(Commands::Commands) => {
            for command in Command::ALL {
                println!("{command}");
            }
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {s:?}"))
}

/// Process one image file (no server needed)
fn run_process_command(
    command: &str,
    input: &Path,
    output: &Path,
    args: Vec<(String, String)>,
    mask: Option<&Path>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ichabod=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let command: Command = command.parse()?;
    let engine = Engine::new(mask.and_then(load_shadow_mask).map(Arc::new));
    let args: CommandArgs = args.into_iter().collect();

    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", input.display()))?;
    let png = process_bytes(&engine, command, &bytes, &args, seed)?;
    std::fs::write(output, &png)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", output.display()))?;

    println!(
        "Wrote {} ({} bytes) using {command}",
        output.display(),
        png.len()
    );
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let image_dir = std::env::var("IMAGE_DIR").ok();
    let shadow_mask = std::env::var("SHADOW_MASK").ok();
    let seed = std::env::var("ICHABOD_SEED").ok();

    // Header
    println!("Ichabod v{VERSION} - image transform server\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR    = {}",
        bind_addr
            .as_deref()
            .unwrap_or(&format!("{DEFAULT_BIND_ADDR} (default)"))
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  IMAGE_DIR    = {}",
        image_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  SHADOW_MASK  = {}",
        shadow_mask.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  ICHABOD_SEED = {}",
        seed.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    println!("\nAsset Sources:");
    let loader = AssetLoader::new(config_file.map(PathBuf::from));
    println!("  Config:  {}", loader.config_source());
    println!(
        "  Web:     embedded ({})",
        AssetLoader::list_embedded(AssetCategory::Web).join(", ")
    );

    // Commands section
    let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
    println!("\nImage Commands:\n  {}", names.join(", "));

    println!("\nCommands:");
    println!("  ichabod serve     Start the HTTP server");
    println!("  ichabod process   Run a command on an image file");
    println!("  ichabod commands  List image commands");
    println!("\nRun 'ichabod --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ichabod=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let asset_loader = AssetLoader::new(config_file);
    let config = AppConfig::load_from_assets(&asset_loader).with_env_overrides();

    tracing::info!(
        config = %asset_loader.config_source(),
        image_dir = %config.image_dir.display(),
        "Configuration resolved"
    );

    let state = server::create_app_state(&config)?;

    // Build router: start with shared routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Ichabod server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
