use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cielab_ops::{ColorReplacement, EffectKind, Operation, ReplacementRules};
use tintwork::api;
use tintwork::cli::{parse_rule_arg, run_buffer_command, run_extract_command};
use tintwork::models::{self, AppConfig};
use tintwork::server;

#[derive(Parser)]
#[command(name = "tintwork")]
#[command(about = "Perceptual color processing: palettes, recoloring, effects, background removal")]
struct Cli {
    /// Path to config.yaml (falls back to CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the dominant colors of a PNG, most frequent first
    Extract {
        /// Input PNG file
        input: PathBuf,

        /// Print JSON instead of one color per line
        #[arg(long)]
        json: bool,
    },
    /// Recolor pixels matching replacement rules
    Remap {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Replacement rule, e.g. 'rgb(255,0,0)=#00ff00' or 'rgb(255,255,255)=transparent'.
        /// Repeatable; earlier rules take precedence.
        #[arg(short, long = "rule", value_parser = parse_rule_arg, required = true)]
        rules: Vec<ColorReplacement>,

        /// Delta E (CIE76) tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,
    },
    /// Apply a stylized effect
    Effect {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// thermal, glitch or vintage
        #[arg(short, long)]
        kind: EffectKind,

        /// Effect strength (used by glitch)
        #[arg(short, long)]
        intensity: Option<f64>,
    },
    /// Make pixels close to the corner colors transparent
    RemoveBackground {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Delta E (CIE76) tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tintwork API",
        description = "Perceptual color processing on RGBA8 pixel buffers",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_process),
    components(schemas(
        models::RequestMessage,
        models::ResponseMessage,
        models::ResponseStatus,
        models::EncodedBuffer,
        models::WireColor,
        models::WireRule,
        models::RemapParams,
        models::EffectParams,
        models::BackgroundParams,
    )),
    tags(
        (name = "Processing", description = "Color operations on pixel buffers")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Serve) => run_server(config_path.as_deref()).await,
        Some(command) => {
            init_cli_logging();
            let config = AppConfig::load(config_path.as_deref());
            run_file_command(command, &config).await
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tintwork=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

async fn run_file_command(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Extract { input, json } => {
            let colors = run_extract_command(config, &input).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                for color in &colors {
                    println!("{}  {}  {}", color.hex, color.rgb, color.count);
                }
            }
        }
        Commands::Remap {
            input,
            output,
            rules,
            tolerance,
        } => {
            let rules: ReplacementRules = rules.into_iter().collect();
            let operation = Operation::remap(
                rules,
                tolerance.unwrap_or(config.defaults.remap_tolerance),
            )?;
            run_and_report(config, operation, &input, &output).await?;
        }
        Commands::Effect {
            input,
            output,
            kind,
            intensity,
        } => {
            let operation = Operation::effect(
                kind,
                intensity.unwrap_or(config.defaults.effect_intensity),
            )?;
            run_and_report(config, operation, &input, &output).await?;
        }
        Commands::RemoveBackground {
            input,
            output,
            tolerance,
        } => {
            let operation = Operation::remove_background(
                tolerance.unwrap_or(config.defaults.background_tolerance),
            )?;
            run_and_report(config, operation, &input, &output).await?;
        }
        Commands::Serve => anyhow::bail!("serve is not a file command"),
    }

    Ok(())
}

async fn run_and_report(
    config: &AppConfig,
    operation: Operation,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let name = operation.name();
    run_buffer_command(config, operation, input, output).await?;
    println!("{name}: wrote {}", output.display());
    Ok(())
}

/// Show usage when invoked without a subcommand
fn run_status_command() {
    println!("Tintwork - perceptual color processing\n");
    println!("Commands:");
    println!("  tintwork serve              Start the HTTP server");
    println!("  tintwork extract            Print dominant colors of a PNG");
    println!("  tintwork remap              Recolor a PNG with replacement rules");
    println!("  tintwork effect             Apply thermal, glitch or vintage");
    println!("  tintwork remove-background  Clear pixels matching the corner colors");
    println!("\nRun 'tintwork --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tintwork=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(config_path);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| config.server.bind.clone());

    tracing::info!(
        config = ?config_path.map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        timeout_secs = config.task.timeout_secs,
        max_pixels = config.limits.max_pixels,
        "Configuration resolved"
    );

    // Create application state using shared server module
    let state = server::create_app_state(config);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Tintwork server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
