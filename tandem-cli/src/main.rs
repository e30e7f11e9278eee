use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tandem_server::ServerConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tandem")]
#[command(about = "WebRTC signaling relay with a tiny chat channel")]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the signaling server. Flags override HOST, PORT, ALLOWED_ORIGIN
    /// and HUB_CAPACITY from the environment.
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,

        /// Origin allowed to open the handshake; `*` allows any
        #[arg(long)]
        allowed_origin: Option<String>,

        /// Queue depth between sockets and the hub
        #[arg(long)]
        hub_capacity: Option<usize>,
    },

    /// Print the configuration `serve` would use and exit
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ServerConfig::from_env().context("Invalid environment configuration")?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            allowed_origin,
            hub_capacity,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(origin) = allowed_origin {
                config.allowed_origin = Some(origin).filter(|o| o != "*");
            }
            if let Some(capacity) = hub_capacity {
                config.hub_capacity = capacity;
            }
            config.validate().context("Invalid command-line configuration")?;

            println!("{}", "Starting Tandem signaling relay...".green().bold());
            print_config(&config);

            tandem_server::serve(config, shutdown_signal()).await?;
        }
        Commands::Config => print_config(&config),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_config(config: &ServerConfig) {
    println!("   Listen:  {}", config.listen_addr().as_str().cyan());
    println!(
        "   Origin:  {}",
        config.allowed_origin.as_deref().unwrap_or("*").cyan()
    );
    println!("   Hub:     {} queued commands", config.hub_capacity);
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C received, shutting down"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
