// Varasto - Warehouse Inventory Web Server
//
// Usage:
//   varasto-server --bind 127.0.0.1 --port 3000 --log-level debug

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use varasto::server::{start_server, AppState, ServerConfig};
use varasto::WarehouseStore;

/// Warehouse inventory web application
#[derive(Parser, Debug)]
#[command(name = "varasto-server")]
#[command(version = varasto::VERSION)]
#[command(about = "Warehouse inventory web application", long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0", env = "VARASTO_BIND")]
    bind: String,

    /// HTTP port
    #[arg(long, default_value_t = 3000, env = "VARASTO_PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Directory with static assets (served under /static)
    #[arg(long, default_value = "web")]
    static_dir: std::path::PathBuf,

    /// Disable permissive CORS
    #[arg(long)]
    no_cors: bool,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            http_addr: self.bind.clone(),
            http_port: self.port,
            enable_cors: !self.no_cors,
            static_dir: self.static_dir.clone(),
        }
    }
}

/// Console logging; RUST_LOG directives win over --log-level
fn setup_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli);

    info!(version = %varasto::VERSION, "📦 Varasto warehouse server starting");

    let config = cli.server_config();
    let state = AppState::new(WarehouseStore::new());

    start_server(config, state).await
}
