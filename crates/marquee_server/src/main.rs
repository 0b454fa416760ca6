use anyhow::Result;
use clap::Parser;
use marquee_error::{ServerError, ServerErrorKind};
use marquee_server::{AppState, ServerConfig, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Marquee booking directory server", long_about = None)]
struct Args {
    /// Address to bind (overrides MARQUEE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to serve on (overrides MARQUEE_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database connection pool size (overrides MARQUEE_POOL_SIZE)
    #[arg(long)]
    pool_size: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(pool_size) = args.pool_size {
        config.pool_size = pool_size;
    }

    info!(
        host = %config.host,
        port = config.port,
        pool_size = config.pool_size,
        "Starting Marquee directory server"
    );

    let pool = marquee_database::build_pool(config.pool_size)?;
    {
        let mut conn = pool.get()?;
        marquee_database::run_migrations(&mut conn)?;
    }

    let app = create_router(AppState::new(pool));
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Startup(e.to_string())))?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Startup(e.to_string())))?;

    Ok(())
}
