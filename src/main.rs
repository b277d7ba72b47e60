use mimalloc::MiMalloc;
use pagewright::config::Config;
use pagewright::generation::Generator;
use pagewright::providers::Providers;
use pagewright::server::router::{PagewrightState, pagewright_router};
use pagewright::store::ArtifactStore;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::info;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    pagewright::utils::logging::init_tracing(&cfg.basic.loglevel);

    info!(
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        loglevel = %cfg.basic.loglevel,
        "Configuration loaded"
    );

    let providers = Providers::from_config(&cfg)?;
    let availability = providers.availability();
    info!(
        openai = availability.openai,
        gemini = availability.gemini,
        "Available providers"
    );

    let generator = Generator::new(providers, ArtifactStore::new());
    let app = pagewright_router(PagewrightState::new(generator));

    let addr = SocketAddr::from((cfg.basic.listen_addr, cfg.basic.listen_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    info!("Health check: http://{}/api/health", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { info!("Received Ctrl+C, shutting down"); },
        _ = terminate => { info!("Received SIGTERM, shutting down"); },
    }
}
