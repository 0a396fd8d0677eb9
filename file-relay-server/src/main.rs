use clap::{Parser, ValueHint};
use log::LevelFilter;
use std::num::NonZeroU16;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

use file_relay_server::reader;
use file_relay_server::routes::{self, AppState};

#[tokio::main(flavor = "current_thread")] // single-threaded, multi requires rt-multi-thread feature
async fn main() -> std::io::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .filter(Some("tower_http"), LevelFilter::Debug)
        .filter(Some("file_relay_server"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let CliArgs { host, port, file } = CliArgs::parse();

    log::info!(
        version = env!("CARGO_PKG_VERSION");
        "Initializing server"
    );

    // Resolve once at startup; the handler never consults the working
    // directory again.
    let sample_file = reader::resolve(&file)?;
    log::info!(path:debug = sample_file; "serving sample file");

    let router = routes::routes(AppState {
        sample_file: Arc::new(sample_file),
    })
    .layer(TraceLayer::new_for_http());

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        addr:display = host,
        port = port.get();
        "listening to TCP"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

#[derive(Parser)]
struct CliArgs {
    /// The host address for the file relay server.
    #[arg(
        long,
        value_name = "URI",
        value_hint = ValueHint::Hostname,
        default_value = "0.0.0.0",
        env = "FILE_RELAY_HOST",
    )]
    host: String,
    /// The host port for the file relay server.
    #[arg(
        short,
        long,
        value_name = "PORT",
        value_hint = ValueHint::Other,
        default_value = "3000",
        env = "FILE_RELAY_PORT",
    )]
    port: NonZeroU16,
    /// The sample file served by `GET /`, resolved against the working
    /// directory at startup.
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        default_value = "sample.txt",
        env = "FILE_RELAY_FILE",
    )]
    file: PathBuf,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT (ctrl+c) handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => log::info!("received SIGINT (ctrl+c), shutting down"),
        () = terminate => log::info!("received SIGTERM, shutting down"),
    }
}
