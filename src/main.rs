use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use qr_inbox::storage::memory::SubmissionLog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:8000".parse()?;
    let mut cert_path = PathBuf::from("cert.pem");
    let mut key_path = PathBuf::from("key.pem");
    let mut use_tls = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--cert" => {
                cert_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--key" => {
                key_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--no-tls" => {
                use_tls = false;
                i += 1;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--cert <path>] [--key <path>] [--no-tls]",
                    args[0]
                );
                eprintln!("Defaults: --bind 0.0.0.0:8000 --cert cert.pem --key key.pem");
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    let log = Arc::new(SubmissionLog::new());
    let app = qr_inbox::app(log.clone());

    // Periodic stats line so an idle server still shows it is alive.
    let stats_log = log.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));

        loop {
            interval.tick().await;
            tracing::info!("Submission log: {} entries", stats_log.len().await);
        }
    });

    tracing::info!("Press Ctrl+C to shutdown");

    if use_tls {
        let tls = RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "failed to load TLS material ({}, {}): {}",
                    cert_path.display(),
                    key_path.display(),
                    e
                )
            })?;

        tracing::info!("HTTPS server listening on {}", bind_addr);
        axum_server::bind_rustls(bind_addr, tls)
            .serve(app.into_make_service())
            .await?;
    } else {
        tracing::info!("HTTP server listening on {} (TLS disabled)", bind_addr);
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        axum::serve(listener, app).await?;
    }

    Ok(())
}
