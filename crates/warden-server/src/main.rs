//! Warden server binary: both front-ends over one shared auth core.

use std::sync::Arc;
use std::time::Duration;
use tonic::transport::Server;
use warden_auth::AuthCore;
use warden_directory::{AccountService, SqliteUserStore};
use warden_grpc::proto::user_service_server::UserServiceServer;
use warden_grpc::{AuthInterceptor, UserGrpcService};
use warden_http::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = warden_core::load_config()?;
    let secret = cfg.auth.resolve_secret()?;
    let token_ttl = cfg.auth.parse_token_ttl()?;

    let store = Arc::new(SqliteUserStore::connect(&cfg.server.sqlite_path).await?);
    let accounts = AccountService::new(store.clone(), secret.as_str(), token_ttl);
    let auth = AuthCore::new(secret.as_str(), store);

    spawn_user_count_logger(accounts.clone());

    // Shutdown fan-out: one signal task, one receiver per server.
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(());
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutting down servers");
        let _ = shutdown_tx.send(());
    });

    // HTTP front-end
    let app = warden_http::router(AppState::new(accounts.clone(), auth.clone()));
    let http_listener = tokio::net::TcpListener::bind(&cfg.server.http_bind).await?;
    tracing::info!(address = %cfg.server.http_bind, "HTTP server listening");
    let mut http_shutdown = shutdown_rx.clone();
    let http_srv = async move {
        axum::serve(http_listener, app)
            .with_graceful_shutdown(async move {
                let _ = http_shutdown.changed().await;
            })
            .await
            .map_err(anyhow::Error::from)
    };

    // gRPC front-end
    let grpc_addr = cfg.server.grpc_bind.parse()?;
    tracing::info!(address = %cfg.server.grpc_bind, "gRPC server listening");
    let mut grpc_shutdown = shutdown_rx;
    let grpc_srv = async move {
        Server::builder()
            .add_service(UserServiceServer::with_interceptor(
                UserGrpcService::new(accounts),
                AuthInterceptor::new(auth),
            ))
            .serve_with_shutdown(grpc_addr, async move {
                let _ = grpc_shutdown.changed().await;
            })
            .await
            .map_err(anyhow::Error::from)
    };

    tokio::try_join!(http_srv, grpc_srv)?;
    tracing::info!("servers exited");
    Ok(())
}

/// Log the total user count every ten seconds.
fn spawn_user_count_logger(accounts: AccountService) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(10));
        loop {
            interval.tick().await;
            match accounts.count_users().await {
                Ok(total) => tracing::info!(total, "registered users"),
                Err(e) => tracing::warn!(error = %e, "failed to count users"),
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
