//! Server startup utilities.

use attrsvc_config::ServiceKind;
use tokio::signal;
use tracing::{info, warn};

/// Prints server startup information.
pub fn print_startup_info(kind: ServiceKind, addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("{} listening on http://{}", kind, addr);
    info!("Endpoint:  GET|PUT /users/:id/{}", kind.attribute());
    info!("Health:    http://{}/health", addr);
    info!("{}", separator);
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(ServiceKind::Name, "0.0.0.0:9001");
        print_startup_info(ServiceKind::Score, "127.0.0.1:19002");
    }
}
