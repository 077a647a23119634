use std::future::Future;

use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tracing::{error, info};

use crate::config::Config;
use crate::routes;

/// Plan server running on its own runtime. Used by the `tripmap-server`
/// binary and embeddable in another process. Shuts down when dropped.
pub struct MapServer {
    runtime: Runtime,
    port: u16,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MapServer {
    pub fn start(config: &Config) -> Result<Self, std::io::Error> {
        let runtime = Runtime::new()?;

        let listener = runtime.block_on(tokio::net::TcpListener::bind(config.addr()))?;
        let port = listener.local_addr()?.port();
        info!("plan server listening on {}:{port}", config.host);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let app = routes::create_router();

        runtime.spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;

            if let Err(e) = result {
                error!("plan server stopped: {e}");
            }
        });

        Ok(Self {
            runtime,
            port,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Block the calling thread on `signal` while the server keeps serving.
    pub fn run_until<F: Future>(&self, signal: F) -> F::Output {
        self.runtime.block_on(signal)
    }
}

impl Drop for MapServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
