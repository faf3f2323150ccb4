//! Submit server lifecycle management.
//!
//! Binds a listener, runs the router on a background task and shuts it down
//! gracefully on request. Used to embed the endpoint next to other work and
//! by the end-to-end tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::rest::{build_router, ApiState};

/// Handle to a running submit server
pub struct SubmitServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl SubmitServer {
    /// Bind `addr` and start serving. Port 0 picks a free port.
    pub async fn start(state: ApiState, addr: SocketAddr) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        let router = build_router(state);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            tracing::info!("Submit server listening on http://{}", addr);

            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
            {
                tracing::error!("Submit server failed: {}", e);
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            task_handle: Some(handle),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL suitable for a submission client
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn is_running(&self) -> bool {
        self.task_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
        tracing::info!("Submit server stopped");
    }
}

impl Drop for SubmitServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn state() -> ApiState {
        ApiState::new(Config::default(), Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_start_on_ephemeral_port() {
        let server = SubmitServer::start(state(), SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();

        assert_ne!(server.local_addr().port(), 0);
        assert!(server.base_url().starts_with("http://127.0.0.1:"));
        assert!(server.is_running());

        server.stop().await;
    }

    #[tokio::test]
    async fn test_port_in_use_is_an_error() {
        let first = SubmitServer::start(state(), SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();

        let second = SubmitServer::start(state(), first.local_addr()).await;
        assert!(second.is_err());

        first.stop().await;
    }
}
