use std::sync::{mpsc, Arc};
use std::thread;

use crate::gateway::{GatewaySettings, ReqwestGateway, SearchGateway};
use crate::{EngineError, EngineEvent, RequestId};

enum EngineCommand {
    Search { request_id: RequestId, query: String },
}

/// Sends work to the engine thread. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving end for engine results, in the order searches resolve.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: GatewaySettings) -> Result<(Self, EngineEvents), EngineError> {
        Self::with_gateway(Arc::new(ReqwestGateway::new(settings)))
    }

    /// Starts the engine thread around any gateway implementation.
    pub fn with_gateway(
        gateway: Arc<dyn SearchGateway>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("search-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let gateway = gateway.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(gateway.as_ref(), command, event_tx).await;
                    });
                }
            })
            .map_err(EngineError::Thread)?;

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    /// Queues a search. Several may be in flight at once.
    pub fn search(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            query: query.into(),
        });
    }
}

impl EngineEvents {
    /// Blocks until the next event; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    gateway: &dyn SearchGateway,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { request_id, query } => {
            let result = gateway.search(&query).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
    }
}
