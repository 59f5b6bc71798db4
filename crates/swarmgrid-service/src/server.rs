//! Single-owner grid server.
//!
//! The grid is not safe for concurrent mutation and every request may
//! grow it, so one dedicated thread owns the [`StatusAccessor`] and
//! processes requests in arrival order. Clients talk to it over a
//! bounded channel, each call carrying its own reply channel.
//!
//! # Lifecycle
//!
//! ```text
//! GridServer::spawn(config, registry)
//!     |-- validate config, build grid
//!     |-- spawn "swarmgrid-server" thread
//! GridServer::client() -> GridClient (Clone, Send)
//!     |-- call(name, request) blocks until the reply arrives
//! GridServer::shutdown()
//!     |-- send Shutdown, join thread, return the accessor
//! ```

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, info, warn};

use crate::accessor::StatusAccessor;
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::registry::HandlerRegistry;
use crate::request::{HandlerRequest, HandlerResponse};

type Reply = Sender<Result<HandlerResponse, ServiceError>>;

enum Message {
    Call {
        handler: String,
        request: HandlerRequest,
        reply: Reply,
    },
    Shutdown,
}

/// Owns the server thread.
///
/// Dropping the server shuts it down and joins the thread.
pub struct GridServer {
    tx: Sender<Message>,
    thread: Option<JoinHandle<StatusAccessor>>,
}

impl GridServer {
    /// Validate `config`, build the grid, and start the server thread.
    pub fn spawn(config: ServiceConfig, registry: HandlerRegistry) -> Result<Self, ServiceError> {
        config.validate()?;
        let accessor = StatusAccessor::from_config(config.grid.clone())?;
        let (tx, rx) = bounded(config.queue_capacity);

        let handlers = registry.len();
        let thread = thread::Builder::new()
            .name("swarmgrid-server".into())
            .spawn(move || serve(accessor, registry, rx))
            .map_err(|e| ServiceError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        info!(
            handlers,
            queue_capacity = config.queue_capacity,
            "grid server started"
        );
        Ok(Self {
            tx,
            thread: Some(thread),
        })
    }

    /// A new client handle.
    pub fn client(&self) -> GridClient {
        GridClient {
            tx: self.tx.clone(),
        }
    }

    /// Whether the server thread is still accepting requests.
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the server and return its accessor.
    ///
    /// Requests queued behind the shutdown message are dropped and their
    /// callers see [`ServiceError::ShuttingDown`]. Returns `None` if the
    /// server was already shut down or its thread panicked.
    pub fn shutdown(&mut self) -> Option<StatusAccessor> {
        let thread = self.thread.take()?;
        // Fails only if the thread already exited.
        let _ = self.tx.send(Message::Shutdown);
        match thread.join() {
            Ok(accessor) => {
                info!(cells = accessor.grid().cell_count(), "grid server stopped");
                Some(accessor)
            }
            Err(_) => {
                warn!("grid server thread panicked");
                None
            }
        }
    }
}

impl Drop for GridServer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn serve(
    mut accessor: StatusAccessor,
    registry: HandlerRegistry,
    rx: Receiver<Message>,
) -> StatusAccessor {
    while let Ok(msg) = rx.recv() {
        match msg {
            Message::Call {
                handler,
                request,
                reply,
            } => {
                let result = registry.dispatch(&mut accessor, &handler, request);
                if let Err(e) = &result {
                    debug!(handler = %handler, error = %e, "status request failed");
                }
                // Caller may have given up waiting.
                let _ = reply.send(result);
            }
            Message::Shutdown => break,
        }
    }
    accessor
}

/// Cloneable handle for sending requests to a [`GridServer`].
#[derive(Clone)]
pub struct GridClient {
    tx: Sender<Message>,
}

impl GridClient {
    /// Invoke the handler `name` and wait for its response.
    ///
    /// Blocks while the request queue is full.
    pub fn call(
        &self,
        name: &str,
        request: HandlerRequest,
    ) -> Result<HandlerResponse, ServiceError> {
        let (reply, reply_rx) = bounded(1);
        self.tx
            .send(Message::Call {
                handler: name.to_string(),
                request,
                reply,
            })
            .map_err(|_| ServiceError::ShuttingDown)?;
        reply_rx.recv().map_err(|_| ServiceError::ShuttingDown)?
    }

    /// Invoke a getter at `(x, y)`.
    pub fn get(&self, name: &str, x: i8, y: i8) -> Result<HandlerResponse, ServiceError> {
        self.call(name, HandlerRequest::Get { x, y })
    }

    /// Invoke a setter at `(x, y)`.
    pub fn set(&self, name: &str, x: i8, y: i8, data: u8) -> Result<HandlerResponse, ServiceError> {
        self.call(name, HandlerRequest::Set { x, y, data })
    }
}
