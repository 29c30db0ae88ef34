mod io_loop;
mod query;

use std::thread::JoinHandle;

use tokio::runtime::Builder;
use tokio::sync::{mpsc, watch};
use tracing::warn;

use crate::config::ResolverConfig;
use crate::error::{ResolverError, Result};

pub use query::Response;
use query::{Callback, Query, QueryKind};

/// An asynchronous A/NS resolver backed by a single dedicated I/O thread
/// (§4.1). Lookups are submitted with `resolve_a`/`resolve_ns` and delivered
/// to their callback from a later call to `pump_callbacks`, on whichever
/// thread the caller chooses to pump from (§5).
pub struct AsyncResolver {
    submissions: mpsc::UnboundedSender<Query>,
    completions: crossbeam::channel::Receiver<query::CompletedQuery>,
    shutdown: watch::Sender<bool>,
    thread: Option<JoinHandle<()>>,
    next_id: std::sync::atomic::AtomicU16,
}

impl AsyncResolver {
    /// Starts the dedicated I/O thread. Fails immediately if `config` names no
    /// servers (§6: zero endpoints is a configuration error, not a runtime one).
    pub fn initialize(config: ResolverConfig) -> Result<Self> {
        if config.dns_servers.is_empty() {
            return Err(ResolverError::NoServers.into());
        }

        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        let (complete_tx, complete_rx) = crossbeam::channel::unbounded();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let thread = std::thread::Builder::new()
            .name("argus-resolver-io".into())
            .spawn(move || {
                let runtime = match Builder::new_current_thread().enable_all().build() {
                    Ok(rt) => rt,
                    Err(e) => {
                        warn!(error = %e, "failed to start resolver I/O runtime");
                        return;
                    }
                };
                runtime.block_on(io_loop::run(config, submit_rx, complete_tx, shutdown_rx));
            })
            .map_err(ResolverError::ThreadSpawn)?;

        Ok(Self {
            submissions: submit_tx,
            completions: complete_rx,
            shutdown: shutdown_tx,
            thread: Some(thread),
            next_id: std::sync::atomic::AtomicU16::new(0),
        })
    }

    fn next_query_id(&self) -> u16 {
        self.next_id
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
    }

    fn submit(&self, kind: QueryKind, hostname: impl Into<String>, callback: Callback) {
        let query = Query {
            id: self.next_query_id(),
            kind,
            hostname: hostname.into(),
            callback,
        };
        // The I/O thread only stops receiving once it has been joined (see
        // `shutdown`), so a send failing here means the resolver has already
        // been shut down; still honor the exactly-once callback invariant.
        if let Err(mpsc::error::SendError(query)) = self.submissions.send(query) {
            warn!("resolver submitted to after shutdown; delivering empty response");
            (query.callback)(&Response::default());
        }
    }

    /// Submits an A-record lookup. `callback` fires exactly once, from a
    /// future call to `pump_callbacks` (§3).
    pub fn resolve_a(&self, hostname: &str, callback: impl FnOnce(&Response) + Send + 'static) {
        self.submit(QueryKind::A, hostname, Box::new(callback));
    }

    /// Submits an NS-record lookup. `callback` fires exactly once, from a
    /// future call to `pump_callbacks` (§3).
    pub fn resolve_ns(&self, hostname: &str, callback: impl FnOnce(&Response) + Send + 'static) {
        self.submit(QueryKind::Ns, hostname, Box::new(callback));
    }

    /// Drains completed lookups and invokes their callbacks on the calling
    /// thread. Callers are expected to pump regularly (§5) — nothing else
    /// invokes callbacks.
    pub fn pump_callbacks(&self) {
        while let Ok(completed) = self.completions.try_recv() {
            (completed.callback)(&completed.response);
        }
    }

    /// Signals the I/O thread to stop, waits for it to drain all outstanding
    /// and in-flight queries, then joins it. Idempotent after the first call.
    pub fn shutdown(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("resolver I/O thread panicked during shutdown");
            }
        }
        self.pump_callbacks();
    }
}

impl Drop for AsyncResolver {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.shutdown();
        }
    }
}
