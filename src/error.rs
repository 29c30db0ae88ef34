use thiserror::Error;

/// Crate-wide result alias: a single alias over one flat error enum per
/// component.
pub type Result<T> = std::result::Result<T, ArgusError>;

/// Failures the async resolver (AR) can report synchronously.
///
/// Everything past `initialize` is delivered through the per-query callback
/// instead (see `resolver::Response`), never as a `Result` — the callback fires
/// exactly once whether the query succeeded, failed to parse, or was cancelled
/// at shutdown.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// `initialize` was called with an empty server list.
    #[error("at least one DNS server must be configured")]
    NoServers,
    /// The dedicated I/O thread could not be spawned.
    #[error("failed to spawn resolver I/O thread: {0}")]
    ThreadSpawn(std::io::Error),
    /// The I/O thread's UDP socket could not be bound.
    #[error("failed to bind resolver socket: {0}")]
    SocketBind(std::io::Error),
}

/// Reserved for the robots evaluator (RE). Parsing is total (malformed lines are
/// skipped, §7) so RE never actually constructs one today; the variant exists so
/// `ArgusError` has a place for it rather than RE growing its own `Result` alias.
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("robots document exceeded the maximum supported size")]
    DocumentTooLarge,
}

/// Top-level error type unifying the two components' failure surfaces.
#[derive(Debug, Error)]
pub enum ArgusError {
    #[error("resolver error: {0}")]
    Resolver(#[from] ResolverError),
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),
}
