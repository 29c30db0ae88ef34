use std::net::SocketAddr;
use std::time::Duration;

/// Configuration consumed by the async resolver (AR), §6.
///
/// Field-per-tunable with a `Default` impl.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Authoritative DNS resolver endpoints. `initialize` disables default-server
    /// discovery, so this list is the only set of servers ever queried. Must be
    /// non-empty (§6: "Zero endpoints is a configuration error").
    pub dns_servers: Vec<SocketAddr>,

    /// Per-query timeout. The underlying socket read races this timeout; there is
    /// no retry layered on top (§4.1, §7).
    pub query_timeout: Duration,

    /// Receive buffer size for UDP replies. 4096 comfortably covers EDNS0-sized
    /// responses without the truncation bit ever mattering for A/NS lookups.
    pub max_udp_payload: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            dns_servers: Vec::new(),
            query_timeout: Duration::from_secs(5),
            max_udp_payload: 4096,
        }
    }
}

impl ResolverConfig {
    pub fn new(dns_servers: Vec<SocketAddr>) -> Self {
        Self {
            dns_servers,
            ..Default::default()
        }
    }
}
