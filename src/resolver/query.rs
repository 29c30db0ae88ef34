use std::net::Ipv4Addr;

/// A single completed lookup, handed to the caller's callback.
///
/// Either list may be empty — on a transport failure, a parse failure, or
/// cancellation at shutdown, both are simply empty (§3, §7).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub ips: Vec<Ipv4Addr>,
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum QueryKind {
    A,
    Ns,
}

/// Completion callback plus whatever state it needs, collapsed into a single
/// polymorphic callable rather than a function-pointer-plus-opaque-state pair:
/// `resolve_a`/`resolve_ns` take one `FnOnce` whose captures are the state.
pub(super) type Callback = Box<dyn FnOnce(&Response) + Send + 'static>;

pub(super) struct Query {
    pub id: u16,
    pub kind: QueryKind,
    pub hostname: String,
    pub callback: Callback,
}

pub(super) struct CompletedQuery {
    pub response: Response,
    pub callback: Callback,
}
