use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::ResolverConfig;
use crate::dns::common::hostname_from_labels;
use crate::dns::{DnsPacket, RData};

use super::query::{CompletedQuery, Query, QueryKind, Response};

/// The resolver's single dedicated I/O loop (§4.1), run inside a
/// single-threaded Tokio runtime parked on its own `std::thread`.
///
/// The `mpsc` receiver's `.recv().await` stands in for the condvar wait, and
/// each in-flight query becomes its own task that the runtime's reactor
/// multiplexes for us instead of a hand-rolled `select()` over raw file
/// descriptors.
pub(super) async fn run(
    config: ResolverConfig,
    mut submissions: mpsc::UnboundedReceiver<Query>,
    completions: crossbeam::channel::Sender<CompletedQuery>,
    mut shutdown: watch::Receiver<bool>,
) {
    info!(servers = ?config.dns_servers, "resolver I/O thread starting");

    let next_server = Arc::new(AtomicUsize::new(0));
    let mut in_flight: JoinSet<()> = JoinSet::new();

    loop {
        tokio::select! {
            biased;

            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }

            maybe_query = submissions.recv() => {
                match maybe_query {
                    Some(query) => spawn_query(
                        query,
                        &config,
                        &next_server,
                        completions.clone(),
                        shutdown.clone(),
                        &mut in_flight,
                    ),
                    None => break,
                }
            }

            Some(result) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(join_err) = result {
                    warn!(error = %join_err, "resolver query task panicked");
                }
            }
        }
    }

    debug!(pending = in_flight.len(), "resolver I/O thread draining outstanding work");

    // Anything still sitting in the submission queue never got a chance to
    // spawn a task; deliver it an empty response so the exactly-once callback
    // invariant holds even for queries that lost the race with shutdown.
    while let Ok(query) = submissions.try_recv() {
        let _ = completions.send(CompletedQuery {
            response: Response::default(),
            callback: query.callback,
        });
    }

    // Outstanding per-query tasks race their own shutdown branch (see
    // `run_query` below) and resolve quickly; wait them all out so no
    // in-flight query is abandoned mid-flight.
    while in_flight.join_next().await.is_some() {}

    info!("resolver I/O thread stopped");
}

#[allow(clippy::too_many_arguments)]
fn spawn_query(
    query: Query,
    config: &ResolverConfig,
    next_server: &Arc<AtomicUsize>,
    completions: crossbeam::channel::Sender<CompletedQuery>,
    shutdown: watch::Receiver<bool>,
    in_flight: &mut JoinSet<()>,
) {
    let server_index = next_server.fetch_add(1, Ordering::Relaxed) % config.dns_servers.len();
    let server = config.dns_servers[server_index];
    let timeout_dur = config.query_timeout;
    let max_payload = config.max_udp_payload;

    in_flight.spawn(async move {
        let mut shutdown = shutdown;
        let response = run_query(
            query.id,
            query.kind,
            &query.hostname,
            server,
            timeout_dur,
            max_payload,
            &mut shutdown,
        )
        .await;
        let _ = completions.send(CompletedQuery {
            response,
            callback: query.callback,
        });
    });
}

/// Resolves a single query, racing the shutdown signal against the network
/// round-trip so cancellation at shutdown delivers promptly (§5).
async fn run_query(
    id: u16,
    kind: QueryKind,
    hostname: &str,
    server: SocketAddr,
    timeout_dur: Duration,
    max_payload: usize,
    shutdown: &mut watch::Receiver<bool>,
) -> Response {
    tokio::select! {
        biased;
        _ = shutdown.changed() => {
            debug!(hostname, "query cancelled by shutdown");
            Response::default()
        }
        response = send_and_receive(id, kind, hostname, server, timeout_dur, max_payload) => {
            response
        }
    }
}

async fn send_and_receive(
    id: u16,
    kind: QueryKind,
    hostname: &str,
    server: SocketAddr,
    timeout_dur: Duration,
    max_payload: usize,
) -> Response {
    let query_packet = match kind {
        QueryKind::A => DnsPacket::query_a(id, hostname),
        QueryKind::Ns => DnsPacket::query_ns(id, hostname),
    };
    let query_bytes = query_packet.encode();

    let attempt = async {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(server).await?;
        socket.send(&query_bytes).await?;
        let mut buf = vec![0u8; max_payload];
        let n = socket.recv(&mut buf).await?;
        Ok::<_, std::io::Error>(buf[..n].to_vec())
    };

    match timeout(timeout_dur, attempt).await {
        Ok(Ok(reply_bytes)) => match DnsPacket::decode(&reply_bytes) {
            Ok(packet) => extract_response(kind, &packet),
            Err(e) => {
                debug!(hostname, error = %e, "failed to parse DNS reply");
                Response::default()
            }
        },
        Ok(Err(e)) => {
            warn!(hostname, %server, error = %e, "DNS transport error");
            Response::default()
        }
        Err(_) => {
            debug!(hostname, %server, "query timed out");
            Response::default()
        }
    }
}

fn extract_response(kind: QueryKind, packet: &DnsPacket) -> Response {
    let mut response = Response::default();
    match kind {
        QueryKind::A => {
            for record in &packet.answers {
                if let RData::A(ip) = &record.rdata {
                    response.ips.push(*ip);
                }
            }
        }
        QueryKind::Ns => {
            for record in packet.answers.iter().chain(packet.authorities.iter()) {
                if let RData::Ns(labels) = &record.rdata {
                    response.nameservers.push(hostname_from_labels(labels));
                }
            }
        }
    }
    response
}
