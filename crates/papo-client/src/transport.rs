//! WebSocket transport.
//!
//! [`connect`] dials the endpoint and spawns one I/O task bridging the
//! socket to mpsc channels. Protocol interpretation stays out of this
//! module except for envelope parsing, which happens here so malformed
//! frames can be dropped before anything downstream sees them.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use papo_proto::{Inbound, Outbound};
use thiserror::Error;
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use crate::ConnEvent;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Dial failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Dial did not complete within the deadline.
    #[error("connection timed out after {0:?}")]
    Timeout(Duration),
}

/// Deadline for the TCP dial plus WebSocket handshake.
///
/// A peer that accepts TCP but never answers the handshake must not stall
/// the caller; expiry surfaces as an ordinary failed dial.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const CHANNEL_CAPACITY: usize = 32;

/// Handle to the single live connection.
///
/// Exclusively owned. On reconnect the handle is replaced wholesale and
/// the old I/O task aborted (dropping the handle aborts it too).
#[derive(Debug)]
pub struct Connection {
    to_server: mpsc::Sender<Outbound>,
    /// Connection events, consumed by the runtime dispatch loop.
    pub events: mpsc::Receiver<ConnEvent>,
    abort_handle: tokio::task::AbortHandle,
}

impl Connection {
    /// Queue an envelope for transmission.
    ///
    /// Fire-and-forget: no acknowledgment, no delivery confirmation, and a
    /// full or closed channel is logged and dropped, never retried.
    pub fn send(&self, envelope: Outbound) {
        if let Err(e) = self.to_server.try_send(envelope) {
            tracing::warn!("dropping outbound frame: {e}");
        }
    }

    /// Abort the I/O task.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Dial `url` with the standard [`CONNECT_TIMEOUT`] and spawn the I/O
/// task.
pub async fn connect(url: &str) -> Result<Connection, TransportError> {
    connect_with_timeout(url, CONNECT_TIMEOUT).await
}

/// Dial with a custom handshake deadline (tests).
pub async fn connect_with_timeout(
    url: &str,
    timeout: Duration,
) -> Result<Connection, TransportError> {
    let (stream, _response) = tokio::time::timeout(timeout, connect_async(url))
        .await
        .map_err(|_| TransportError::Timeout(timeout))?
        .map_err(|e| TransportError::Connection(e.to_string()))?;

    let (to_server_tx, to_server_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (events_tx, events_rx) = mpsc::channel(CHANNEL_CAPACITY);

    let task = tokio::spawn(run_connection(stream, to_server_rx, events_tx));

    Ok(Connection {
        to_server: to_server_tx,
        events: events_rx,
        abort_handle: task.abort_handle(),
    })
}

/// Bridge the socket to the channels until it closes.
async fn run_connection(
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    mut to_server: mpsc::Receiver<Outbound>,
    events: mpsc::Sender<ConnEvent>,
) {
    let (mut sink, mut source) = stream.split();

    loop {
        tokio::select! {
            outgoing = to_server.recv() => match outgoing {
                Some(envelope) => match envelope.to_json() {
                    Ok(text) => {
                        if let Err(e) = sink.send(Message::text(text)).await {
                            // Fire-and-forget: no retry on send failure
                            tracing::warn!("send failed: {e}");
                        }
                    },
                    Err(e) => tracing::warn!("failed to encode outbound frame: {e}"),
                },
                None => break,
            },

            incoming = source.next() => match incoming {
                Some(Ok(Message::Text(text))) => match Inbound::from_json(text.as_str()) {
                    Ok(envelope) => {
                        if events.send(ConnEvent::Message(envelope)).await.is_err() {
                            break;
                        }
                    },
                    // Fail-soft: malformed frames never crash or surface
                    Err(e) => tracing::warn!("dropping malformed frame: {e}"),
                },
                Some(Ok(Message::Close(_))) | None => {
                    let _ = events.send(ConnEvent::Closed).await;
                    break;
                },
                // Binary frames and ping/pong carry nothing to render
                Some(Ok(_)) => {},
                Some(Err(e)) => {
                    let _ = events.send(ConnEvent::TransportError(e.to_string())).await;
                    let _ = events.send(ConnEvent::Closed).await;
                    break;
                },
            },
        }
    }
}
