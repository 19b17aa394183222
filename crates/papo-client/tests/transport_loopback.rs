//! Loopback transport test against an in-process WebSocket peer.
//!
//! Spins a real WebSocket server on a local port and drives the client
//! transport end to end: exact outbound wire shape, discriminator routing,
//! malformed-frame dropping, and the close event.

use futures::{SinkExt, StreamExt};
use papo_client::{ClientId, ConnEvent, endpoint, transport};
use papo_proto::{MessageKind, Outbound};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

#[tokio::test]
async fn envelope_round_trip_and_close() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();

        // The exact structure crosses the transport boundary: two fields,
        // no sender identity
        let frame = ws.next().await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(frame.to_text().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"mensagem": "oi", "timestamp": "2024-01-01T00:00:00Z"})
        );

        ws.send(Message::text(r#"{"tipo":"sistema","texto":"bem-vindo"}"#)).await.unwrap();
        ws.send(Message::text("not json at all")).await.unwrap();
        ws.send(Message::text(r#"{"texto":"oi de volta"}"#)).await.unwrap();
        ws.close(None).await.unwrap();
    });

    let id = ClientId::generate();
    let url = endpoint(&format!("ws://{addr}"), &id);
    let mut conn = transport::connect(&url).await.unwrap();

    conn.send(Outbound::new("oi", "2024-01-01T00:00:00Z"));

    let first = conn.events.recv().await.unwrap();
    match &first {
        ConnEvent::Message(m) => assert_eq!(m.kind(), MessageKind::System),
        other => panic!("expected system notice, got {other:?}"),
    }

    // The malformed frame was dropped inside the transport: the next event
    // is already the peer text
    let second = conn.events.recv().await.unwrap();
    match &second {
        ConnEvent::Message(m) => {
            assert_eq!(m.kind(), MessageKind::Received);
            assert_eq!(m.texto, "oi de volta");
        },
        other => panic!("expected peer text, got {other:?}"),
    }

    let third = conn.events.recv().await.unwrap();
    assert_eq!(third, ConnEvent::Closed);

    server.await.unwrap();
}

#[tokio::test]
async fn silent_peer_times_out_instead_of_hanging() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept TCP but never answer the WebSocket handshake
    let server = tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    });

    let url = format!("ws://{addr}/chat");
    let result =
        transport::connect_with_timeout(&url, std::time::Duration::from_millis(200)).await;
    assert!(matches!(result, Err(transport::TransportError::Timeout(_))));

    server.abort();
}

#[tokio::test]
async fn dial_failure_is_an_error_value() {
    // Nothing listens here; the dial must fail fast with an error, not hang
    // or panic
    let result = transport::connect("ws://127.0.0.1:1/chat").await;
    assert!(result.is_err());
}
