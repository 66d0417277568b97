use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

use pickfield::source::{HttpSource, RemoteSource};
use pickfield::{Item, ResolveError};

/// Serve exactly one HTTP response and report the request line it answered.
async fn serve_once(status: &'static str, body: &'static str) -> (Url, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let request = String::from_utf8_lossy(&request);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        let _ = tx.send(request_line);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
    });

    let url = Url::parse(&format!("http://{addr}/api/items")).unwrap();
    (url, rx)
}

#[tokio::test]
async fn success_returns_items_and_sends_query() {
    let (url, request) =
        serve_once("200 OK", r#"[{"id": 1, "name": "Apple"}, {"id": "2", "name": "Apricot"}]"#)
            .await;
    let source = HttpSource::new(url, None).unwrap();

    let items = source.resolve("ap ri").await.unwrap();
    assert_eq!(items, vec![Item::new("1", "Apple"), Item::new("2", "Apricot")]);
    assert_eq!(request.await.unwrap(), "GET /api/items?query=ap+ri HTTP/1.1");
}

#[tokio::test]
async fn server_error_is_a_status_failure() {
    let (url, _request) = serve_once("500 Internal Server Error", "").await;
    let source = HttpSource::new(url, None).unwrap();

    assert_eq!(source.resolve("x").await, Err(ResolveError::Status(500)));
}

#[tokio::test]
async fn empty_array_is_not_an_error() {
    let (url, _request) = serve_once("200 OK", "[]").await;
    let source = HttpSource::new(url, None).unwrap();

    assert_eq!(source.resolve("zzz").await, Ok(Vec::new()));
}

#[tokio::test]
async fn wrong_shape_is_a_decode_failure() {
    let (url, _request) = serve_once("200 OK", r#"{"items": []}"#).await;
    let source = HttpSource::new(url, None).unwrap();

    assert!(matches!(
        source.resolve("x").await,
        Err(ResolveError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    // bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/api/items")).unwrap();
    let source = HttpSource::new(url, Some(Duration::from_secs(5))).unwrap();

    assert!(matches!(
        source.resolve("x").await,
        Err(ResolveError::Transport(_))
    ));
}
