use leakaudit::services::site_audit_service::HttpPageFetcher;
use leakaudit::services::{FetchError, PageFetcher};
use leakaudit::EngineConfig;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answers a single connection with `response` after `delay`.
async fn serve_once(response: Vec<u8>, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        tokio::time::sleep(delay).await;
        // The client hangs up once it has enough bytes.
        let _ = socket.write_all(&response).await;
        let _ = socket.shutdown().await;
    });
    format!("http://{}/", addr)
}

fn http_response(status: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {}\r\ncontent-type: text/html\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
        status,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

fn fetcher(fetch_timeout_ms: u64, max_html_bytes: usize) -> HttpPageFetcher {
    HttpPageFetcher::new(&EngineConfig {
        fetch_timeout_ms,
        max_html_bytes,
        ..EngineConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn oversized_markup_is_cut_at_the_byte_cap() {
    let body = vec![b'a'; 1_000_000];
    let url = serve_once(http_response("200 OK", &body), Duration::ZERO).await;

    let page = fetcher(4_500, 420_000).fetch(&url).await.unwrap();
    assert_eq!(page.status, 200);
    assert_eq!(page.byte_size, 420_000);
    assert_eq!(page.body.len(), 420_000);
    assert!(page.truncated);
}

#[tokio::test]
async fn small_markup_is_read_whole() {
    let body = b"<html><title>Small</title></html>";
    let url = serve_once(http_response("200 OK", body), Duration::ZERO).await;

    let page = fetcher(4_500, 420_000).fetch(&url).await.unwrap();
    assert_eq!(page.byte_size, body.len());
    assert!(!page.truncated);
    assert!(page.body.contains("<title>Small</title>"));
}

#[tokio::test]
async fn slow_server_hits_the_deadline() {
    let url = serve_once(
        http_response("200 OK", b"<html></html>"),
        Duration::from_secs(3),
    )
    .await;

    let started = Instant::now();
    let outcome = fetcher(300, 420_000).fetch(&url).await;
    assert!(outcome.is_err());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn error_status_is_reported() {
    let url = serve_once(
        http_response("503 Service Unavailable", b"down"),
        Duration::ZERO,
    )
    .await;

    match fetcher(4_500, 420_000).fetch(&url).await {
        Err(FetchError::Status(code)) => assert_eq!(code, 503),
        other => panic!("expected status error, got {:?}", other),
    }
}
