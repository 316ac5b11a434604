//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pokedex::config::ClientConfig;
use pokedex::ResourceClient;
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Page returned by the stub for `offset=0&limit=20`.
#[allow(dead_code)]
pub const TWO_POKEMON_PAGE: &str = r#"{"count":2,"next":null,"previous":null,"results":[{"name":"bulbasaur","url":"https://pokeapi.co/api/v2/pokemon/1/"},{"name":"ivysaur","url":"https://pokeapi.co/api/v2/pokemon/2/"}]}"#;

/// A running stub backend.
pub struct StubBackend {
    pub addr: SocketAddr,
    targets: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl StubBackend {
    /// Base URL of the stub, shaped like the real API root.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v2", self.addr)
    }

    /// Request targets (path and query) received so far, in order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }

    /// A client pointed at this stub, bypassing system proxies.
    pub fn client(&self) -> ResourceClient {
        ResourceClient::new(&ClientConfig {
            base_url: self.base_url(),
            timeout_secs: 5,
            no_proxy: true,
        })
        .unwrap()
    }
}

/// Start a stub backend that always answers 200 with a fixed JSON body.
#[allow(dead_code)]
pub async fn start_mock_backend(body: &'static str) -> StubBackend {
    start_programmable_backend(move |_target| async move { (200, body.to_string()) }).await
}

/// Start a programmable stub backend on an ephemeral port.
///
/// `f` receives the request target (e.g. `/api/v2/pokemon?offset=0&limit=20`)
/// and returns the status code and body to send.
pub async fn start_programmable_backend<F, Fut>(f: F) -> StubBackend
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let targets = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let recorded = targets.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        handle(socket, f, recorded).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    StubBackend { addr, targets }
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn handle<F, Fut>(mut socket: TcpStream, f: Arc<F>, recorded: Arc<Mutex<Vec<String>>>)
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = (u16, String)>,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    recorded.lock().unwrap().push(target.clone());

    let (status, body) = f(target).await;
    let status = StatusCode::from_u16(status).expect("stub status must be a valid HTTP code");
    let status_text = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
    tokio::time::sleep(Duration::from_millis(10)).await;
}
