//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use chat_gateway::probe::{DescribedStack, ProbeError, StackDescriber, StackOutput};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Request line and headers as received by the mock backend.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        403 => "403 Forbidden",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        _ => "200 OK",
    }
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?.to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    Some(CapturedRequest {
        request_line,
        headers,
    })
}

/// Start a mock backend on an ephemeral port that answers every request
/// with `status` and `body`, forwarding what it received to the returned
/// channel.
pub async fn start_recording_backend(
    status: u16,
    body: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Some(captured) = read_head(&mut socket).await {
                            let _ = tx.send(captured);
                        }
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, rx)
}

/// Describer returning a fixed answer.
pub struct StaticStacks(pub Result<Vec<DescribedStack>, String>);

impl StaticStacks {
    #[allow(dead_code)]
    pub fn with_outputs(name: &str, outputs: &[(&str, &str)]) -> Self {
        Self(Ok(vec![DescribedStack {
            name: name.to_string(),
            outputs: outputs
                .iter()
                .map(|(k, v)| StackOutput::new(*k, *v))
                .collect(),
        }]))
    }
}

#[async_trait]
impl StackDescriber for StaticStacks {
    async fn describe(&self, stack: &str) -> Result<Vec<DescribedStack>, ProbeError> {
        self.0.clone().map_err(|reason| ProbeError::DescribeStack {
            stack: stack.to_string(),
            reason,
        })
    }
}

/// HTTP client that ignores proxy settings from the environment.
#[allow(dead_code)]
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
