#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use students_ui::{config::ApiConfig, http_client::ApiClient};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Canned answer for one request path
#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub body: &'static str,
    pub delay: Duration,
}

impl Route {
    pub fn json(body: &'static str) -> Self {
        Self {
            status: 200,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: "",
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }
}

/// Minimal HTTP/1.1 backend answering GET requests by exact path
pub struct MockBackend {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub async fn start(routes: Vec<(&'static str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock backend");
        let addr = listener.local_addr().expect("failed to get local address");
        let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
        let hits = Arc::new(Mutex::new(Vec::new()));

        let server_hits = hits.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                let hits = server_hits.clone();

                tokio::spawn(async move {
                    let mut reader = BufReader::new(&mut stream);
                    let mut request_line = String::new();
                    if reader.read_line(&mut request_line).await.is_err() {
                        return;
                    }

                    // Skip headers
                    loop {
                        let mut line = String::new();
                        match reader.read_line(&mut line).await {
                            Ok(0) | Err(_) => return,
                            Ok(_) if line.trim().is_empty() => break,
                            Ok(_) => {}
                        }
                    }

                    let path = request_line
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or_default()
                        .to_string();
                    hits.lock().unwrap().push(path.clone());

                    let route = routes
                        .get(path.as_str())
                        .cloned()
                        .unwrap_or_else(|| Route::status(404));
                    tokio::time::sleep(route.delay).await;

                    let response = format!(
                        "HTTP/1.1 {} MOCK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        route.status,
                        route.body.len(),
                        route.body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
        }
    }

    pub fn client(&self) -> ApiClient {
        let config = ApiConfig {
            base_url: self.base_url.parse().expect("invalid mock base URL"),
        };
        ApiClient::new(&config).expect("failed to create API client")
    }

    /// Paths requested so far, in arrival order
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

pub const DEPARTMENTS: &str = r#"[{"id":1,"name":"CS"},{"id":2,"name":"Math"}]"#;
pub const CS_STUDENTS: &str =
    r#"[{"id":10,"firstname":"Ada","lastname":"Lovelace","department":{"id":1,"name":"CS"}}]"#;
pub const MATH_STUDENTS: &str =
    r#"[{"id":20,"firstname":"Emmy","lastname":"Noether","department":null}]"#;
