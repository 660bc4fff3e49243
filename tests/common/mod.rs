//! Shared test utilities: a scripted fake backend and client helpers

#![allow(dead_code)]

use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use cirqulofit::api::ApiClient;
use cirqulofit::config::ApiSettings;
use tiny_http::{Header, Response, Server};

/// Canned answer for one `METHOD /path` pair
#[derive(Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Route {
    pub fn json(method: &'static str, path: &'static str, status: u16, body: &str) -> Self {
        Self {
            method,
            path,
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// What the fake backend received
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Local HTTP server answering from a fixed route table
pub struct FakeBackend {
    pub base_url: String,
    server: Arc<Server>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub fn start(routes: Vec<Route>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("Failed to bind fake backend"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("Fake backend has no IP address")
            .port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker = Arc::clone(&server);
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for mut request in worker.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                let url = request.url().to_string();
                let path = url.split('?').next().unwrap_or_default().to_string();
                let method = request.method().as_str().to_string();
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());

                log.lock().unwrap().push(Recorded {
                    method: method.clone(),
                    url,
                    authorization,
                    body,
                });

                let route = routes
                    .iter()
                    .find(|r| r.method == method && r.path == path)
                    .cloned()
                    .unwrap_or_else(|| Route::json("", "", 404, r#"{"detail":"Not Found"}"#));

                if let Some(delay) = route.delay {
                    thread::sleep(delay);
                }

                let header =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                let response = Response::from_string(route.body)
                    .with_status_code(route.status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            server,
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.url.split('?').next() == Some(path))
            .count()
    }

    pub fn client(&self) -> ApiClient {
        client_for(&self.base_url, 2)
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

pub fn client_for(base_url: &str, timeout_secs: u64) -> ApiClient {
    ApiClient::new(&ApiSettings {
        base_url: base_url.to_string(),
        timeout_secs,
    })
}

/// Base URL on which nothing listens
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub const STATS_PATH: &str = "/api/workouts/stats/summary";

/// Summary used across tests: level 3, 250 XP, 12 workouts
pub const REMOTE_SUMMARY: &str = r#"{
    "level": 3,
    "total_xp": 250,
    "total_workouts": 12,
    "total_exercises": 40,
    "current_streak": 2,
    "longest_streak": 5,
    "level_progress": 40.0,
    "achievements_unlocked": 2
}"#;

pub const USER: &str = r#"{
    "id": 1,
    "name": "Ana",
    "email": "ana@example.com",
    "gender": "female",
    "is_active": true,
    "created_at": "2024-03-01T10:00:00"
}"#;
