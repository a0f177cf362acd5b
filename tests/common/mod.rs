#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use contact_relay::config::{Config, SmtpConfig, TlsMode};
use contact_relay::db::SubmissionStore;
use contact_relay::email::{ContactEmail, Notifier};
use contact_relay::models::{NewSubmission, Submission};

/// In-memory store that records every insert and can be told to fail.
#[derive(Default)]
pub struct RecordingStore {
    rows: Mutex<Vec<Submission>>,
    failing: AtomicBool,
    attempts: AtomicUsize,
}

impl RecordingStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    pub fn rows(&self) -> Vec<Submission> {
        self.rows.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionStore for RecordingStore {
    async fn create(&self, submission: &NewSubmission) -> Result<Submission, sqlx::Error> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let row = Submission {
            id: Uuid::new_v4(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

/// Notifier that records every email it is asked to deliver.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<ContactEmail>>,
    failing: AtomicBool,
    attempts: AtomicUsize,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.failing.store(true, Ordering::SeqCst);
        notifier
    }

    pub fn sent(&self) -> Vec<ContactEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, email: &ContactEmail) -> Result<(), String> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err("Failed to send email: connection refused".to_string());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// A running test server wired to in-memory collaborators.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<RecordingStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to the contact route, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        cors_origins: vec![
            "http://localhost:5173".to_string(),
            "https://portfolio.example.com".to_string(),
        ],
        max_body_size: 1024,
        log_level: "warn".to_string(),
        smtp: SmtpConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            tls: TlsMode::None,
            user: "owner@example.com".to_string(),
            pass: "app-password".to_string(),
            from_name: "Portfolio Contact".to_string(),
            owner: "owner@example.com".to_string(),
        },
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(RecordingStore::default(), RecordingNotifier::default()).await
}

/// Spawn the router on a random port with the given collaborators.
pub async fn spawn_app_with(store: RecordingStore, notifier: RecordingNotifier) -> TestApp {
    let store = Arc::new(store);
    let notifier = Arc::new(notifier);

    let app = contact_relay::build_app(test_config(), store.clone(), notifier.clone());
    let addr = serve(app).await;

    TestApp {
        addr,
        client: Client::new(),
        store,
        notifier,
    }
}

/// Bind to a random port and serve the router in the background.
pub async fn serve(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}
